//! # TitleBar Component
//!
//! Single-line bar at the top of the frame showing where the user is in the
//! wizard.
//!
//! ```text
//! Stepwise | step 1 of 2: Pick files | waiting
//! ```
//!
//! Purely presentational: all data arrives as props, so it is trivial to
//! test with a `TestBackend`.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Top status bar component.
pub struct TitleBar {
    /// 0-based index of the active screen
    pub step: usize,
    pub total: usize,
    /// Title of the active screen
    pub screen_title: String,
    /// A transition is in flight
    pub waiting: bool,
}

impl TitleBar {
    pub fn new(step: usize, total: usize, screen_title: impl Into<String>, waiting: bool) -> Self {
        Self {
            step,
            total,
            screen_title: screen_title.into(),
            waiting,
        }
    }

    pub fn text(&self) -> String {
        let base = format!(
            "Stepwise | step {} of {}: {}",
            self.step + 1,
            self.total,
            self.screen_title
        );
        if self.waiting {
            format!("{base} | waiting")
        } else {
            base
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.waiting {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Cyan)
        };
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}
