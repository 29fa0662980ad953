//! # KeyHints Component
//!
//! Bottom line listing the key bindings. Navigation hints are dimmed while
//! a transition is in flight, since arrows won't move between screens then.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const BINDINGS: [(&str, &str, bool); 5] = [
    ("←/→", "screen", true),
    ("↑/↓", "move", false),
    ("enter", "toggle", false),
    ("c", "re-query", false),
    ("q", "quit", false),
];

pub struct KeyHints {
    pub waiting: bool,
}

impl KeyHints {
    pub fn new(waiting: bool) -> Self {
        Self { waiting }
    }
}

impl Component for KeyHints {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (key, label, navigation) in BINDINGS {
            let style = if navigation && self.waiting {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {key} "), style.add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!("{label} "), style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
