use crate::core::state::Wizard;
use crate::tui::component::Component;
use crate::tui::components::{KeyHints, Spinner, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};

pub fn draw_ui(frame: &mut Frame, wizard: &Wizard, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hints_area] = layout.areas(frame.area());

    let waiting = wizard.is_waiting();
    TitleBar::new(
        wizard.screen,
        wizard.num_screens(),
        wizard.active().title(),
        waiting,
    )
    .render(frame, title_area);

    draw_wizard_view(frame, main_area, wizard, spinner_frame);

    KeyHints::new(waiting).render(frame, hints_area);
}

fn draw_wizard_view(frame: &mut Frame, area: Rect, wizard: &Wizard, spinner_frame: usize) {
    let glyph = Spinner::new(spinner_frame).glyph();
    let view = wizard.view(glyph);

    let lines: Vec<Line> = view.lines().map(style_line).collect();
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::bordered()
                .title(format!(" {} ", wizard.active().title()))
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Header lines get their own colors; everything else is plain.
fn style_line(line: &str) -> Line<'_> {
    let style = if line.starts_with("ERROR") {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if line.starts_with("INFORMATIVE MESSAGE") {
        Style::default().fg(Color::Green)
    } else if line.contains("Please wait") {
        Style::default().fg(Color::Yellow)
    } else if line.starts_with("> ") {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(Span::styled(line, style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, Key, update};
    use crate::test_support::{finish_transition, test_wizard};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(wizard: &Wizard) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                draw_ui(f, wizard, 0);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_ui_first_screen() {
        let wizard = test_wizard(&["Cargo.toml", "src"]);
        let text = screen_text(&wizard);
        assert!(text.contains("step 1 of 2: Pick files"));
        assert!(text.contains("You are on screen 1 of 2."));
        assert!(text.contains("> [ ] Cargo.toml"));
    }

    #[test]
    fn test_draw_ui_waiting_shows_spinner() {
        let mut wizard = test_wizard(&["a"]);
        update(&mut wizard, Action::Key(Key::Enter));
        update(&mut wizard, Action::Key(Key::Right));
        let text = screen_text(&wizard);
        assert!(text.contains("⣾ Please wait: thinking real hard ..."));
        assert!(!text.contains("You are on screen"));
    }

    #[test]
    fn test_draw_ui_second_screen() {
        let mut wizard = test_wizard(&["a"]);
        update(&mut wizard, Action::Key(Key::Enter));
        update(&mut wizard, Action::Key(Key::Right));
        finish_transition(&mut wizard, 0, 1);
        let text = screen_text(&wizard);
        assert!(text.contains("INFORMATIVE MESSAGE: Welcome to screen 2"));
        assert!(text.contains("Filename selected: a"));
    }

    #[test]
    fn test_style_line_colors_errors() {
        let line = style_line("ERROR: select file plz");
        assert_eq!(line.spans[0].style.fg, Some(Color::Red));
    }
}
