use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Key;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key for the wizard (passed to core::update)
    Key(Key),
    /// Ctrl+C and Esc quit regardless of state
    ForceQuit,
    /// Terminal resized, only needs a redraw
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    })
}

/// Translate a crossterm key press into a wizard event.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Esc) => Some(TuiEvent::ForceQuit),
        (_, KeyCode::Up) => Some(TuiEvent::Key(Key::Up)),
        (_, KeyCode::Down) => Some(TuiEvent::Key(Key::Down)),
        (_, KeyCode::Left) => Some(TuiEvent::Key(Key::Left)),
        (_, KeyCode::Right) => Some(TuiEvent::Key(Key::Right)),
        (_, KeyCode::Enter) => Some(TuiEvent::Key(Key::Enter)),
        (_, KeyCode::Char(c)) => Some(TuiEvent::Key(Key::Char(c))),
        _ => None,
    }
}
