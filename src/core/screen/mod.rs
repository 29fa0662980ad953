//! # Screens
//!
//! One page of the wizard. The set of screens is closed, so `Screen` is an
//! enum and every hook dispatches with a `match` to the variant's own type.
//!
//! ```text
//! Screen
//! ├── FilePicker   (screen 1: choose entries from a directory listing)
//! └── FileDisplay  (screen 2: show what was chosen)
//! ```
//!
//! ## Transition Hooks
//!
//! Moving forward hands a [`Payload`] from the active screen to the next one:
//!
//! ```text
//! payload ─► validate(&payload) ─ Err(Rejection) ─► header error, no move
//!                   │
//!                   Ok
//!                   ▼
//!            accept(payload)      (infallible)
//! ```
//!
//! `validate` takes `&self` and never changes the screen. `accept` is only
//! called after `validate` succeeded with the same payload.

pub mod file_display;
pub mod file_picker;

use std::fmt;

use crate::core::action::Key;
use crate::tasks::Task;

pub use file_display::FileDisplay;
pub use file_picker::FilePicker;

/// Data handed to a screen when the wizard moves onto it.
///
/// Keyed by destination: each variant is the input shape of one screen kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// The first screen takes nothing.
    FilePicker,
    FileDisplay { filenames: Vec<String> },
}

/// Completion events produced by a screen's own background work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    ChoicesLoaded(Vec<String>),
    ListingFailed(String),
}

/// A screen refused a forward transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub reason: String,
}

impl Rejection {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reason)
    }
}

impl std::error::Error for Rejection {}

#[derive(Debug, Clone)]
pub enum Screen {
    FilePicker(FilePicker),
    FileDisplay(FileDisplay),
}

impl Screen {
    /// Short title for the frame around the screen body.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::FilePicker(_) => "Pick files",
            Screen::FileDisplay(_) => "Selected files",
        }
    }

    /// Background work to start as soon as the wizard starts.
    /// `index` is this screen's position, used to route completion events back.
    pub fn init(&mut self, index: usize) -> Vec<Task> {
        match self {
            Screen::FilePicker(picker) => picker.init(index),
            Screen::FileDisplay(_) => Vec::new(),
        }
    }

    /// Handle a key press forwarded by the wizard. May schedule one task.
    pub fn handle_key(&mut self, index: usize, key: Key) -> Option<Task> {
        match self {
            Screen::FilePicker(picker) => picker.handle_key(index, key),
            Screen::FileDisplay(display) => display.handle_key(key),
        }
    }

    /// Handle the completion of this screen's own background work.
    pub fn handle_event(&mut self, event: ScreenEvent) {
        match self {
            Screen::FilePicker(picker) => picker.handle_event(event),
            Screen::FileDisplay(_) => {
                log::warn!("File display has no background work, dropping {:?}", event);
            }
        }
    }

    pub fn validate(&self, payload: &Payload) -> Result<(), Rejection> {
        match (self, payload) {
            (Screen::FilePicker(_), Payload::FilePicker) => Ok(()),
            (Screen::FileDisplay(display), Payload::FileDisplay { filenames }) => {
                display.validate(filenames)
            }
            _ => Err(Rejection::new("unexpected payload")),
        }
    }

    pub fn accept(&mut self, payload: Payload) {
        match (self, payload) {
            (Screen::FilePicker(_), Payload::FilePicker) => {}
            (Screen::FileDisplay(display), Payload::FileDisplay { filenames }) => {
                display.accept(filenames)
            }
            (screen, payload) => {
                log::warn!(
                    "Ignoring unvalidated payload {:?} for screen '{}'",
                    payload,
                    screen.title()
                );
            }
        }
    }

    /// What this screen hands to its successor.
    pub fn exported_filenames(&self) -> Vec<String> {
        match self {
            Screen::FilePicker(picker) => picker.selected_filenames(),
            Screen::FileDisplay(display) => display.filenames.clone(),
        }
    }

    /// The payload this screen expects, built from `source`'s exported state.
    pub fn payload_from(&self, source: &Screen) -> Payload {
        match self {
            Screen::FilePicker(_) => Payload::FilePicker,
            Screen::FileDisplay(_) => Payload::FileDisplay {
                filenames: source.exported_filenames(),
            },
        }
    }

    /// Text view of the screen. `glyph` is the current spinner frame.
    pub fn render(&self, glyph: &str) -> String {
        match self {
            Screen::FilePicker(picker) => picker.render(glyph),
            Screen::FileDisplay(display) => display.render(),
        }
    }
}
