//! # Actions
//!
//! Everything that can happen in the wizard becomes an `Action`.
//! User presses right? That's `Action::Key(Key::Right)`.
//! A directory listing finishes? That's `Action::Screen { .. }`.
//!
//! The `update()` function applies an action to the state and returns an
//! [`Effect`] describing the I/O the caller should perform. No side effects
//! happen here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Navigation
//!
//! ```text
//!            Left (index > 0)                 Right (validate ok)
//!   Idle ─────────────────────► Waiting ◄──────────────────────── Idle
//!     ▲                            │                               │
//!     └──── ScreenChanged { to } ──┘        Right (rejected) ──────┘
//!                                           error set, stays Idle
//! ```
//!
//! Only one transition is in flight at a time: while waiting, arrow keys go
//! to the active screen instead of starting another move.

use log::{debug, info};

use crate::core::screen::ScreenEvent;
use crate::core::state::Wizard;
use crate::tasks::Task;

pub const BACKWARD_WAIT: &str = "reticulating splines ...";
pub const FORWARD_WAIT: &str = "thinking real hard ...";

/// Keys the wizard understands. Terminal-specific mapping lives in `tui::event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Char(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Key(Key),
    /// Quit regardless of state (Ctrl+C).
    Quit,
    /// A screen transition finished its simulated work.
    ScreenChanged {
        from: usize,
        to: usize,
        message: String,
    },
    /// A screen's own background work finished.
    Screen { screen: usize, event: ScreenEvent },
}

/// What the caller should do after `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    Spawn(Vec<Task>),
}

impl Effect {
    fn from_task(task: Option<Task>) -> Self {
        match task {
            Some(task) => Effect::Spawn(vec![task]),
            None => Effect::None,
        }
    }
}

/// Welcome text shown after arriving on screen `to` (0-based).
pub fn welcome_message(to: usize) -> String {
    format!("Welcome to screen {}", to + 1)
}

pub fn update(wizard: &mut Wizard, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Quit | Action::Key(Key::Char('q')) => Effect::Quit,
        Action::Key(Key::Left) if !wizard.is_waiting() => move_backward(wizard),
        Action::Key(Key::Right) if !wizard.is_waiting() => move_forward(wizard),
        Action::Key(key) => {
            let index = wizard.screen;
            Effect::from_task(wizard.screens[index].handle_key(index, key))
        }
        Action::ScreenChanged { from, to, message } => {
            info!("Screen changed {} -> {}", from, to);
            wizard.wait = None;
            wizard.information = Some(message);
            wizard.screen = to.min(wizard.num_screens() - 1);
            Effect::None
        }
        Action::Screen { screen, event } => {
            match wizard.screens.get_mut(screen) {
                Some(target) => target.handle_event(event),
                None => log::warn!("Dropping event for unknown screen {}: {:?}", screen, event),
            }
            Effect::None
        }
    }
}

fn move_backward(wizard: &mut Wizard) -> Effect {
    if wizard.screen == 0 {
        return Effect::None;
    }
    let from = wizard.screen;
    wizard.error = None;
    wizard.wait = Some(BACKWARD_WAIT.to_string());
    Effect::Spawn(vec![Task::ChangeScreen { from, to: from - 1 }])
}

fn move_forward(wizard: &mut Wizard) -> Effect {
    if wizard.screen + 1 >= wizard.num_screens() {
        return Effect::None;
    }
    let from = wizard.screen;
    let to = from + 1;

    let payload = wizard.screens[to].payload_from(&wizard.screens[from]);
    if let Err(rejection) = wizard.screens[to].validate(&payload) {
        info!("Screen {} rejected transition: {}", to, rejection);
        wizard.error = Some(rejection.reason);
        return Effect::None;
    }
    wizard.screens[to].accept(payload);

    wizard.error = None;
    wizard.wait = Some(FORWARD_WAIT.to_string());
    Effect::Spawn(vec![Task::ChangeScreen { from, to }])
}
