//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, update, welcome_message};
use crate::core::screen::ScreenEvent;
use crate::core::state::Wizard;

/// Creates a started wizard whose picker already finished listing `names`.
pub fn test_wizard(names: &[&str]) -> Wizard {
    let mut wizard = Wizard::new();
    wizard.init();
    update(
        &mut wizard,
        Action::Screen {
            screen: 0,
            event: ScreenEvent::ChoicesLoaded(names.iter().map(|n| n.to_string()).collect()),
        },
    );
    wizard
}

/// Delivers the completion event of a `ChangeScreen` task.
pub fn finish_transition(wizard: &mut Wizard, from: usize, to: usize) {
    update(
        wizard,
        Action::ScreenChanged {
            from,
            to,
            message: welcome_message(to),
        },
    );
}
