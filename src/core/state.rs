//! # Wizard State
//!
//! All application state in one place. No terminal types live here;
//! presentation state is owned by the `tui` module.
//!
//! ```text
//! Wizard
//! ├── screen: usize               // active index, always < screens.len()
//! ├── screens: Vec<Screen>        // ordered, built once at startup
//! ├── error: Option<String>       // header error (validation rejection)
//! ├── information: Option<String> // header info (welcome text)
//! └── wait: Option<String>        // set while a transition is in flight
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::screen::{FileDisplay, FilePicker, Screen};
use crate::tasks::Task;

#[derive(Debug, Clone)]
pub struct Wizard {
    pub screen: usize,
    pub screens: Vec<Screen>,
    pub error: Option<String>,
    pub information: Option<String>,
    pub wait: Option<String>,
}

impl Wizard {
    /// The two-step file wizard: pick files, then display them.
    pub fn new() -> Self {
        Self::from_nonempty(vec![
            Screen::FilePicker(FilePicker::new()),
            Screen::FileDisplay(FileDisplay::new()),
        ])
    }

    /// Build a wizard over `screens`. None when there are no screens,
    /// since the active index must point at one.
    pub fn with_screens(screens: Vec<Screen>) -> Option<Self> {
        if screens.is_empty() {
            return None;
        }
        Some(Self::from_nonempty(screens))
    }

    fn from_nonempty(screens: Vec<Screen>) -> Self {
        Self {
            screen: 0,
            screens,
            error: None,
            information: None,
            wait: None,
        }
    }

    /// Collect every screen's startup work.
    pub fn init(&mut self) -> Vec<Task> {
        self.screens
            .iter_mut()
            .enumerate()
            .flat_map(|(index, screen)| screen.init(index))
            .collect()
    }

    pub fn num_screens(&self) -> usize {
        self.screens.len()
    }

    pub fn active(&self) -> &Screen {
        &self.screens[self.screen]
    }

    pub fn is_waiting(&self) -> bool {
        self.wait.is_some()
    }

    /// The full text view: header lines followed by the active screen.
    ///
    /// While waiting only the spinner line is shown.
    pub fn view(&self, glyph: &str) -> String {
        if let Some(wait) = &self.wait {
            return format!("{glyph} Please wait: {wait}");
        }

        let mut s = String::new();
        if let Some(error) = &self.error {
            s.push_str(&format!("ERROR: {error}\n"));
        }
        if let Some(information) = &self.information {
            s.push_str(&format!("INFORMATIVE MESSAGE: {information}\n"));
        }
        s.push_str(&format!(
            "You are on screen {} of {}.\n",
            self.screen + 1,
            self.num_screens()
        ));
        s.push_str(&self.active().render(glyph));
        s
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_wizard;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wizard_new_defaults() {
        let wizard = Wizard::new();
        assert_eq!(wizard.screen, 0);
        assert_eq!(wizard.num_screens(), 2);
        assert!(wizard.error.is_none());
        assert!(!wizard.is_waiting());
    }

    #[test]
    fn test_init_lists_directory_once() {
        let mut wizard = Wizard::new();
        assert_eq!(wizard.init(), vec![Task::ListDirectory { screen: 0 }]);
    }

    #[test]
    fn test_view_while_waiting_shows_only_spinner() {
        let mut wizard = test_wizard(&["a"]);
        wizard.error = Some("boom".into());
        wizard.wait = Some("thinking real hard ...".into());
        assert_eq!(wizard.view("⣾"), "⣾ Please wait: thinking real hard ...");
    }

    #[test]
    fn test_view_header_order() {
        let mut wizard = test_wizard(&["a"]);
        wizard.error = Some("select file plz".into());
        wizard.information = Some("Welcome to screen 1".into());
        let view = wizard.view("*");
        let lines: Vec<&str> = view.lines().take(3).collect();
        assert_eq!(
            lines,
            vec![
                "ERROR: select file plz",
                "INFORMATIVE MESSAGE: Welcome to screen 1",
                "You are on screen 1 of 2.",
            ]
        );
        assert!(view.contains("> [ ] a"));
    }

    #[test]
    fn test_with_screens_requires_one_screen() {
        assert!(Wizard::with_screens(Vec::new()).is_none());

        let wizard = Wizard::with_screens(vec![Screen::FileDisplay(FileDisplay::new())]).unwrap();
        assert_eq!(wizard.num_screens(), 1);
        assert_eq!(wizard.screen, 0);
    }
}
