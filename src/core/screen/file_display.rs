//! # File Display
//!
//! Second screen. Shows the filenames handed over by the picker.

use log::debug;

use crate::core::action::Key;
use crate::core::screen::Rejection;
use crate::tasks::Task;

pub const NO_SELECTION: &str = "select file plz";

#[derive(Debug, Clone, Default)]
pub struct FileDisplay {
    pub filenames: Vec<String>,
}

impl FileDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self, filenames: &[String]) -> Result<(), Rejection> {
        debug!("FileDisplay::validate {:?}", filenames);
        if filenames.is_empty() {
            return Err(Rejection::new(NO_SELECTION));
        }
        Ok(())
    }

    pub fn accept(&mut self, filenames: Vec<String>) {
        self.filenames = filenames;
    }

    pub fn handle_key(&mut self, key: Key) -> Option<Task> {
        debug!("FileDisplay ignoring {:?}", key);
        None
    }

    pub fn render(&self) -> String {
        if self.filenames.is_empty() {
            return "ERROR: no files selected\nhint: press left to go back and select with enter\n"
                .to_string();
        }
        format!("Filename selected: {}", self.filenames.join(", "))
    }
}
