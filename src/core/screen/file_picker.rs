//! # File Picker
//!
//! First screen. Lists the first few entries of a directory (in listing
//! order) and lets the user toggle a selection on each one.
//!
//! The selection is keyed by position in the current listing, so it survives
//! navigating away and back but is dropped when the listing is re-queried.

use std::collections::HashSet;

use log::{debug, info};

use crate::core::action::Key;
use crate::core::screen::ScreenEvent;
use crate::tasks::Task;

pub const HELP_LINE: &str =
    "[enter]: toggle; up/down: move arrow; right/left: change screen, c: clear and re-query; q: quit.";

#[derive(Debug, Clone, Default)]
pub struct FilePicker {
    pub choices: Vec<String>,
    pub cursor: usize,
    pub selected: HashSet<usize>,
    /// Listing tasks still in flight. Only the newest one's result is kept.
    pub pending_listings: usize,
    /// Last listing failure, cleared by the next successful listing.
    pub error: Option<String>,
}

impl FilePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self, index: usize) -> Vec<Task> {
        self.pending_listings += 1;
        vec![Task::ListDirectory { screen: index }]
    }

    pub fn handle_key(&mut self, index: usize, key: Key) -> Option<Task> {
        match key {
            Key::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            Key::Down => {
                if self.cursor + 1 < self.choices.len() {
                    self.cursor += 1;
                }
                None
            }
            Key::Enter => {
                self.toggle();
                None
            }
            Key::Char('c') | Key::Char('r') => Some(self.requery(index)),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending_listings > 0
    }

    pub fn handle_event(&mut self, event: ScreenEvent) {
        self.pending_listings = self.pending_listings.saturating_sub(1);
        if self.is_loading() {
            debug!("Dropping superseded listing result: {:?}", event);
            return;
        }
        match event {
            ScreenEvent::ChoicesLoaded(results) => {
                info!("File picker loaded {} entries", results.len());
                self.choices = results;
                self.error = None;
                if self.cursor >= self.choices.len() {
                    self.cursor = self.choices.len().saturating_sub(1);
                }
            }
            ScreenEvent::ListingFailed(reason) => {
                self.choices.clear();
                self.error = Some(reason);
            }
        }
    }

    /// Names of the selected entries, in listing order.
    pub fn selected_filenames(&self) -> Vec<String> {
        self.choices
            .iter()
            .enumerate()
            .filter(|(i, _)| self.selected.contains(i))
            .map(|(_, name)| name.clone())
            .collect()
    }

    fn toggle(&mut self) {
        if self.cursor >= self.choices.len() {
            return;
        }
        if !self.selected.remove(&self.cursor) {
            self.selected.insert(self.cursor);
        }
        debug!("File picker selection: {:?}", self.selected);
    }

    fn requery(&mut self, index: usize) -> Task {
        self.choices.clear();
        self.selected.clear();
        self.cursor = 0;
        self.error = None;
        self.pending_listings += 1;
        Task::ListDirectory { screen: index }
    }

    pub fn render(&self, glyph: &str) -> String {
        if let Some(error) = &self.error {
            return format!("ERROR listing directory: {error}\npress c to re-query\n");
        }
        if self.is_loading() {
            return format!("{glyph} waiting for table list\n");
        }
        if self.choices.is_empty() {
            return "no entries found\npress c to re-query\n".to_string();
        }

        let mut s = format!("{HELP_LINE}\n\n");
        for (i, choice) in self.choices.iter().enumerate() {
            let cursor = if self.cursor == i { ">" } else { " " };
            let checked = if self.selected.contains(&i) { "x" } else { " " };
            s.push_str(&format!("{cursor} [{checked}] {choice}\n"));
        }
        s
    }
}
