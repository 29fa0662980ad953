//! # Background Tasks
//!
//! Slow work requested by the core as [`Task`] values. Each task runs to
//! completion and yields exactly one [`Action`], which the event loop feeds
//! back into `update()`. There is no cancellation: a task started before the
//! user navigated away still reports back.
//!
//! The fixed delay stands in for a real query (e.g. a database round trip).

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};

use crate::core::action::{Action, welcome_message};
use crate::core::config::ResolvedConfig;
use crate::core::screen::ScreenEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// List the configured directory for the picker at index `screen`.
    ListDirectory { screen: usize },
    /// Pretend to prepare screen `to`, then announce the change.
    ChangeScreen { from: usize, to: usize },
}

/// Everything a task needs from configuration.
#[derive(Debug, Clone)]
pub struct TaskSettings {
    pub directory: PathBuf,
    pub max_entries: usize,
    pub delay: Duration,
}

impl From<&ResolvedConfig> for TaskSettings {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            directory: config.directory.clone(),
            max_entries: config.max_entries,
            delay: config.delay,
        }
    }
}

/// Run a task to completion and return its single completion action.
pub async fn run_task(task: Task, settings: &TaskSettings) -> Action {
    debug!("Running {:?}", task);
    tokio::time::sleep(settings.delay).await;
    match task {
        Task::ListDirectory { screen } => {
            let event = match list_directory(&settings.directory, settings.max_entries).await {
                Ok(results) => ScreenEvent::ChoicesLoaded(results),
                Err(e) => {
                    warn!("Failed to list {}: {}", settings.directory.display(), e);
                    ScreenEvent::ListingFailed(e.to_string())
                }
            };
            Action::Screen { screen, event }
        }
        Task::ChangeScreen { from, to } => Action::ScreenChanged {
            from,
            to,
            message: welcome_message(to),
        },
    }
}

/// First `limit` entry names of `dir`, in the order the OS returns them.
pub async fn list_directory(dir: &Path, limit: usize) -> std::io::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut names = Vec::new();
    while names.len() < limit {
        match entries.next_entry().await? {
            Some(entry) => names.push(entry.file_name().to_string_lossy().into_owned()),
            None => break,
        }
    }
    Ok(names)
}
