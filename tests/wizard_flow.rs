use std::fs;
use std::path::Path;
use std::time::Duration;

use stepwise::core::action::{Action, Effect, Key, update};
use stepwise::core::state::Wizard;
use stepwise::tasks::{Task, TaskSettings, run_task};

// ============================================================================
// Helper Functions
// ============================================================================

fn settings(dir: &Path) -> TaskSettings {
    TaskSettings {
        directory: dir.to_path_buf(),
        max_entries: 6,
        delay: Duration::ZERO,
    }
}

/// Applies an action and runs every task it spawns to completion, feeding the
/// results back in the order the tasks were issued. Returns the tasks run.
async fn dispatch(wizard: &mut Wizard, action: Action, settings: &TaskSettings) -> Vec<Task> {
    let mut ran = Vec::new();
    let mut pending = vec![action];
    while let Some(action) = pending.pop() {
        if let Effect::Spawn(tasks) = update(wizard, action) {
            for task in tasks {
                ran.push(task.clone());
                pending.push(run_task(task, settings).await);
            }
        }
    }
    ran
}

async fn started_wizard(settings: &TaskSettings) -> Wizard {
    let mut wizard = Wizard::new();
    for task in wizard.init() {
        let action = run_task(task, settings).await;
        update(&mut wizard, action);
    }
    wizard
}

fn scratch_dir(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in names {
        fs::write(dir.path().join(name), "").unwrap();
    }
    dir
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_select_first_entry_and_move_forward() {
    let dir = scratch_dir(&["report.csv"]);
    let settings = settings(dir.path());
    let mut wizard = started_wizard(&settings).await;
    assert!(wizard.view("*").contains("> [ ] report.csv"));

    dispatch(&mut wizard, Action::Key(Key::Enter), &settings).await;
    let ran = dispatch(&mut wizard, Action::Key(Key::Right), &settings).await;

    assert_eq!(ran, vec![Task::ChangeScreen { from: 0, to: 1 }]);
    assert_eq!(wizard.screen, 1);
    let view = wizard.view("*");
    assert!(view.contains("INFORMATIVE MESSAGE: Welcome to screen 2"));
    assert!(view.ends_with("Filename selected: report.csv"));
}

#[tokio::test]
async fn test_move_forward_without_selection() {
    let dir = scratch_dir(&["a", "b"]);
    let settings = settings(dir.path());
    let mut wizard = started_wizard(&settings).await;

    let ran = dispatch(&mut wizard, Action::Key(Key::Right), &settings).await;

    assert!(ran.is_empty());
    assert_eq!(wizard.screen, 0);
    assert!(wizard.view("*").starts_with("ERROR: select file plz\n"));
}

#[tokio::test]
async fn test_round_trip_keeps_selection() {
    let dir = scratch_dir(&["a", "b", "c"]);
    let settings = settings(dir.path());
    let mut wizard = started_wizard(&settings).await;

    dispatch(&mut wizard, Action::Key(Key::Down), &settings).await;
    dispatch(&mut wizard, Action::Key(Key::Enter), &settings).await;
    let before = wizard.screens[0].exported_filenames();
    assert_eq!(before.len(), 1);

    dispatch(&mut wizard, Action::Key(Key::Right), &settings).await;
    assert_eq!(wizard.screen, 1);
    dispatch(&mut wizard, Action::Key(Key::Left), &settings).await;
    assert_eq!(wizard.screen, 0);

    assert_eq!(wizard.screens[0].exported_filenames(), before);
    assert!(wizard.view("*").contains("Welcome to screen 1"));
}

#[tokio::test]
async fn test_requery_repopulates_at_most_six() {
    let names: Vec<String> = (0..9).map(|i| format!("f{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let dir = scratch_dir(&refs);
    let settings = settings(dir.path());
    let mut wizard = started_wizard(&settings).await;

    let ran = dispatch(&mut wizard, Action::Key(Key::Char('r')), &settings).await;

    assert_eq!(ran, vec![Task::ListDirectory { screen: 0 }]);
    let rows = wizard
        .view("*")
        .lines()
        .filter(|l| l.contains("] f"))
        .count();
    assert_eq!(rows, 6);
}

#[tokio::test]
async fn test_quit() {
    let dir = scratch_dir(&[]);
    let settings = settings(dir.path());
    let mut wizard = started_wizard(&settings).await;
    assert_eq!(update(&mut wizard, Action::Key(Key::Char('q'))), Effect::Quit);
}
