//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the wizard,
//! translates keyboard events into core `Action` values, and runs the
//! background tasks the core asks for.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! One action is applied to completion before the next is read:
//!
//! ```text
//! draw ─► poll keys ─► update() ─► drain task results ─► update() ─► draw
//!                         │                                  │
//!                         └──── Effect::Spawn ─► tokio::spawn ┘
//! ```
//!
//! Tasks post their single completion action into an `mpsc` channel. The
//! loop only reads it between input polls, so the `Wizard` is never touched
//! from another thread.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (transition in flight or directory listing pending):
//!   draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms and only redraws on events.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::screen::Screen;
use crate::core::state::Wizard;
use crate::tasks::{Task, TaskSettings, run_task};
use crate::tui::components::FRAMES_PER_SEC;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// True while something on screen is animating a spinner.
fn is_animating(wizard: &Wizard) -> bool {
    wizard.is_waiting()
        || wizard
            .screens
            .iter()
            .any(|screen| matches!(screen, Screen::FilePicker(picker) if picker.is_loading()))
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let settings = TaskSettings::from(&config);
    let mut wizard = Wizard::new();

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new().and_then(|_guard| {
        event_loop(&mut terminal, &mut wizard, &settings)
    });
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    wizard: &mut Wizard,
    settings: &TaskSettings,
) -> io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    for task in wizard.init() {
        spawn_task(task, settings.clone(), tx.clone());
    }

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = is_animating(wizard);
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * FRAMES_PER_SEC) as usize;
            terminal.draw(|f| ui::draw_ui(f, &*wizard, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };

        // Process first event + drain all pending events before next draw
        let mut next = poll_event_timeout(timeout)?;
        while let Some(event) = next {
            needs_redraw = true;
            let action = match event {
                TuiEvent::Resize => None,
                TuiEvent::ForceQuit => Some(Action::Quit),
                TuiEvent::Key(key) => Some(Action::Key(key)),
            };
            if let Some(action) = action
                && apply(wizard, action, settings, &tx) == Flow::Quit
            {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }

        // Handle background task completions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if apply(wizard, action, settings, &tx) == Flow::Quit {
                return Ok(());
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn apply(
    wizard: &mut Wizard,
    action: Action,
    settings: &TaskSettings,
    tx: &mpsc::Sender<Action>,
) -> Flow {
    match update(wizard, action) {
        Effect::Quit => {
            info!("Quit requested");
            Flow::Quit
        }
        Effect::Spawn(tasks) => {
            for task in tasks {
                spawn_task(task, settings.clone(), tx.clone());
            }
            Flow::Continue
        }
        Effect::None => Flow::Continue,
    }
}

fn spawn_task(task: Task, settings: TaskSettings, tx: mpsc::Sender<Action>) {
    info!("Spawning {:?}", task);
    tokio::spawn(async move {
        let action = run_task(task, &settings).await;
        if tx.send(action).is_err() {
            warn!("Failed to send task result: receiver dropped");
        }
    });
}
