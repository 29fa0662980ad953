//! # Core Application Logic
//!
//! The wizard's business logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Wizard (state)       │
//!                    │  • Screen (pages)       │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal types.     │
//!                    └───────────┬─────────────┘
//!                                │ Effect::Spawn(tasks)
//!                                ▼
//!                    ┌─────────────────────────┐
//!                    │  tasks (slow work)      │──► Action back into update()
//!                    └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Wizard` struct — all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`screen`]: The screens and their validate/accept hooks
//! - [`config`]: Layered settings (file, env, CLI)

pub mod action;
pub mod config;
pub mod screen;
pub mod state;
