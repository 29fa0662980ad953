//! # TUI Components
//!
//! All UI components for the terminal interface. Each one is stateless and
//! props-based: it receives everything it draws as struct fields, so the
//! dependencies are explicit and every component can be tested against a
//! `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs  (top line: step indicator)
//! ├── spinner.rs    (animated glyph for waiting states)
//! └── key_hints.rs  (bottom line: key bindings)
//! ```

mod key_hints;
mod spinner;
mod title_bar;

pub use key_hints::KeyHints;
pub use spinner::{FRAMES_PER_SEC, Spinner};
pub use title_bar::TitleBar;
