//! # Spinner
//!
//! Braille dot spinner shown while a transition or listing is in flight.
//! The frame counter comes from the event loop's animation clock.

const FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Frames advanced per second.
pub const FRAMES_PER_SEC: f32 = 12.0;

pub struct Spinner {
    frame_index: usize,
}

impl Spinner {
    pub fn new(frame_index: usize) -> Self {
        Self { frame_index }
    }

    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame_index % FRAMES.len()]
    }
}
