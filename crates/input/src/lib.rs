//! Terminal input module.
//!
//! Maps `crossterm` events into [`crate::types::UserIntent`]. Only left clicks
//! on the two card buttons produce intents; there are no keyboard shortcuts
//! besides closing the window.

pub mod map;

pub use flashy_types as types;

pub use map::{handle_mouse_event, map_event, should_quit, InputOutcome};
