//! Terminal flashcard renderer.
//!
//! Renders the adapter's [`Screen`](crate::adapter::Screen) into a simple
//! framebuffer, then flushes only the changed cells to the terminal. No widget
//! or layout library is involved: the window is a coloured background, the
//! card is a filled rectangle, and the two buttons are labelled strips whose
//! positions are handed back to the input layer for click hit-testing.

pub mod fb;
pub mod flashcard_view;
pub mod renderer;

pub use flashy_adapter as adapter;
pub use flashy_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use flashcard_view::{CardLayout, FlashcardView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
