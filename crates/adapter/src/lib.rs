//! Presentation adapter - the layer between UI events and the card core
//!
//! The terminal runner (or any other host) feeds two kinds of events in:
//!
//! - **timer**: [`Presenter::tick`] with elapsed milliseconds; fires the
//!   pending flip when due
//! - **buttons**: [`Presenter::handle`] with a [`UserIntent`](crate::types::UserIntent)
//!
//! | Event        | Core calls                                          |
//! |--------------|-----------------------------------------------------|
//! | timer fires  | `flip()`                                            |
//! | "don't know" | `advance()`                                         |
//! | "know"       | `mark_known()`, `remove_and_persist()`, `advance()` |
//!
//! and reads a [`Screen`] back out: either a [`DisplayInstruction`] (label,
//! word, text colour, card face) or the finished state once every word has
//! been marked known.
//!
//! A failed progress write does not stop the session. The in-memory list keeps
//! the removal, the failure is logged, and [`Presenter::notice`] carries a short
//! message until the next successful write.

pub mod presenter;

pub use flashy_core as core;
pub use flashy_store as store;
pub use flashy_types as types;

pub use presenter::{DisplayInstruction, Presenter, Screen};
