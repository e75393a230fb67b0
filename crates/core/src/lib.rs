//! Core card logic module - pure, deterministic, and testable
//!
//! This module contains the card session state machine and the random card
//! selection. It has no dependencies on UI or file I/O, so it can be driven by
//! the terminal runner, by tests, or by any other host clock.
//!
//! # Module Structure
//!
//! - [`session`]: current card, face, and the single pending flip slot
//! - [`rng`]: seeded LCG used to draw cards uniformly
//!
//! # Example
//!
//! ```
//! use flashy_core::CardSession;
//! use flashy_types::{Face, Word, FLIP_DELAY_MS};
//!
//! let words = vec![Word::new("le chat", "the cat")];
//! let mut session = CardSession::new(12345);
//!
//! let view = session.advance(&words).unwrap();
//! assert_eq!(view.text(), "le chat");
//!
//! let flipped = session.tick(FLIP_DELAY_MS).unwrap();
//! assert_eq!(flipped.face, Face::Back);
//! assert_eq!(flipped.text(), "the cat");
//! ```
//!
//! # Timing
//!
//! The session uses a fixed timestep: the host calls
//! [`CardSession::tick`](session::CardSession::tick) with elapsed milliseconds,
//! and the flip fires once `FLIP_DELAY_MS` has elapsed since the last advance.

pub mod rng;
pub mod session;

pub use flashy_types as types;

pub use rng::SimpleRng;
pub use session::{CardSession, CardView, PendingFlip, SessionError};
