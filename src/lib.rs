//! Flashy (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benches can use `flashy::{core,store,...}`.

pub use flashy_adapter as adapter;
pub use flashy_core as core;
pub use flashy_input as input;
pub use flashy_store as store;
pub use flashy_term as term;
pub use flashy_types as types;
