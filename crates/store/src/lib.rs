//! Word persistence - load with fallback, remove and rewrite
//!
//! Two flat CSV files back a session:
//!
//! - **progress** (`words_to_learn.csv`): words still being learned. Read at
//!   startup when present, rewritten in full after every word marked known.
//! - **original** (`french_words.csv`): the complete seed list. Read only when
//!   no progress file exists (first run, or after deleting the progress file).
//!
//! Both share one schema: a header row naming the source and target language
//! columns, then one row per word.

pub mod codec;
pub mod config;
pub mod error;
pub mod store;

pub use flashy_types as types;

pub use codec::{read_words, write_words};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use store::{LoadSource, WordStore};
