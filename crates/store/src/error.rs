use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(
        "no word data: progress file {} is missing and original dataset {} could not be read: {source}",
        progress.display(),
        original.display()
    )]
    DataUnavailable {
        progress: PathBuf,
        original: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no `{column}` column", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("{} line {line}: {reason}", path.display())]
    MalformedRow {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("failed to save progress to {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("word `{source_text}` / `{target_text}` is not in the list")]
    WordNotFound {
        source_text: String,
        target_text: String,
    },
}

pub type Result<T> = std::result::Result<T, StoreError>;
