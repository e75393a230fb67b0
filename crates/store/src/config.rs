use std::path::{Path, PathBuf};

use crate::types::LanguagePair;

/// Default directory holding both data files.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Remaining words, rewritten after every word marked known.
pub const PROGRESS_FILE_NAME: &str = "words_to_learn.csv";

/// Full seed word list, never written.
pub const ORIGINAL_FILE_NAME: &str = "french_words.csv";

/// Where the word data lives and which columns hold each language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub progress_path: PathBuf,
    pub original_path: PathBuf,
    pub languages: LanguagePair,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

impl StoreConfig {
    /// Both files under `dir`, default column names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            progress_path: dir.join(PROGRESS_FILE_NAME),
            original_path: dir.join(ORIGINAL_FILE_NAME),
            languages: LanguagePair::default(),
        }
    }

    /// Create from environment variables.
    ///
    /// `FLASHY_DATA_DIR` relocates both files; unset or blank keeps `data/`.
    pub fn from_env() -> Self {
        Self::from_dir_var(std::env::var("FLASHY_DATA_DIR").ok())
    }

    /// Layout for a raw `FLASHY_DATA_DIR` value.
    pub fn from_dir_var(value: Option<String>) -> Self {
        let dir = value
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());

        Self::in_dir(dir)
    }

    /// Sibling file used for atomic progress writes.
    pub fn progress_tmp_path(&self) -> PathBuf {
        let mut name = self
            .progress_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| PROGRESS_FILE_NAME.into());
        name.push(".tmp");
        self.progress_path.with_file_name(name)
    }
}
