use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::codec::{read_words, write_words};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::types::{Word, WordList};

/// Where a loaded list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Progress,
    Original,
}

/// Flat-file word persistence.
///
/// The progress file is authoritative once it exists. It is rewritten in full
/// after every removal.
#[derive(Debug, Clone)]
pub struct WordStore {
    config: StoreConfig,
}

impl WordStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Load the remaining words, falling back to the original dataset when
    /// no progress has been saved yet.
    pub fn load(&self) -> Result<WordList> {
        self.load_with_source().map(|(words, _)| words)
    }

    pub fn load_with_source(&self) -> Result<(WordList, LoadSource)> {
        let progress = &self.config.progress_path;
        match File::open(progress) {
            Ok(file) => {
                let words = self.parse(file, progress)?;
                info!(path = %progress.display(), words = words.len(), "loaded saved progress");
                Ok((words, LoadSource::Progress))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let original = &self.config.original_path;
                debug!(path = %progress.display(), "no saved progress, using original dataset");
                let file = File::open(original).map_err(|source| StoreError::DataUnavailable {
                    progress: progress.clone(),
                    original: original.clone(),
                    source,
                })?;
                let words = self.parse(file, original)?;
                info!(path = %original.display(), words = words.len(), "loaded original dataset");
                Ok((words, LoadSource::Original))
            }
            Err(source) => Err(StoreError::Read {
                path: progress.clone(),
                source,
            }),
        }
    }

    /// Remove the first entry equal to `word` and rewrite the progress file.
    ///
    /// The removal stays in `words` even when the write fails.
    pub fn remove_and_persist(&self, words: &mut WordList, word: &Word) -> Result<Word> {
        let removed = words
            .remove_first(word)
            .ok_or_else(|| StoreError::WordNotFound {
                source_text: word.source_text.clone(),
                target_text: word.target_text.clone(),
            })?;

        debug!(source = %removed.source_text, remaining = words.len(), "word marked known");
        if let Err(e) = self.save(words) {
            warn!(error = %e, "progress not saved, continuing in memory");
            return Err(e);
        }
        Ok(removed)
    }

    /// Overwrite the progress file with `words`.
    pub fn save(&self, words: &WordList) -> Result<()> {
        let path = &self.config.progress_path;
        let tmp = self.config.progress_tmp_path();

        let result = write_file(&tmp, words, &self.config)
            .and_then(|()| fs::rename(&tmp, path).map_err(csv::Error::from));

        result.map_err(|source| {
            let _ = fs::remove_file(&tmp);
            StoreError::Persistence {
                path: path.clone(),
                source,
            }
        })
    }

    fn parse(&self, file: File, path: &Path) -> Result<WordList> {
        read_words(BufReader::new(file), &self.config.languages, path)
    }
}

fn write_file(path: &Path, words: &WordList, config: &StoreConfig) -> csv::Result<()> {
    let file = File::create(path)?;
    write_words(BufWriter::new(file), words, &config.languages)
}
