//! CSV codec for word lists.
//!
//! One header row, then one row per word. Columns are looked up by header
//! name so extra columns and column order in the input do not matter.

use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::error::{Result, StoreError};
use crate::types::{LanguagePair, Word, WordList};

/// Parse a word list. `path` is only used in error messages.
pub fn read_words<R: io::Read>(reader: R, languages: &LanguagePair, path: &Path) -> Result<WordList> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|source| csv_error(path, source))?.clone();
    let source_idx = column_index(&headers, &languages.source, path)?;
    let target_idx = column_index(&headers, &languages.target, path)?;

    let mut words = WordList::new();
    for record in rdr.records() {
        let record = record.map_err(|source| csv_error(path, source))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let source_text = cell(&record, source_idx, &languages.source, path, line)?;
        let target_text = cell(&record, target_idx, &languages.target, path, line)?;
        words.push(Word::new(source_text, target_text));
    }

    Ok(words)
}

/// Write a word list with a header row, source column first.
pub fn write_words<W: io::Write>(
    writer: W,
    words: &WordList,
    languages: &LanguagePair,
) -> csv::Result<()> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    wtr.write_record([languages.source.as_str(), languages.target.as_str()])?;
    for word in words {
        wtr.write_record([word.source_text.as_str(), word.target_text.as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

fn column_index(headers: &StringRecord, column: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| StoreError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}

fn cell<'r>(
    record: &'r StringRecord,
    idx: usize,
    column: &str,
    path: &Path,
    line: u64,
) -> Result<&'r str> {
    match record.get(idx) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(malformed(path, line, format!("empty `{column}` value"))),
        None => Err(malformed(path, line, format!("missing `{column}` value"))),
    }
}

fn malformed(path: &Path, line: u64, reason: String) -> StoreError {
    StoreError::MalformedRow {
        path: path.to_path_buf(),
        line,
        reason,
    }
}

fn csv_error(path: &Path, source: csv::Error) -> StoreError {
    StoreError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
