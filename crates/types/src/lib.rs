//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (card session, persistence, terminal rendering).
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 50 | Fixed timestep interval of the host loop |
//! | `FLIP_DELAY_MS` | 3000 | Time a card shows its front before flipping |
//!
//! # Examples
//!
//! ```
//! use flashy_types::{Face, LanguagePair, Word, WordList};
//!
//! let mut list = WordList::from(vec![
//!     Word::new("le chat", "the cat"),
//!     Word::new("le chien", "the dog"),
//! ]);
//! assert_eq!(list.len(), 2);
//!
//! let removed = list.remove_first(&Word::new("le chat", "the cat"));
//! assert!(removed.is_some());
//! assert_eq!(list.len(), 1);
//!
//! let langs = LanguagePair::default();
//! assert_eq!(langs.label(Face::Front), "French");
//! assert_eq!(langs.label(Face::Back), "English");
//! ```

/// Fixed timestep interval in milliseconds
pub const TICK_MS: u32 = 50;

/// Delay before a freshly shown card flips to its back (3 seconds)
pub const FLIP_DELAY_MS: u32 = 3000;

/// Default column name for the source language
pub const DEFAULT_SOURCE_LANGUAGE: &str = "French";

/// Default column name for the target language
pub const DEFAULT_TARGET_LANGUAGE: &str = "English";


/// One vocabulary entry.
///
/// Identity is by value: two words with the same source and target text are
/// the same word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    pub source_text: String,
    pub target_text: String,
}

impl Word {
    pub fn new(source_text: impl Into<String>, target_text: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            target_text: target_text.into(),
        }
    }

    /// Text shown on the given face of the card.
    pub fn text(&self, face: Face) -> &str {
        match face {
            Face::Front => &self.source_text,
            Face::Back => &self.target_text,
        }
    }
}

/// Ordered list of words still being learned.
///
/// Only ever shrinks during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Remove the first entry equal to `word`.
    ///
    /// Duplicates in the source data are only removed one at a time.
    pub fn remove_first(&mut self, word: &Word) -> Option<Word> {
        let idx = self.words.iter().position(|w| w == word)?;
        Some(self.words.remove(idx))
    }
}

impl From<Vec<Word>> for WordList {
    fn from(words: Vec<Word>) -> Self {
        Self { words }
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Which side of the card is showing
///
/// - **Front**: source-language text, shown right after a card is drawn
/// - **Back**: target-language text, reached only through the flip timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Face {
    #[default]
    Front,
    Back,
}

impl Face {
    pub fn text_color(&self) -> TextColor {
        match self {
            Face::Front => TextColor::Black,
            Face::Back => TextColor::White,
        }
    }
}

/// Card text colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    Black,
    White,
}

/// Names of the two languages, used both as data column headers and as card labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn label(&self, face: Face) -> &str {
        match face {
            Face::Front => &self.source,
            Face::Back => &self.target,
        }
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE)
    }
}

/// User intents coming from the two card buttons
///
/// The flip is never user-triggered; it only happens on the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserIntent {
    /// Skip to another card, keeping this word in rotation
    DontKnow,
    /// Mark the current word as learned and drop it from rotation
    Know,
}

impl UserIntent {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserIntent::DontKnow => "dontKnow",
            UserIntent::Know => "know",
        }
    }
}

/// Screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }
}

/// Where the two buttons were last drawn, for mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonLayout {
    pub dont_know: Rect,
    pub know: Rect,
}

impl ButtonLayout {
    pub fn hit(&self, x: u16, y: u16) -> Option<UserIntent> {
        if self.dont_know.contains(x, y) {
            Some(UserIntent::DontKnow)
        } else if self.know.contains(x, y) {
            Some(UserIntent::Know)
        } else {
            None
        }
    }
}
