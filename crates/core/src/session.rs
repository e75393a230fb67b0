//! Card session state machine.
//!
//! Two states: front shown and back shown. `advance` draws a card and arms a
//! one-shot flip; `tick` counts the flip down and performs it when due.

use thiserror::Error;
use tracing::debug;

use crate::rng::SimpleRng;
use crate::types::{Face, Word, FLIP_DELAY_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Every word has been marked known.
    #[error("all words have been learned")]
    ListExhausted,
    /// `mark_known`/`flip` called before any card was drawn.
    #[error("no card is currently shown")]
    NoCurrentCard,
}

/// What a card currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub face: Face,
    pub word: Word,
}

impl CardView {
    /// Text for the showing face.
    pub fn text(&self) -> &str {
        self.word.text(self.face)
    }
}

/// The single deferred task a session can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingFlip {
    remaining_ms: u32,
}

impl PendingFlip {
    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }
}

#[derive(Debug, Clone)]
pub struct CardSession {
    current: Option<Word>,
    face: Face,
    pending_flip: Option<PendingFlip>,
    rng: SimpleRng,
}

impl CardSession {
    pub fn new(seed: u32) -> Self {
        Self {
            current: None,
            face: Face::Front,
            pending_flip: None,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.current.as_ref()
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn pending_flip(&self) -> Option<PendingFlip> {
        self.pending_flip
    }

    pub fn view(&self) -> Option<CardView> {
        self.current.as_ref().map(|word| CardView {
            face: self.face,
            word: word.clone(),
        })
    }

    /// Draw a new card from `words` and show its front.
    ///
    /// Any pending flip is dropped before the new one is armed. Repeats are
    /// possible: the card just shown is not excluded from the draw.
    pub fn advance(&mut self, words: &[Word]) -> Result<CardView, SessionError> {
        self.pending_flip = None;

        let Some(idx) = self.rng.pick_index(words.len()) else {
            self.current = None;
            self.face = Face::Front;
            debug!("word list exhausted");
            return Err(SessionError::ListExhausted);
        };

        let word = words[idx].clone();
        debug!(source = %word.source_text, remaining = words.len(), "advance");
        self.current = Some(word.clone());
        self.face = Face::Front;
        self.pending_flip = Some(PendingFlip {
            remaining_ms: FLIP_DELAY_MS,
        });

        Ok(CardView {
            face: Face::Front,
            word,
        })
    }

    /// Show the back of the current card. Idempotent.
    pub fn flip(&mut self) -> Result<CardView, SessionError> {
        let word = self.current.clone().ok_or(SessionError::NoCurrentCard)?;
        self.pending_flip = None;
        self.face = Face::Back;
        Ok(CardView {
            face: Face::Back,
            word,
        })
    }

    /// Advance the host clock. Returns the new view if the pending flip fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<CardView> {
        let pending = self.pending_flip.as_mut()?;
        pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
        if pending.remaining_ms > 0 {
            return None;
        }
        debug!("flip timer fired");
        self.flip().ok()
    }

    /// The word to hand to the store. The caller advances afterwards.
    pub fn mark_known(&self) -> Result<Word, SessionError> {
        self.current.clone().ok_or(SessionError::NoCurrentCard)
    }
}

impl Default for CardSession {
    fn default() -> Self {
        Self::new(1)
    }
}
