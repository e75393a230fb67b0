//! Presenter: wires user intents and the flip timer into the session and the
//! store, and turns the session state into display instructions.

use tracing::{debug, info, warn};

use crate::core::{CardSession, CardView, SessionError};
use crate::store::{StoreError, WordStore};
use crate::types::{Face, LanguagePair, TextColor, UserIntent, WordList};

/// Everything the renderer needs to draw one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayInstruction {
    /// Language name shown above the word.
    pub label: String,
    pub word: String,
    pub text_color: TextColor,
    /// Which card image to draw.
    pub background: Face,
}

impl DisplayInstruction {
    pub fn from_view(view: &CardView, languages: &LanguagePair) -> Self {
        Self {
            label: languages.label(view.face).to_string(),
            word: view.text().to_string(),
            text_color: view.face.text_color(),
            background: view.face,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Card(DisplayInstruction),
    /// Every word has been marked known.
    Finished,
}

impl Screen {
    pub fn is_finished(&self) -> bool {
        matches!(self, Screen::Finished)
    }
}

pub struct Presenter {
    session: CardSession,
    store: WordStore,
    words: WordList,
    screen: Screen,
    notice: Option<String>,
}

impl Presenter {
    /// Load the word list and show the first card.
    pub fn start(store: WordStore, seed: u32) -> Result<Self, StoreError> {
        let words = store.load()?;
        info!(words = words.len(), "session starting");
        Ok(Self::new(store, words, CardSession::new(seed)))
    }

    /// Build from an already loaded list and show the first card.
    pub fn new(store: WordStore, words: WordList, session: CardSession) -> Self {
        let mut presenter = Self {
            session,
            store,
            words,
            screen: Screen::Finished,
            notice: None,
        };
        presenter.next_card();
        presenter
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn session(&self) -> &CardSession {
        &self.session
    }

    /// One-line message for the user, set when progress could not be saved.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Button click.
    pub fn handle(&mut self, intent: UserIntent) {
        if self.screen.is_finished() {
            debug!(intent = intent.as_str(), "ignored, all words learned");
            return;
        }

        match intent {
            UserIntent::DontKnow => self.next_card(),
            UserIntent::Know => self.mark_known(),
        }
    }

    /// Advance the flip timer. Returns true if the screen changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        match self.session.tick(elapsed_ms) {
            Some(view) => {
                self.show(&view);
                true
            }
            None => false,
        }
    }

    fn mark_known(&mut self) {
        let word = match self.session.mark_known() {
            Ok(word) => word,
            Err(e) => {
                warn!(error = %e, "know pressed without a card");
                return;
            }
        };

        match self.store.remove_and_persist(&mut self.words, &word) {
            Ok(_) => self.notice = None,
            Err(e @ StoreError::Persistence { .. }) => {
                self.notice = Some(format!("Progress not saved: {e}"));
            }
            Err(e) => warn!(error = %e, "could not mark word known"),
        }

        self.next_card();
    }

    fn next_card(&mut self) {
        match self.session.advance(self.words.as_slice()) {
            Ok(view) => self.show(&view),
            Err(SessionError::ListExhausted) => {
                info!("all words learned");
                self.screen = Screen::Finished;
            }
            Err(e) => warn!(error = %e, "advance failed"),
        }
    }

    fn show(&mut self, view: &CardView) {
        self.screen = Screen::Card(DisplayInstruction::from_view(
            view,
            &self.store.config().languages,
        ));
    }
}
