//! Translation backend behind the quiz session.
//!
//! Sessions hold the backend as a trait object so quiz logic can be tested
//! against stubs; the shipped implementation translates against the loaded
//! vocabulary database and deck library.

use std::fmt;
use std::sync::Arc;

use crate::deck::DeckLibrary;
use crate::kana::katakana_to_hiragana;
use crate::vocab::{Vocabulary, VocabularyStore};

/// Which way free text is translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Kana input to English glosses.
    KanaToEnglish,
    /// English input to kana readings.
    EnglishToKana,
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("no translation for {0:?}")]
    NoMatch(String),

    #[error("unknown deck id {0}")]
    UnknownDeck(u32),

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Source of translations and deck content for quiz sessions.
pub trait QuizBackend: Send + Sync {
    fn translate_free_text(&self, text: &str, direction: Direction)
        -> Result<String, BackendError>;

    /// The built-in vocabulary pool, used when no deck is selected.
    fn list_default_items(&self) -> Result<Vec<Vocabulary>, BackendError>;

    fn list_deck_items(&self, deck_id: u32) -> Result<Vec<Vocabulary>, BackendError>;
}

impl fmt::Debug for dyn QuizBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("QuizBackend")
    }
}

/// The database-backed translator.
pub struct VocabularyTranslator {
    store: Arc<VocabularyStore>,
    decks: Option<DeckLibrary>,
}

impl VocabularyTranslator {
    pub fn new(store: Arc<VocabularyStore>, decks: Option<DeckLibrary>) -> Self {
        Self { store, decks }
    }
}

impl QuizBackend for VocabularyTranslator {
    /// Translate by exact dictionary lookup. Katakana input is folded to
    /// hiragana first, so both spellings of a reading match. Results from
    /// multiple matching entries are joined with ", ".
    fn translate_free_text(
        &self,
        text: &str,
        direction: Direction,
    ) -> Result<String, BackendError> {
        let text = text.trim();
        let results: Vec<String> = match direction {
            Direction::KanaToEnglish => {
                let reading = katakana_to_hiragana(text);
                self.store
                    .find_all_kana(&reading)
                    .into_iter()
                    .flat_map(|v| v.english.iter().cloned())
                    .collect()
            }
            Direction::EnglishToKana => self
                .store
                .find_all_english(text)
                .into_iter()
                .map(|v| v.kana.clone())
                .collect(),
        };
        if results.is_empty() {
            return Err(BackendError::NoMatch(text.to_string()));
        }
        Ok(results.join(", "))
    }

    fn list_default_items(&self) -> Result<Vec<Vocabulary>, BackendError> {
        Ok(self.store.entries().to_vec())
    }

    fn list_deck_items(&self, deck_id: u32) -> Result<Vec<Vocabulary>, BackendError> {
        let decks = self
            .decks
            .as_ref()
            .ok_or_else(|| BackendError::Unavailable("no deck library".to_string()))?;
        let deck = decks
            .load_by_id(deck_id)
            .map_err(|_| BackendError::UnknownDeck(deck_id))?;
        Ok(deck.cards().to_vec())
    }
}
