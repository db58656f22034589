//! User-built study decks, persisted as JSON under the user directory.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::vocab::Vocabulary;

/// File extension of persisted decks.
pub const DECK_EXTENSION: &str = "vd";

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid deck file: {0}")]
    Format(#[from] serde_json::Error),

    #[error("no such deck: {0}")]
    NotFound(String),
}

/// A named collection of vocabulary cards plus the study cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyDeck {
    name: String,
    cards: Vec<Vocabulary>,
    card_index: usize,
}

impl StudyDeck {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
            card_index: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards(&self) -> &[Vocabulary] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Add a card unless an identical kanji/kana pair is already present.
    /// Returns whether the deck changed.
    pub fn add_unique(&mut self, card: Vocabulary) -> bool {
        let duplicate = self
            .cards
            .iter()
            .any(|c| c.kanji == card.kanji && c.kana == card.kana);
        if duplicate {
            return false;
        }
        self.cards.push(card);
        true
    }

    /// Remove every card with this kanji spelling. Returns whether the deck
    /// changed; the cursor is re-clamped.
    pub fn remove(&mut self, kanji: &str) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.kanji != kanji);
        self.card_index = self.card_index.min(self.cards.len().saturating_sub(1));
        self.cards.len() != before
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.card_index = 0;
    }

    pub fn card_index(&self) -> usize {
        self.card_index
    }

    /// Move the study cursor, clamped to the deck.
    pub fn set_card_index(&mut self, index: usize) {
        self.card_index = index.min(self.cards.len().saturating_sub(1));
    }

    pub fn current_card(&self) -> Option<&Vocabulary> {
        self.cards.get(self.card_index)
    }
}

/// Deck storage rooted at the user directory. Deck ids used by quiz
/// categories are indices into the name-sorted listing.
#[derive(Debug, Clone)]
pub struct DeckLibrary {
    user_dir: PathBuf,
}

impl DeckLibrary {
    pub fn new(user_dir: impl Into<PathBuf>) -> Self {
        Self {
            user_dir: user_dir.into(),
        }
    }

    fn deck_path(&self, name: &str) -> PathBuf {
        self.user_dir.join(format!("{name}.{DECK_EXTENSION}"))
    }

    /// Names of all stored decks, sorted. An absent user directory reads as
    /// an empty library.
    pub fn list(&self) -> Result<Vec<String>, DeckError> {
        if !self.user_dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.user_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(DECK_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn load(&self, name: &str) -> Result<StudyDeck, DeckError> {
        let path = self.deck_path(name);
        if !path.is_file() {
            return Err(DeckError::NotFound(name.to_string()));
        }
        let deck: StudyDeck = serde_json::from_str(&fs::read_to_string(path)?)?;
        Ok(deck)
    }

    /// Load the `id`-th deck of the sorted listing.
    pub fn load_by_id(&self, id: u32) -> Result<StudyDeck, DeckError> {
        let names = self.list()?;
        let name = names
            .get(id as usize)
            .ok_or_else(|| DeckError::NotFound(format!("deck id {id}")))?;
        self.load(name)
    }

    pub fn save(&self, deck: &StudyDeck) -> Result<(), DeckError> {
        fs::create_dir_all(&self.user_dir)?;
        let path = self.deck_path(deck.name());
        fs::write(&path, serde_json::to_string_pretty(deck)?)?;
        debug!(path = %path.display(), cards = deck.len(), "saved deck");
        Ok(())
    }

    pub fn remove(&self, name: &str) -> Result<(), DeckError> {
        let path = self.deck_path(name);
        if !path.is_file() {
            return Err(DeckError::NotFound(name.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }
}
