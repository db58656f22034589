use std::path::Path;
use std::sync::Arc;

use crate::backend::{BackendError, QuizBackend, VocabularyTranslator};
use crate::deck::{DeckError, DeckLibrary, StudyDeck};
use crate::keycode::KeyMap;
use crate::layout::LayoutRegistry;
use crate::session::QuizSession;
use crate::vocab::VocabularyStore;

use super::{KanaCategory, KanaError, KanaQuizDirection, KanaSession, KanaTranslateDirection};

impl From<BackendError> for KanaError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::NoMatch(_) => KanaError::NoMatch {
                msg: err.to_string(),
            },
            BackendError::UnknownDeck(_) | BackendError::Unavailable(_) => {
                KanaError::InvalidData {
                    msg: err.to_string(),
                }
            }
        }
    }
}

impl From<DeckError> for KanaError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::Io(_) => KanaError::Io {
                msg: err.to_string(),
            },
            DeckError::Format(_) | DeckError::NotFound(_) => KanaError::InvalidData {
                msg: err.to_string(),
            },
        }
    }
}

/// Root handle for the mobile shell: loads the vocabulary database once and
/// hands out quiz sessions over it.
#[derive(uniffi::Object)]
pub struct KanaEngine {
    store: Arc<VocabularyStore>,
    decks: DeckLibrary,
    backend: Arc<dyn QuizBackend>,
}

#[uniffi::export]
impl KanaEngine {
    #[uniffi::constructor]
    fn new(database_dir: String, user_dir: String) -> Result<Arc<Self>, KanaError> {
        let store = VocabularyStore::load_database(Path::new(&database_dir))
            .map_err(|e| KanaError::Io { msg: e.to_string() })?;
        let store = Arc::new(store);
        let decks = DeckLibrary::new(&user_dir);
        let backend: Arc<dyn QuizBackend> = Arc::new(VocabularyTranslator::new(
            Arc::clone(&store),
            Some(decks.clone()),
        ));
        Ok(Arc::new(Self {
            store,
            decks,
            backend,
        }))
    }

    fn start_session(
        &self,
        category: KanaCategory,
        direction: KanaQuizDirection,
    ) -> Result<Arc<KanaSession>, KanaError> {
        let session = QuizSession::new(
            category.into(),
            direction.into(),
            LayoutRegistry::default(),
            KeyMap::default(),
            Arc::clone(&self.backend),
        )?;
        Ok(KanaSession::wrap(session))
    }

    fn translate(
        &self,
        text: String,
        direction: KanaTranslateDirection,
    ) -> Result<String, KanaError> {
        Ok(self
            .backend
            .translate_free_text(&text, direction.into())?)
    }

    fn vocabulary_count(&self) -> u32 {
        self.store.len() as u32
    }

    fn list_decks(&self) -> Result<Vec<String>, KanaError> {
        Ok(self.decks.list()?)
    }

    fn create_deck(&self, name: String) -> Result<(), KanaError> {
        Ok(self.decks.save(&StudyDeck::new(name))?)
    }

    fn delete_deck(&self, name: String) -> Result<(), KanaError> {
        Ok(self.decks.remove(&name)?)
    }

    /// Add the entry with this kanji spelling to a deck. Returns false when
    /// the deck already holds the card.
    fn add_card(&self, deck_name: String, kanji: String) -> Result<bool, KanaError> {
        let entry = self
            .store
            .find_by_kanji(&kanji)
            .ok_or_else(|| KanaError::NoMatch {
                msg: format!("no vocabulary entry for {kanji}"),
            })?
            .clone();
        let mut deck = self.decks.load(&deck_name)?;
        let added = deck.add_unique(entry);
        if added {
            self.decks.save(&deck)?;
        }
        Ok(added)
    }
}
