//! One quiz round: a category bound to an input controller, an answer
//! buffer, and a question pool.

use std::sync::Arc;

use tracing::{debug, debug_span};

use crate::backend::{BackendError, QuizBackend};
use crate::buffer::TextBuffer;
use crate::kana::Script;
use crate::keycode::{KeyCode, KeyMap};
use crate::layout::LayoutRegistry;
use crate::question::{
    decimal_questions, integer_questions, script_questions, vocabulary_questions, AnswerRule,
    Question, TranslationDirection,
};
use crate::router::{InputController, KeyResponse, SurfaceAction};

const NUMBER_POOL_SIZE: usize = 20;
const INTEGER_MAX: u64 = 9_999;
const DECIMAL_INT_MAX: u64 = 99;

/// What is being studied in this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    Hiragana,
    Katakana,
    /// Both scripts mixed.
    Kana,
    IntegerNumbers,
    FloatingPointNumbers,
    VocabularyDefault,
    VocabularyDeck(u32),
}

/// Drives one quiz round. The answer buffer starts empty with a collapsed
/// selection at 0 and is replaced wholesale when the question advances;
/// submission is an explicit call, never inferred from a key event.
pub struct QuizSession {
    category: QuizCategory,
    controller: InputController,
    buffer: TextBuffer,
    questions: Vec<Question>,
    current: usize,
    backend: Arc<dyn QuizBackend>,
}

impl QuizSession {
    /// Build the question pool for `category` and bind the first question.
    /// `direction` applies to vocabulary categories only.
    pub fn new(
        category: QuizCategory,
        direction: TranslationDirection,
        registry: LayoutRegistry,
        keymap: KeyMap,
        backend: Arc<dyn QuizBackend>,
    ) -> Result<Self, BackendError> {
        let mut questions = match category {
            QuizCategory::Hiragana => script_questions(Script::Hiragana),
            QuizCategory::Katakana => script_questions(Script::Katakana),
            QuizCategory::Kana => {
                let mut pool = script_questions(Script::Hiragana);
                pool.extend(script_questions(Script::Katakana));
                pool
            }
            QuizCategory::IntegerNumbers => integer_questions(NUMBER_POOL_SIZE, INTEGER_MAX),
            QuizCategory::FloatingPointNumbers => {
                decimal_questions(NUMBER_POOL_SIZE, DECIMAL_INT_MAX)
            }
            QuizCategory::VocabularyDefault => {
                vocabulary_questions(&backend.list_default_items()?, direction)
            }
            QuizCategory::VocabularyDeck(id) => {
                vocabulary_questions(&backend.list_deck_items(id)?, direction)
            }
        };
        if !matches!(
            category,
            QuizCategory::VocabularyDefault | QuizCategory::VocabularyDeck(_)
        ) {
            fastrand::shuffle(&mut questions);
        }

        let mut session = Self {
            category,
            controller: InputController::new(registry, keymap),
            buffer: TextBuffer::new(),
            questions,
            current: 0,
            backend,
        };
        session.bind_current_question();
        Ok(session)
    }

    pub fn category(&self) -> QuizCategory {
        self.category
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn prompt(&self) -> Option<&str> {
        self.current_question().map(|q| q.prompt.as_str())
    }

    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.current)
    }

    /// Route one key event to the answer buffer.
    pub fn handle_key(&mut self, code: KeyCode) -> KeyResponse {
        self.controller.handle_key(&mut self.buffer, code)
    }

    /// Judge the current buffer content. Vocabulary answers are judged by
    /// translating them through the backend; a backend miss reads as "no
    /// match" and the answer is wrong, never an error.
    pub fn submit(&self) -> bool {
        let _span = debug_span!("submit", category = ?self.category).entered();
        let Some(question) = self.current_question() else {
            return false;
        };
        let answer = self.buffer.content();
        match question.rule {
            AnswerRule::Literal => question.check_answer(&answer),
            AnswerRule::Semantic(direction) => {
                match self.backend.translate_free_text(&answer, direction) {
                    Ok(translated) => question.check_translation(&translated),
                    Err(err) => {
                        debug!(%err, "no match for submitted answer");
                        false
                    }
                }
            }
        }
    }

    /// Move to the next question with a fresh buffer. Returns the surface
    /// action for the new question's layout, or `None` when the pool is
    /// exhausted.
    pub fn advance(&mut self) -> Option<SurfaceAction> {
        if self.current >= self.questions.len() {
            return None;
        }
        self.current += 1;
        if self.current >= self.questions.len() {
            return None;
        }
        Some(self.bind_current_question())
    }

    fn bind_current_question(&mut self) -> SurfaceAction {
        self.buffer = TextBuffer::new();
        match self.current_question().and_then(|q| q.layout) {
            Some(variant) => self.controller.set_layout(variant),
            None => self.controller.set_native(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Direction;
    use crate::keycode::key;
    use crate::layout::LayoutVariant;
    use crate::vocab::Vocabulary;

    struct StubBackend {
        items: Vec<Vocabulary>,
        translation: Result<&'static str, ()>,
    }

    impl QuizBackend for StubBackend {
        fn translate_free_text(
            &self,
            text: &str,
            _direction: Direction,
        ) -> Result<String, BackendError> {
            self.translation
                .map(str::to_string)
                .map_err(|_| BackendError::NoMatch(text.to_string()))
        }

        fn list_default_items(&self) -> Result<Vec<Vocabulary>, BackendError> {
            Ok(self.items.clone())
        }

        fn list_deck_items(&self, deck_id: u32) -> Result<Vec<Vocabulary>, BackendError> {
            if deck_id == 42 {
                Ok(self.items.clone())
            } else {
                Err(BackendError::UnknownDeck(deck_id))
            }
        }
    }

    fn cat_entry() -> Vocabulary {
        Vocabulary {
            kanji: "猫".to_string(),
            kana: "ねこ".to_string(),
            english: vec!["cat".to_string()],
            level: None,
        }
    }

    fn vocab_session(translation: Result<&'static str, ()>) -> QuizSession {
        QuizSession::new(
            QuizCategory::VocabularyDeck(42),
            TranslationDirection::EnglishToKana,
            LayoutRegistry::default(),
            KeyMap::default(),
            Arc::new(StubBackend {
                items: vec![cat_entry()],
                translation,
            }),
        )
        .unwrap()
    }

    // prompt "cat", type ねこ, submit; the backend translates the buffer
    // back to "cat" and the answer is correct
    #[test]
    fn test_vocabulary_submit_translates_buffer() {
        let mut session = vocab_session(Ok("cat"));
        assert_eq!(session.prompt(), Some("cat"));

        session.handle_key('ね' as u32);
        session.handle_key('こ' as u32);
        assert_eq!(session.buffer().content(), "ねこ");
        assert!(session.submit());
    }

    #[test]
    fn test_backend_miss_is_incorrect_not_fatal() {
        let mut session = vocab_session(Err(()));
        session.handle_key('ね' as u32);
        assert!(!session.submit());
    }

    #[test]
    fn test_unknown_deck_fails_session_construction() {
        let result = QuizSession::new(
            QuizCategory::VocabularyDeck(7),
            TranslationDirection::EnglishToKana,
            LayoutRegistry::default(),
            KeyMap::default(),
            Arc::new(StubBackend {
                items: vec![],
                translation: Err(()),
            }),
        );
        assert!(matches!(result, Err(BackendError::UnknownDeck(7))));
    }

    #[test]
    fn test_script_session_literal_flow() {
        let mut session = QuizSession::new(
            QuizCategory::Hiragana,
            TranslationDirection::Mixed,
            LayoutRegistry::default(),
            KeyMap::default(),
            Arc::new(StubBackend {
                items: vec![],
                translation: Err(()),
            }),
        )
        .unwrap();

        let expected = session.current_question().unwrap().answers[0].clone();
        for ch in expected.chars() {
            session.handle_key(ch as u32);
        }
        assert!(session.submit());

        // a wrong extra character makes it incorrect
        session.handle_key('ん' as u32);
        session.handle_key('ん' as u32);
        assert!(!session.submit());
    }

    #[test]
    fn test_advance_resets_buffer_and_binds_layout() {
        let mut session = QuizSession::new(
            QuizCategory::Kana,
            TranslationDirection::Mixed,
            LayoutRegistry::default(),
            KeyMap::default(),
            Arc::new(StubBackend {
                items: vec![],
                translation: Err(()),
            }),
        )
        .unwrap();

        session.handle_key('あ' as u32);
        assert!(!session.buffer().is_empty());

        let action = session.advance().unwrap();
        assert!(matches!(action, SurfaceAction::Install(_)));
        assert!(session.buffer().is_empty());
        assert_eq!(session.buffer().selection(), (0, 0));
    }

    #[test]
    fn test_number_session_uses_native_surface() {
        let mut session = QuizSession::new(
            QuizCategory::IntegerNumbers,
            TranslationDirection::Mixed,
            LayoutRegistry::default(),
            KeyMap::default(),
            Arc::new(StubBackend {
                items: vec![],
                translation: Err(()),
            }),
        )
        .unwrap();

        let expected = session.current_question().unwrap().answers[0].clone();
        for ch in expected.chars() {
            session.handle_key(ch as u32);
        }
        assert!(session.submit());
        assert_eq!(session.remaining(), NUMBER_POOL_SIZE);
    }

    #[test]
    fn test_enter_key_does_not_submit_or_mutate() {
        let mut session = vocab_session(Ok("cat"));
        session.handle_key('ね' as u32);
        let resp = session.handle_key(key::ENTER);
        assert!(resp.consumed);
        assert!(resp.enter_pressed);
        assert_eq!(session.buffer().content(), "ね");
    }

    #[test]
    fn test_vocabulary_question_binds_its_layout() {
        let session = vocab_session(Ok("cat"));
        assert_eq!(
            session.current_question().unwrap().layout,
            Some(LayoutVariant::HiraganaPrimary)
        );
    }
}
