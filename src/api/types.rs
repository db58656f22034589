use crate::backend::Direction;
use crate::buffer::TextBuffer;
use crate::question::TranslationDirection;
use crate::router::{KeyResponse, SurfaceAction};
use crate::session::QuizCategory;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum KanaError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("no match: {msg}")]
    NoMatch { msg: String },
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, uniffi::Record)]
pub struct KanaBufferState {
    pub content: String,
    pub sel_start: u32,
    pub sel_end: u32,
}

/// Event-driven response from handle_key / advance.
#[derive(uniffi::Record)]
pub struct KanaKeyResponse {
    pub consumed: bool,
    pub events: Vec<KanaEvent>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, uniffi::Enum)]
pub enum KanaEvent {
    InstallLayout { resource_id: u32 },
    UseNativeSurface,
    SetBuffer { state: KanaBufferState },
    EnterPressed,
}

#[derive(Clone, Copy, uniffi::Enum)]
pub enum KanaCategory {
    Hiragana,
    Katakana,
    Kana,
    IntegerNumbers,
    FloatingPointNumbers,
    VocabularyDefault,
    VocabularyDeck { deck_id: u32 },
}

#[derive(Clone, Copy, uniffi::Enum)]
pub enum KanaQuizDirection {
    EnglishToKana,
    KanaToEnglish,
    Mixed,
}

#[derive(Clone, Copy, uniffi::Enum)]
pub enum KanaTranslateDirection {
    KanaToEnglish,
    EnglishToKana,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<KanaCategory> for QuizCategory {
    fn from(category: KanaCategory) -> Self {
        match category {
            KanaCategory::Hiragana => QuizCategory::Hiragana,
            KanaCategory::Katakana => QuizCategory::Katakana,
            KanaCategory::Kana => QuizCategory::Kana,
            KanaCategory::IntegerNumbers => QuizCategory::IntegerNumbers,
            KanaCategory::FloatingPointNumbers => QuizCategory::FloatingPointNumbers,
            KanaCategory::VocabularyDefault => QuizCategory::VocabularyDefault,
            KanaCategory::VocabularyDeck { deck_id } => QuizCategory::VocabularyDeck(deck_id),
        }
    }
}

impl From<KanaQuizDirection> for TranslationDirection {
    fn from(direction: KanaQuizDirection) -> Self {
        match direction {
            KanaQuizDirection::EnglishToKana => TranslationDirection::EnglishToKana,
            KanaQuizDirection::KanaToEnglish => TranslationDirection::KanaToEnglish,
            KanaQuizDirection::Mixed => TranslationDirection::Mixed,
        }
    }
}

impl From<KanaTranslateDirection> for Direction {
    fn from(direction: KanaTranslateDirection) -> Self {
        match direction {
            KanaTranslateDirection::KanaToEnglish => Direction::KanaToEnglish,
            KanaTranslateDirection::EnglishToKana => Direction::EnglishToKana,
        }
    }
}

pub(super) fn buffer_state(buffer: &TextBuffer) -> KanaBufferState {
    let (start, end) = buffer.selection();
    KanaBufferState {
        content: buffer.content(),
        sel_start: start as u32,
        sel_end: end as u32,
    }
}

pub(super) fn convert_to_events(resp: KeyResponse, buffer: &TextBuffer) -> KanaKeyResponse {
    let mut events = Vec::new();

    // 1. Surface change
    match resp.surface {
        SurfaceAction::Install(resource) => {
            events.push(KanaEvent::InstallLayout {
                resource_id: resource.0,
            });
        }
        SurfaceAction::NativeFallback => events.push(KanaEvent::UseNativeSurface),
        SurfaceAction::None => {}
    }

    // 2. Buffer snapshot, so the shell re-renders after any consumed edit
    if resp.consumed {
        events.push(KanaEvent::SetBuffer {
            state: buffer_state(buffer),
        });
    }

    // 3. Enter is reported, never interpreted
    if resp.enter_pressed {
        events.push(KanaEvent::EnterPressed);
    }

    KanaKeyResponse {
        consumed: resp.consumed,
        events,
    }
}
