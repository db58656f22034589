//! UniFFI export layer — type-safe bindings for the mobile shell.
//!
//! Each public type here maps to a generated class, struct, or enum.

mod engine;
mod session;
mod types;

pub use engine::KanaEngine;
pub use session::KanaSession;
pub use types::{
    KanaBufferState, KanaCategory, KanaError, KanaEvent, KanaKeyResponse, KanaQuizDirection,
    KanaTranslateDirection,
};

use std::path::Path;

use crate::numbers::Weekday;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}

#[uniffi::export]
fn integer_reading(n: u64) -> String {
    crate::numbers::integer_to_kana(n)
}

#[uniffi::export]
fn decimal_reading(int_part: u64, fraction: String) -> String {
    crate::numbers::decimal_to_kana(int_part, &fraction)
}

/// Kana reading of an English weekday name, if it is one.
#[uniffi::export]
fn weekday_reading(english: String) -> Option<String> {
    Weekday::ALL
        .iter()
        .find(|day| day.english().eq_ignore_ascii_case(english.trim()))
        .map(|day| day.kana().to_string())
}

#[uniffi::export]
fn to_katakana(text: String) -> String {
    crate::kana::hiragana_to_katakana(&text)
}

#[uniffi::export]
fn to_hiragana(text: String) -> String {
    crate::kana::katakana_to_hiragana(&text)
}
