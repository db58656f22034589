//! Vocabulary database loaded from exported Anki text decks.
//!
//! Each JLPT level ships as a pair of tab-separated files: one mapping
//! kanji to English glosses, one mapping kanji to the kana reading. The
//! two files are merged on the kanji column.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const POSTFIX_KANJI_ENGLISH: &str = "-vocab-kanji-eng.anki";
const POSTFIX_KANJI_HIRAGANA: &str = "-vocab-kanji-hiragana.anki";

#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("vocabulary database directory not found: {0}")]
    MissingDatabase(PathBuf),
}

/// JLPT proficiency level, N5 (easiest) through N1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JlptLevel {
    N5,
    N4,
    N3,
    N2,
    N1,
}

impl JlptLevel {
    pub const ALL: [JlptLevel; 5] = [
        JlptLevel::N5,
        JlptLevel::N4,
        JlptLevel::N3,
        JlptLevel::N2,
        JlptLevel::N1,
    ];

    /// File-name prefix of this level's deck exports.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            JlptLevel::N5 => "n5",
            JlptLevel::N4 => "n4",
            JlptLevel::N3 => "n3",
            JlptLevel::N2 => "n2",
            JlptLevel::N1 => "n1",
        }
    }
}

/// One vocabulary entry: the kanji spelling, its kana reading, and the
/// English glosses it translates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub kanji: String,
    pub kana: String,
    pub english: Vec<String>,
    pub level: Option<JlptLevel>,
}

/// In-memory vocabulary database.
#[derive(Debug, Default)]
pub struct VocabularyStore {
    entries: Vec<Vocabulary>,
}

impl VocabularyStore {
    pub fn new(entries: Vec<Vocabulary>) -> Self {
        Self { entries }
    }

    /// Load every level pair found under `dir`. Levels whose files are
    /// absent are skipped; malformed lines are skipped with a warning.
    pub fn load_database(dir: &Path) -> Result<Self, VocabError> {
        if !dir.is_dir() {
            return Err(VocabError::MissingDatabase(dir.to_path_buf()));
        }

        let mut entries = Vec::new();
        for level in JlptLevel::ALL {
            let english_path = dir.join(format!("{}{}", level.file_prefix(), POSTFIX_KANJI_ENGLISH));
            let kana_path = dir.join(format!("{}{}", level.file_prefix(), POSTFIX_KANJI_HIRAGANA));
            if !english_path.is_file() || !kana_path.is_file() {
                debug!(level = level.file_prefix(), "no deck files for level");
                continue;
            }

            let readings: HashMap<String, String> = fs::read_to_string(&kana_path)?
                .lines()
                .filter_map(parse_anki_line)
                .map(|(kanji, value)| (kanji.to_string(), value.to_string()))
                .collect();

            let before = entries.len();
            for line in fs::read_to_string(&english_path)?.lines() {
                let Some((kanji, glosses)) = parse_anki_line(line) else {
                    if !line.trim().is_empty() {
                        warn!(line, "skipping malformed vocabulary line");
                    }
                    continue;
                };
                let Some(kana) = readings.get(kanji) else {
                    debug!(kanji, "no kana reading for entry, skipped");
                    continue;
                };
                let english: Vec<String> = glosses
                    .split(',')
                    .map(|g| g.trim().to_string())
                    .filter(|g| !g.is_empty())
                    .collect();
                if english.is_empty() {
                    continue;
                }
                entries.push(Vocabulary {
                    kanji: kanji.to_string(),
                    kana: kana.clone(),
                    english,
                    level: Some(level),
                });
            }
            debug!(
                level = level.file_prefix(),
                count = entries.len() - before,
                "loaded vocabulary level"
            );
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Vocabulary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries whose kana reading matches exactly.
    pub fn find_all_kana(&self, kana: &str) -> Vec<&Vocabulary> {
        self.entries.iter().filter(|v| v.kana == kana).collect()
    }

    /// All entries carrying `text` among their English glosses
    /// (case-insensitive).
    pub fn find_all_english(&self, text: &str) -> Vec<&Vocabulary> {
        let needle = text.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|v| v.english.iter().any(|g| g.to_lowercase() == needle))
            .collect()
    }

    pub fn find_by_kanji(&self, kanji: &str) -> Option<&Vocabulary> {
        self.entries.iter().find(|v| v.kanji == kanji)
    }

    pub fn find_by_level(&self, level: JlptLevel) -> Vec<&Vocabulary> {
        self.entries
            .iter()
            .filter(|v| v.level == Some(level))
            .collect()
    }
}

/// Split one exported line into (kanji, value). The value column is wrapped
/// in presentation HTML by the exporter; only the innermost text is kept.
fn parse_anki_line(line: &str) -> Option<(&str, &str)> {
    let (kanji, value) = line.split_once('\t')?;
    let kanji = kanji.trim();
    if kanji.is_empty() {
        return None;
    }
    let value = strip_html_wrapper(value).trim();
    if value.is_empty() {
        return None;
    }
    Some((kanji, value))
}

fn strip_html_wrapper(value: &str) -> &str {
    match (value.find('>'), value.rfind('<')) {
        (Some(open), Some(close)) if open + 1 <= close => &value[open + 1..close],
        _ => value,
    }
}
