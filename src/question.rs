//! Question pools for the quiz categories.

use tracing::debug;

use crate::backend::Direction;
use crate::kana::{script_entries, Script};
use crate::layout::LayoutVariant;
use crate::numbers::{decimal_to_kana, integer_to_kana};
use crate::vocab::Vocabulary;

/// Which way vocabulary questions are asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationDirection {
    EnglishToKana,
    KanaToEnglish,
    /// Coin flip per question.
    Mixed,
}

/// How a submitted answer is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerRule {
    /// Trimmed exact match against any accepted answer (case-insensitive).
    Literal,
    /// Translate the submitted text first, then match any accepted answer
    /// against the translation results.
    Semantic(Direction),
}

/// One prompt with its accepted answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub answers: Vec<String>,
    /// Layout the answer is expected to be typed on; `None` means the
    /// platform's native surface.
    pub layout: Option<LayoutVariant>,
    pub rule: AnswerRule,
}

impl Question {
    /// Literal check: does the trimmed answer match any accepted answer?
    pub fn check_answer(&self, answer: &str) -> bool {
        let answer = answer.trim();
        self.answers
            .iter()
            .any(|a| a.eq_ignore_ascii_case(answer))
    }

    /// Semantic check: does any part of a ", "-joined translation result
    /// match any accepted answer?
    pub fn check_translation(&self, translated: &str) -> bool {
        translated.split(", ").any(|part| self.check_answer(part))
    }
}

/// Questions over one kana script: prompt is the rōmaji reading, the answer
/// is typed in kana.
pub fn script_questions(script: Script) -> Vec<Question> {
    let layout = match script {
        Script::Hiragana => LayoutVariant::HiraganaPrimary,
        Script::Katakana => LayoutVariant::KatakanaPrimary,
    };
    script_entries(script)
        .into_iter()
        .map(|(kana, romaji)| Question {
            prompt: romaji.to_string(),
            answers: vec![kana.to_string()],
            layout: Some(layout),
            rule: AnswerRule::Literal,
        })
        .collect()
}

/// Integer questions: prompt is the kana reading, the answer is typed in
/// digits on the native surface.
pub fn integer_questions(count: usize, max: u64) -> Vec<Question> {
    (0..count)
        .map(|_| {
            let n = fastrand::u64(0..=max);
            Question {
                prompt: integer_to_kana(n),
                answers: vec![n.to_string()],
                layout: None,
                rule: AnswerRule::Literal,
            }
        })
        .collect()
}

/// Decimal questions: one fraction digit, answers accepted with a dot.
pub fn decimal_questions(count: usize, max: u64) -> Vec<Question> {
    (0..count)
        .map(|_| {
            let int_part = fastrand::u64(0..=max);
            let frac = fastrand::u8(0..=9);
            Question {
                prompt: decimal_to_kana(int_part, &frac.to_string()),
                answers: vec![format!("{int_part}.{frac}")],
                layout: None,
                rule: AnswerRule::Literal,
            }
        })
        .collect()
}

/// Vocabulary questions over `entries`, shuffled.
///
/// English-to-kana prompts accept any kana answer that translates back to
/// one of the entry's glosses, so synonyms the database knows are not
/// marked wrong.
pub fn vocabulary_questions(
    entries: &[Vocabulary],
    direction: TranslationDirection,
) -> Vec<Question> {
    let mut questions: Vec<Question> = entries
        .iter()
        .map(|entry| {
            let english_to_kana = match direction {
                TranslationDirection::EnglishToKana => true,
                TranslationDirection::KanaToEnglish => false,
                TranslationDirection::Mixed => fastrand::bool(),
            };
            if english_to_kana {
                Question {
                    prompt: entry.english.join(", "),
                    answers: entry.english.clone(),
                    layout: Some(LayoutVariant::HiraganaPrimary),
                    rule: AnswerRule::Semantic(Direction::KanaToEnglish),
                }
            } else {
                Question {
                    prompt: entry.kana.clone(),
                    answers: entry.english.clone(),
                    layout: Some(LayoutVariant::Romanized),
                    rule: AnswerRule::Literal,
                }
            }
        })
        .collect();
    fastrand::shuffle(&mut questions);
    debug!(count = questions.len(), ?direction, "built vocabulary pool");
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::JlptLevel;

    fn entry() -> Vocabulary {
        Vocabulary {
            kanji: "猫".to_string(),
            kana: "ねこ".to_string(),
            english: vec!["cat".to_string()],
            level: Some(JlptLevel::N5),
        }
    }

    #[test]
    fn test_literal_check_trims_and_ignores_ascii_case() {
        let q = Question {
            prompt: "ねこ".to_string(),
            answers: vec!["cat".to_string(), "kitty".to_string()],
            layout: Some(LayoutVariant::Romanized),
            rule: AnswerRule::Literal,
        };
        assert!(q.check_answer(" CAT "));
        assert!(q.check_answer("kitty"));
        assert!(!q.check_answer("dog"));
        assert!(!q.check_answer(""));
    }

    #[test]
    fn test_translation_check_matches_any_joined_part() {
        let q = Question {
            prompt: "cat".to_string(),
            answers: vec!["cat".to_string()],
            layout: Some(LayoutVariant::HiraganaPrimary),
            rule: AnswerRule::Semantic(Direction::KanaToEnglish),
        };
        assert!(q.check_translation("cat"));
        assert!(q.check_translation("cat, ridgepole"));
        assert!(q.check_translation("ridgepole, cat"));
        assert!(!q.check_translation("ridgepole"));
    }

    #[test]
    fn test_script_questions_cover_all_table_entries() {
        let questions = script_questions(Script::Hiragana);
        assert_eq!(
            questions.len(),
            script_entries(Script::Hiragana).len()
        );
        let a = questions.iter().find(|q| q.prompt == "a").unwrap();
        assert!(a.check_answer("あ"));
        assert_eq!(a.layout, Some(LayoutVariant::HiraganaPrimary));
    }

    #[test]
    fn test_integer_questions_answer_matches_prompt_reading() {
        for q in integer_questions(20, 9_999) {
            let n: u64 = q.answers[0].parse().unwrap();
            assert_eq!(q.prompt, integer_to_kana(n));
            assert_eq!(q.layout, None);
        }
    }

    #[test]
    fn test_vocabulary_directions() {
        let entries = [entry()];
        let e2k = vocabulary_questions(&entries, TranslationDirection::EnglishToKana);
        assert_eq!(e2k[0].prompt, "cat");
        assert_eq!(e2k[0].layout, Some(LayoutVariant::HiraganaPrimary));
        assert!(matches!(e2k[0].rule, AnswerRule::Semantic(_)));

        let k2e = vocabulary_questions(&entries, TranslationDirection::KanaToEnglish);
        assert_eq!(k2e[0].prompt, "ねこ");
        assert_eq!(k2e[0].layout, Some(LayoutVariant::Romanized));
        assert!(k2e[0].check_answer("cat"));
    }
}
