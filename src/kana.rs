//! Kana reference tables and script helpers.
//!
//! The tables pair each kana with its Hepburn reading and feed the
//! script-category question pools.

/// Japanese script of a kana character or study category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Hiragana,
    Katakana,
}

/// Hiragana monographs (gojūon plus voiced/semi-voiced rows).
pub const HIRAGANA_MONOGRAPHS: &[(&str, &str)] = &[
    ("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o"),
    ("か", "ka"), ("が", "ga"), ("き", "ki"), ("ぎ", "gi"), ("く", "ku"),
    ("ぐ", "gu"), ("け", "ke"), ("げ", "ge"), ("こ", "ko"), ("ご", "go"),
    ("さ", "sa"), ("ざ", "za"), ("し", "shi"), ("じ", "ji"), ("す", "su"),
    ("ず", "zu"), ("せ", "se"), ("ぜ", "ze"), ("そ", "so"), ("ぞ", "zo"),
    ("た", "ta"), ("だ", "da"), ("ち", "chi"), ("ぢ", "ji"), ("つ", "tsu"),
    ("づ", "zu"), ("て", "te"), ("で", "de"), ("と", "to"), ("ど", "do"),
    ("な", "na"), ("に", "ni"), ("ぬ", "nu"), ("ね", "ne"), ("の", "no"),
    ("は", "ha"), ("ば", "ba"), ("ぱ", "pa"), ("ひ", "hi"), ("び", "bi"),
    ("ぴ", "pi"), ("ふ", "fu"), ("ぶ", "bu"), ("ぷ", "pu"), ("へ", "he"),
    ("べ", "be"), ("ぺ", "pe"), ("ほ", "ho"), ("ぼ", "bo"), ("ぽ", "po"),
    ("ま", "ma"), ("み", "mi"), ("む", "mu"), ("め", "me"), ("も", "mo"),
    ("や", "ya"), ("ゆ", "yu"), ("よ", "yo"),
    ("ら", "ra"), ("り", "ri"), ("る", "ru"), ("れ", "re"), ("ろ", "ro"),
    ("わ", "wa"), ("を", "wo"), ("ん", "n"),
];

/// Hiragana digraphs (yōon).
pub const HIRAGANA_DIGRAPHS: &[(&str, &str)] = &[
    ("きゃ", "kya"), ("きゅ", "kyu"), ("きょ", "kyo"),
    ("ぎゃ", "gya"), ("ぎゅ", "gyu"), ("ぎょ", "gyo"),
    ("しゃ", "sha"), ("しゅ", "shu"), ("しょ", "sho"),
    ("じゃ", "ja"), ("じゅ", "ju"), ("じょ", "jo"),
    ("ちゃ", "cha"), ("ちゅ", "chu"), ("ちょ", "cho"),
    ("にゃ", "nya"), ("にゅ", "nyu"), ("にょ", "nyo"),
    ("ひゃ", "hya"), ("ひゅ", "hyu"), ("ひょ", "hyo"),
    ("びゃ", "bya"), ("びゅ", "byu"), ("びょ", "byo"),
    ("ぴゃ", "pya"), ("ぴゅ", "pyu"), ("ぴょ", "pyo"),
    ("みゃ", "mya"), ("みゅ", "myu"), ("みょ", "myo"),
    ("りゃ", "rya"), ("りゅ", "ryu"), ("りょ", "ryo"),
];

/// Katakana monographs, including ヴ.
pub const KATAKANA_MONOGRAPHS: &[(&str, &str)] = &[
    ("ア", "a"), ("イ", "i"), ("ウ", "u"), ("エ", "e"), ("オ", "o"),
    ("カ", "ka"), ("ガ", "ga"), ("キ", "ki"), ("ギ", "gi"), ("ク", "ku"),
    ("グ", "gu"), ("ケ", "ke"), ("ゲ", "ge"), ("コ", "ko"), ("ゴ", "go"),
    ("サ", "sa"), ("ザ", "za"), ("シ", "shi"), ("ジ", "ji"), ("ス", "su"),
    ("ズ", "zu"), ("セ", "se"), ("ゼ", "ze"), ("ソ", "so"), ("ゾ", "zo"),
    ("タ", "ta"), ("ダ", "da"), ("チ", "chi"), ("ヂ", "ji"), ("ツ", "tsu"),
    ("ヅ", "zu"), ("テ", "te"), ("デ", "de"), ("ト", "to"), ("ド", "do"),
    ("ナ", "na"), ("ニ", "ni"), ("ヌ", "nu"), ("ネ", "ne"), ("ノ", "no"),
    ("ハ", "ha"), ("バ", "ba"), ("パ", "pa"), ("ヒ", "hi"), ("ビ", "bi"),
    ("ピ", "pi"), ("フ", "fu"), ("ブ", "bu"), ("プ", "pu"), ("ヘ", "he"),
    ("ベ", "be"), ("ペ", "pe"), ("ホ", "ho"), ("ボ", "bo"), ("ポ", "po"),
    ("マ", "ma"), ("ミ", "mi"), ("ム", "mu"), ("メ", "me"), ("モ", "mo"),
    ("ヤ", "ya"), ("ユ", "yu"), ("ヨ", "yo"),
    ("ラ", "ra"), ("リ", "ri"), ("ル", "ru"), ("レ", "re"), ("ロ", "ro"),
    ("ワ", "wa"), ("ヲ", "wo"), ("ン", "n"), ("ヴ", "vu"),
];

/// Katakana combinations used for loanwords.
pub const KATAKANA_DIGRAPHS: &[(&str, &str)] = &[
    ("イェ", "ye"), ("ウィ", "wi"), ("ウェ", "we"), ("ウォ", "wo"),
    ("ヴァ", "va"), ("ヴィ", "vi"), ("ヴェ", "ve"), ("ヴォ", "vo"),
    ("シェ", "she"), ("ジェ", "je"), ("チェ", "che"),
    ("ティ", "ti"), ("ディ", "di"), ("トゥ", "tu"), ("ドゥ", "du"),
    ("ファ", "fa"), ("フィ", "fi"), ("フェ", "fe"), ("フォ", "fo"),
];

/// All entries for a script, digraphs first (longest match first, matching
/// the original table ordering).
pub fn script_entries(script: Script) -> Vec<(&'static str, &'static str)> {
    let (digraphs, monographs) = match script {
        Script::Hiragana => (HIRAGANA_DIGRAPHS, HIRAGANA_MONOGRAPHS),
        Script::Katakana => (KATAKANA_DIGRAPHS, KATAKANA_MONOGRAPHS),
    };
    let mut entries = Vec::with_capacity(digraphs.len() + monographs.len());
    entries.extend_from_slice(digraphs);
    entries.extend_from_slice(monographs);
    entries
}

const HIRAGANA_MIN: u32 = 0x3041; // ぁ
const HIRAGANA_MAX: u32 = 0x3096; // ゖ
const KATAKANA_MIN: u32 = 0x30A1; // ァ
const KATAKANA_MAX: u32 = 0x30F6; // ヶ
const SCRIPT_OFFSET: u32 = KATAKANA_MIN - HIRAGANA_MIN;

pub fn is_hiragana(ch: char) -> bool {
    (HIRAGANA_MIN..=HIRAGANA_MAX).contains(&(ch as u32))
}

pub fn is_katakana(ch: char) -> bool {
    (KATAKANA_MIN..=KATAKANA_MAX).contains(&(ch as u32))
}

/// Map hiragana code points onto their katakana siblings; other characters
/// pass through unchanged.
pub fn hiragana_to_katakana(text: &str) -> String {
    text.chars()
        .map(|ch| {
            if is_hiragana(ch) {
                char::from_u32(ch as u32 + SCRIPT_OFFSET).unwrap_or(ch)
            } else {
                ch
            }
        })
        .collect()
}

/// Map katakana code points onto their hiragana siblings; other characters
/// pass through unchanged.
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|ch| {
            if is_katakana(ch) {
                char::from_u32(ch as u32 - SCRIPT_OFFSET).unwrap_or(ch)
            } else {
                ch
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_conversion_roundtrip() {
        assert_eq!(hiragana_to_katakana("ねこ"), "ネコ");
        assert_eq!(katakana_to_hiragana("テスト"), "てすと");
        assert_eq!(katakana_to_hiragana(&hiragana_to_katakana("きょう")), "きょう");
    }

    #[test]
    fn test_conversion_leaves_other_scripts_alone() {
        assert_eq!(hiragana_to_katakana("abcカ漢"), "abcカ漢");
        assert_eq!(katakana_to_hiragana("abcか漢"), "abcか漢");
    }

    #[test]
    fn test_script_predicates() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ヴ'));
        assert!(!is_katakana('v'));
    }

    #[test]
    fn test_tables_pair_kana_with_readings() {
        for (kana, romaji) in script_entries(Script::Hiragana) {
            assert!(kana.chars().all(is_hiragana), "not hiragana: {kana}");
            assert!(romaji.is_ascii(), "not ascii: {romaji}");
        }
        for (kana, _) in script_entries(Script::Katakana) {
            assert!(kana.chars().all(is_katakana), "not katakana: {kana}");
        }
    }

    #[test]
    fn test_monograph_tables_have_matching_siblings() {
        assert_eq!(
            HIRAGANA_MONOGRAPHS.len() + 1, // katakana adds ヴ
            KATAKANA_MONOGRAPHS.len()
        );
        for ((h, hr), (k, kr)) in HIRAGANA_MONOGRAPHS.iter().zip(KATAKANA_MONOGRAPHS) {
            assert_eq!(hiragana_to_katakana(h), *k);
            assert_eq!(hr, kr);
        }
    }
}
