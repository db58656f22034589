//! Kana readings for the numeric quiz categories.
//!
//! Standard Japanese numerals with the usual euphonic changes
//! (さんびゃく, ろっぴゃく, はっぴゃく, さんぜん, はっせん, いっちょう),
//! covering the full `u64` range through the chō (10^12) unit.

const DIGITS: [&str; 10] = [
    "", "いち", "に", "さん", "よん", "ご", "ろく", "なな", "はち", "きゅう",
];

const ZERO: &str = "れい";

/// Reading of a group of up to four digits (1..=9999).
fn group_to_kana(n: u64) -> String {
    debug_assert!((1..=9999).contains(&n));
    let mut out = String::new();

    let thousands = (n / 1000) % 10;
    match thousands {
        0 => {}
        1 => out.push_str("せん"),
        3 => out.push_str("さんぜん"),
        8 => out.push_str("はっせん"),
        d => {
            out.push_str(DIGITS[d as usize]);
            out.push_str("せん");
        }
    }

    let hundreds = (n / 100) % 10;
    match hundreds {
        0 => {}
        1 => out.push_str("ひゃく"),
        3 => out.push_str("さんびゃく"),
        6 => out.push_str("ろっぴゃく"),
        8 => out.push_str("はっぴゃく"),
        d => {
            out.push_str(DIGITS[d as usize]);
            out.push_str("ひゃく");
        }
    }

    let tens = (n / 10) % 10;
    match tens {
        0 => {}
        1 => out.push_str("じゅう"),
        d => {
            out.push_str(DIGITS[d as usize]);
            out.push_str("じゅう");
        }
    }

    out.push_str(DIGITS[(n % 10) as usize]);
    out
}

/// いち, はち and じゅう geminate before a t-sound unit (いっちょう,
/// じゅってん).
fn geminate(reading: String) -> String {
    for (suffix, geminated) in [("いち", "いっ"), ("はち", "はっ"), ("じゅう", "じゅっ")] {
        if let Some(stem) = reading.strip_suffix(suffix) {
            return format!("{stem}{geminated}");
        }
    }
    reading
}

/// Kana reading of an integer, group-wise per myriad unit. Counts above
/// 9999 chō are read as myriads of chō.
pub fn integer_to_kana(n: u64) -> String {
    if n == 0 {
        return ZERO.to_string();
    }

    let cho = n / 1_000_000_000_000;
    let oku = (n / 100_000_000) % 10_000;
    let man = (n / 10_000) % 10_000;
    let rest = n % 10_000;

    let mut out = String::new();
    if cho > 0 {
        let reading = if cho <= 9_999 {
            group_to_kana(cho)
        } else {
            integer_to_kana(cho)
        };
        out.push_str(&geminate(reading));
        out.push_str("ちょう");
    }
    if oku > 0 {
        out.push_str(&group_to_kana(oku));
        out.push_str("おく");
    }
    if man > 0 {
        out.push_str(&group_to_kana(man));
        out.push_str("まん");
    }
    if rest > 0 {
        out.push_str(&group_to_kana(rest));
    }
    out
}

/// Kana reading of a decimal number given as integer part plus fraction
/// digits. The fraction is read digit-wise after てん; non-digit characters
/// in `fraction` are skipped.
///
/// The integer part geminates before てん (1.5 is いってんご, 10.5 is
/// じゅってんご).
pub fn decimal_to_kana(int_part: u64, fraction: &str) -> String {
    let mut out = integer_to_kana(int_part);
    let digits: Vec<usize> = fraction
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();
    if digits.is_empty() {
        return out;
    }

    out = geminate(out);
    out.push_str("てん");
    for d in digits {
        out.push_str(if d == 0 { ZERO } else { DIGITS[d] });
    }
    out
}

/// Days of the week, for the weekday question pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn english(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn kana(&self) -> &'static str {
        match self {
            Weekday::Monday => "げつようび",
            Weekday::Tuesday => "かようび",
            Weekday::Wednesday => "すいようび",
            Weekday::Thursday => "もくようび",
            Weekday::Friday => "きんようび",
            Weekday::Saturday => "どようび",
            Weekday::Sunday => "にちようび",
        }
    }
}
