use crate::layout::LayoutVariant;

/// Raw key code delivered by a virtual keyboard layout.
///
/// Printable keys carry their character's Unicode scalar value; reserved
/// control keys carry codes above the scalar range so the two classes are
/// disjoint by construction.
pub type KeyCode = u32;

/// Default reserved codes, one per control meaning.
pub mod key {
    use super::KeyCode;

    pub const BACKSPACE: KeyCode = 0x0011_0000;
    pub const ENTER: KeyCode = 0x0011_0001;
    pub const HIRAGANA_PRIMARY: KeyCode = 0x0011_0010;
    pub const HIRAGANA_SECONDARY: KeyCode = 0x0011_0011;
    pub const KATAKANA_PRIMARY: KeyCode = 0x0011_0012;
    pub const KATAKANA_SECONDARY: KeyCode = 0x0011_0013;
    pub const ROMANIZED: KeyCode = 0x0011_0014;
}

/// What a key press means. Decided exactly once per event; the four kinds
/// are mutually exclusive because reserved codes never decode as printable
/// characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    SwitchLayout(LayoutVariant),
    Backspace,
    Enter,
    Insert(char),
}

#[derive(Debug, thiserror::Error)]
pub enum KeymapError {
    #[error("reserved code {0:#x} assigned to two meanings")]
    DuplicateCode(KeyCode),

    #[error("reserved code {0:#x} collides with printable character {1:?}")]
    PrintableCollision(KeyCode, char),
}

/// Fixed mapping from reserved key codes to their meaning.
///
/// The mapping is configuration, not derived at runtime: platform shells may
/// supply their own resource-defined codes, and any ambiguity (a code
/// claimed twice, or a reserved code that also decodes as a printable
/// character) fails at construction time, never at key-press time.
#[derive(Debug, Clone)]
pub struct KeyMap {
    backspace: KeyCode,
    enter: KeyCode,
    switches: [(LayoutVariant, KeyCode); 5],
}

impl KeyMap {
    pub fn new(
        backspace: KeyCode,
        enter: KeyCode,
        switches: [(LayoutVariant, KeyCode); 5],
    ) -> Result<Self, KeymapError> {
        let map = Self {
            backspace,
            enter,
            switches,
        };
        map.validate()?;
        Ok(map)
    }

    fn validate(&self) -> Result<(), KeymapError> {
        let codes = self.reserved_codes();
        for (i, &code) in codes.iter().enumerate() {
            if codes[..i].contains(&code) {
                return Err(KeymapError::DuplicateCode(code));
            }
            if let Some(ch) = char::from_u32(code) {
                return Err(KeymapError::PrintableCollision(code, ch));
            }
        }
        Ok(())
    }

    fn reserved_codes(&self) -> [KeyCode; 7] {
        [
            self.backspace,
            self.enter,
            self.switches[0].1,
            self.switches[1].1,
            self.switches[2].1,
            self.switches[3].1,
            self.switches[4].1,
        ]
    }

    /// Classify one key code. Returns `None` only for codes that are
    /// neither reserved nor valid Unicode scalars; such events are ignored
    /// by the router (reported unconsumed).
    pub fn classify(&self, code: KeyCode) -> Option<KeyAction> {
        if let Some(&(variant, _)) = self.switches.iter().find(|(_, c)| *c == code) {
            return Some(KeyAction::SwitchLayout(variant));
        }
        if code == self.backspace {
            return Some(KeyAction::Backspace);
        }
        if code == self.enter {
            return Some(KeyAction::Enter);
        }
        char::from_u32(code).map(KeyAction::Insert)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            backspace: key::BACKSPACE,
            enter: key::ENTER,
            switches: [
                (LayoutVariant::HiraganaPrimary, key::HIRAGANA_PRIMARY),
                (LayoutVariant::HiraganaSecondary, key::HIRAGANA_SECONDARY),
                (LayoutVariant::KatakanaPrimary, key::KATAKANA_PRIMARY),
                (LayoutVariant::KatakanaSecondary, key::KATAKANA_SECONDARY),
                (LayoutVariant::Romanized, key::ROMANIZED),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_codes_classify_as_insert() {
        let map = KeyMap::default();
        assert_eq!(map.classify('あ' as u32), Some(KeyAction::Insert('あ')));
        assert_eq!(map.classify('a' as u32), Some(KeyAction::Insert('a')));
        assert_eq!(map.classify('7' as u32), Some(KeyAction::Insert('7')));
    }

    #[test]
    fn test_reserved_codes_classify_as_controls() {
        let map = KeyMap::default();
        assert_eq!(map.classify(key::BACKSPACE), Some(KeyAction::Backspace));
        assert_eq!(map.classify(key::ENTER), Some(KeyAction::Enter));
        assert_eq!(
            map.classify(key::KATAKANA_SECONDARY),
            Some(KeyAction::SwitchLayout(LayoutVariant::KatakanaSecondary))
        );
    }

    // exactly one branch fires for every code in the defined domain
    #[test]
    fn test_classification_is_exclusive() {
        let map = KeyMap::default();
        let mut domain: Vec<KeyCode> = vec![
            'a' as u32,
            'あ' as u32,
            'ン' as u32,
            '0' as u32,
            key::BACKSPACE,
            key::ENTER,
        ];
        domain.extend([
            key::HIRAGANA_PRIMARY,
            key::HIRAGANA_SECONDARY,
            key::KATAKANA_PRIMARY,
            key::KATAKANA_SECONDARY,
            key::ROMANIZED,
        ]);
        for code in domain {
            let action = map.classify(code).expect("defined domain");
            let switch = matches!(action, KeyAction::SwitchLayout(_)) as u8;
            let backspace = matches!(action, KeyAction::Backspace) as u8;
            let enter = matches!(action, KeyAction::Enter) as u8;
            let insert = matches!(action, KeyAction::Insert(_)) as u8;
            assert_eq!(switch + backspace + enter + insert, 1);
        }
    }

    #[test]
    fn test_unencodable_code_is_out_of_domain() {
        let map = KeyMap::default();
        // surrogate range: not a scalar, not reserved
        assert_eq!(map.classify(0xD800), None);
    }

    #[test]
    fn test_duplicate_reserved_code_fails_fast() {
        let err = KeyMap::new(
            key::BACKSPACE,
            key::BACKSPACE,
            KeyMap::default().switches,
        )
        .unwrap_err();
        assert!(matches!(err, KeymapError::DuplicateCode(_)));
    }

    #[test]
    fn test_printable_reserved_code_fails_fast() {
        let err = KeyMap::new('x' as u32, key::ENTER, KeyMap::default().switches).unwrap_err();
        assert!(matches!(err, KeymapError::PrintableCollision(_, 'x')));
    }
}
