/// Selectable on-screen keyboard layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutVariant {
    HiraganaPrimary,
    HiraganaSecondary,
    KatakanaPrimary,
    KatakanaSecondary,
    Romanized,
}

impl LayoutVariant {
    pub const ALL: [LayoutVariant; 5] = [
        LayoutVariant::HiraganaPrimary,
        LayoutVariant::HiraganaSecondary,
        LayoutVariant::KatakanaPrimary,
        LayoutVariant::KatakanaSecondary,
        LayoutVariant::Romanized,
    ];
}

/// Identifier of a concrete key-layout resource on the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutResourceId(pub u32);

/// Static variant-to-resource table.
///
/// `resolve` is a pure lookup; a missing entry is a legitimate outcome, not
/// an error — the caller falls back to the platform's native text-entry
/// surface.
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    entries: Vec<(LayoutVariant, LayoutResourceId)>,
}

impl LayoutRegistry {
    pub fn new(entries: Vec<(LayoutVariant, LayoutResourceId)>) -> Self {
        Self { entries }
    }

    pub fn resolve(&self, variant: LayoutVariant) -> Option<LayoutResourceId> {
        self.entries
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, id)| *id)
    }
}

impl Default for LayoutRegistry {
    /// The four kana layouts ship as resources; Romanized has no custom
    /// layout and resolves to the native surface.
    fn default() -> Self {
        Self::new(vec![
            (LayoutVariant::HiraganaPrimary, LayoutResourceId(0)),
            (LayoutVariant::HiraganaSecondary, LayoutResourceId(1)),
            (LayoutVariant::KatakanaPrimary, LayoutResourceId(2)),
            (LayoutVariant::KatakanaSecondary, LayoutResourceId(3)),
        ])
    }
}
