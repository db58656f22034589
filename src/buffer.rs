use tracing::trace;

/// Editable answer field: character content plus a clamped selection.
///
/// Positions are character indices, not byte offsets; one key press inserts
/// exactly one character. A collapsed selection (`start == end`) is a plain
/// cursor. Every operation re-clamps the selection into `[0, len]`, so the
/// buffer is total over its input domain: out-of-range arguments are
/// clamped, never errors, and boundary edits are no-ops.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    chars: Vec<char>,
    start: usize,
    end: usize,
}

impl TextBuffer {
    /// Empty buffer with a collapsed selection at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer pre-filled with `content`, cursor collapsed at the end.
    pub fn from_content(content: &str) -> Self {
        let chars: Vec<char> = content.chars().collect();
        let len = chars.len();
        Self {
            chars,
            start: len,
            end: len,
        }
    }

    pub fn content(&self) -> String {
        self.chars.iter().collect()
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Current selection as `(start, end)` character positions.
    pub fn selection(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// True when the selection is a plain cursor with no highlighted range.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Clamp both bounds into `[0, len]`, swapping them if `start > end`.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.chars.len();
        let a = start.min(len);
        let b = end.min(len);
        if a <= b {
            self.start = a;
            self.end = b;
        } else {
            self.start = b;
            self.end = a;
        }
    }

    /// Replace the current selection with `text`.
    ///
    /// A range selection is removed first, then `text` goes in at `start`;
    /// the cursor collapses to the position immediately after the inserted
    /// characters.
    pub fn insert(&mut self, text: &str) {
        if self.start != self.end {
            self.remove_span(self.start, self.end);
        }
        let at = self.start;
        let mut inserted = 0;
        for (i, ch) in text.chars().enumerate() {
            self.chars.insert(at + i, ch);
            inserted += 1;
        }
        let cursor = at + inserted;
        self.set_selection(cursor, cursor);
        trace!(at, inserted, "insert");
    }

    /// Remove `[start, end)`; the cursor collapses to `start`.
    pub fn delete_range(&mut self, start: usize, end: usize) {
        let len = self.chars.len();
        let (a, b) = if start <= end { (start, end) } else { (end, start) };
        let a = a.min(len);
        let b = b.min(len);
        self.remove_span(a, b);
        self.set_selection(a, a);
    }

    /// Backspace semantics.
    ///
    /// A range selection is deleted as a whole; a collapsed cursor removes
    /// the single character before it. At position 0 this is a no-op.
    pub fn delete_before_cursor(&mut self) {
        if self.start != self.end {
            self.delete_range(self.start, self.end);
        } else if self.start > 0 {
            let at = self.start - 1;
            self.remove_span(at, at + 1);
            self.set_selection(at, at);
        }
    }

    fn remove_span(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.chars.len());
        self.chars.drain(start..end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_is_empty_collapsed_at_zero() {
        let buf = TextBuffer::new();
        assert_eq!(buf.content(), "");
        assert_eq!(buf.selection(), (0, 0));
        assert!(buf.is_collapsed());
    }

    #[test]
    fn test_insert_into_empty() {
        let mut buf = TextBuffer::new();
        buf.insert("あ");
        assert_eq!(buf.content(), "あ");
        assert_eq!(buf.selection(), (1, 1));
    }

    #[test]
    fn test_insert_mid_buffer() {
        let mut buf = TextBuffer::from_content("あう");
        buf.set_selection(1, 1);
        buf.insert("い");
        assert_eq!(buf.content(), "あいう");
        assert_eq!(buf.selection(), (2, 2));
    }

    #[test]
    fn test_insert_replaces_range() {
        let mut buf = TextBuffer::from_content("あいう");
        buf.set_selection(1, 3);
        buf.insert("え");
        assert_eq!(buf.content(), "あえ");
        assert_eq!(buf.selection(), (2, 2));
    }

    #[test]
    fn test_backspace_collapsed() {
        let mut buf = TextBuffer::from_content("あい");
        buf.set_selection(1, 1);
        buf.delete_before_cursor();
        assert_eq!(buf.content(), "い");
        assert_eq!(buf.selection(), (0, 0));
    }

    #[test]
    fn test_backspace_range_deletes_whole_selection() {
        let mut buf = TextBuffer::from_content("かきくけ");
        buf.set_selection(1, 3);
        buf.delete_before_cursor();
        assert_eq!(buf.content(), "かけ");
        assert_eq!(buf.selection(), (1, 1));
    }

    #[test]
    fn test_backspace_at_zero_is_noop() {
        let mut buf = TextBuffer::new();
        buf.delete_before_cursor();
        assert_eq!(buf.content(), "");
        assert_eq!(buf.selection(), (0, 0));

        let mut buf = TextBuffer::from_content("あ");
        buf.set_selection(0, 0);
        buf.delete_before_cursor();
        assert_eq!(buf.content(), "あ");
        assert_eq!(buf.selection(), (0, 0));
    }

    // insert then backspace is a local inverse
    #[test]
    fn test_insert_backspace_local_inverse() {
        let mut buf = TextBuffer::from_content("かな");
        buf.set_selection(1, 1);
        let before = buf.clone();
        buf.insert("ん");
        buf.delete_before_cursor();
        assert_eq!(buf, before);
    }

    #[test]
    fn test_delete_range_clamps_and_swaps() {
        let mut buf = TextBuffer::from_content("あいう");
        buf.delete_range(99, 1);
        assert_eq!(buf.content(), "あ");
        assert_eq!(buf.selection(), (1, 1));
    }

    #[test]
    fn test_set_selection_clamps_and_swaps() {
        let mut buf = TextBuffer::from_content("あい");
        buf.set_selection(5, 1);
        assert_eq!(buf.selection(), (1, 2));
        buf.set_selection(9, 9);
        assert_eq!(buf.selection(), (2, 2));
    }

    // -----------------------------------------------------------------------
    // Property: every operation restores 0 <= start <= end <= len
    // -----------------------------------------------------------------------

    #[derive(Debug, Clone)]
    enum Op {
        Insert(char),
        DeleteRange(usize, usize),
        Backspace,
        SetSelection(usize, usize),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => prop::sample::select(vec!['あ', 'い', 'ん', 'カ', 'a', '1'])
                .prop_map(Op::Insert),
            2 => (0usize..16, 0usize..16).prop_map(|(a, b)| Op::DeleteRange(a, b)),
            3 => Just(Op::Backspace),
            3 => (0usize..16, 0usize..16).prop_map(|(a, b)| Op::SetSelection(a, b)),
        ]
    }

    fn selection_invariant(buf: &TextBuffer) -> bool {
        let (start, end) = buf.selection();
        start <= end && end <= buf.len()
    }

    proptest! {
        #[test]
        fn prop_ops_preserve_selection_invariant(ops in prop::collection::vec(arb_op(), 0..64)) {
            let mut buf = TextBuffer::new();
            for op in ops {
                match op {
                    Op::Insert(ch) => buf.insert(&ch.to_string()),
                    Op::DeleteRange(a, b) => buf.delete_range(a, b),
                    Op::Backspace => buf.delete_before_cursor(),
                    Op::SetSelection(a, b) => buf.set_selection(a, b),
                }
                prop_assert!(selection_invariant(&buf));
            }
        }
    }
}
