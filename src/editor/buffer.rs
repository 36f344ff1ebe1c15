use thiserror::Error;

/// A selection range `[start, end)` in char offsets.
///
/// A range with `start == end` is collapsed: a plain cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionRange {
    start: usize,
    end: usize,
}

impl SelectionRange {
    /// Create a range from two offsets given in either order.
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// A collapsed range (cursor) at `offset`.
    pub const fn collapsed(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub const fn start(self) -> usize {
        self.start
    }

    pub const fn end(self) -> usize {
        self.end
    }

    /// Whether the range is a plain cursor with nothing selected.
    pub const fn is_collapsed(self) -> bool {
        self.start == self.end
    }

    /// Number of chars covered by the range.
    pub const fn len(self) -> usize {
        self.end - self.start
    }
}

/// A range was supplied that does not fit inside the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("selection {start}..{end} is outside the text (length {len})")]
pub struct InvalidRangeError {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

/// Text content plus the active selection.
///
/// The range always lies within `[0, char_len]`. Every constructor either
/// validates the range or computes one that is in bounds, so a stale range
/// is never observable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorState {
    text: String,
    selection: SelectionRange,
    char_len: usize,
}

impl EditorState {
    /// Build a state from raw parts supplied by the UI.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRangeError`] if `selection` ends past the text.
    pub fn new(
        text: impl Into<String>,
        selection: SelectionRange,
    ) -> Result<Self, InvalidRangeError> {
        let text = text.into();
        let char_len = text.chars().count();
        if selection.end > char_len {
            return Err(InvalidRangeError {
                start: selection.start,
                end: selection.end,
                len: char_len,
            });
        }
        Ok(Self {
            text,
            selection,
            char_len,
        })
    }

    /// A state holding `text` with the cursor at offset 0.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let char_len = text.chars().count();
        Self {
            text,
            selection: SelectionRange::collapsed(0),
            char_len,
        }
    }

    /// Empty text with the cursor at 0.
    pub fn reset() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn selection(&self) -> SelectionRange {
        self.selection
    }

    /// Length of the text in chars.
    pub const fn char_len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace only the selection, keeping the text.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRangeError`] if `selection` ends past the text.
    pub fn with_selection(&self, selection: SelectionRange) -> Result<Self, InvalidRangeError> {
        if selection.end > self.char_len {
            return Err(InvalidRangeError {
                start: selection.start,
                end: selection.end,
                len: self.char_len,
            });
        }
        Ok(Self {
            text: self.text.clone(),
            selection,
            char_len: self.char_len,
        })
    }

    /// The text a copy or cut acts on: the selection if there is one,
    /// otherwise the whole note.
    pub fn effective_text(&self) -> &str {
        if self.selection.is_collapsed() {
            &self.text
        } else {
            let (from, to) = self.selection_bytes();
            &self.text[from..to]
        }
    }

    /// Delete the selection, or the entire text when nothing is selected.
    pub fn delete_effective(&self) -> Self {
        if self.selection.is_collapsed() {
            return Self::reset();
        }
        let (from, to) = self.selection_bytes();
        let mut text = String::with_capacity(self.text.len() - (to - from));
        text.push_str(&self.text[..from]);
        text.push_str(&self.text[to..]);
        Self {
            text,
            selection: SelectionRange::collapsed(self.selection.start),
            char_len: self.char_len - self.selection.len(),
        }
    }

    /// Replace the selection with `inserted` (a plain insert when collapsed).
    ///
    /// The cursor ends up collapsed right after the inserted text.
    pub fn insert_at(&self, inserted: &str) -> Self {
        let (from, to) = self.selection_bytes();
        let inserted_len = inserted.chars().count();
        let mut text = String::with_capacity(self.text.len() - (to - from) + inserted.len());
        text.push_str(&self.text[..from]);
        text.push_str(inserted);
        text.push_str(&self.text[to..]);
        Self {
            text,
            selection: SelectionRange::collapsed(self.selection.start + inserted_len),
            char_len: self.char_len - self.selection.len() + inserted_len,
        }
    }

    fn selection_bytes(&self) -> (usize, usize) {
        let from = super::byte_offset(&self.text, self.selection.start);
        let to = from + super::byte_offset(&self.text[from..], self.selection.len());
        (from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(text: &str, start: usize, end: usize) -> EditorState {
        EditorState::new(text, SelectionRange::new(start, end)).unwrap()
    }

    // --- Construction ---

    #[test]
    fn test_reset_is_empty_and_collapsed_at_zero() {
        let s = EditorState::reset();
        assert_eq!(s.text(), "");
        assert_eq!(s.selection(), SelectionRange::collapsed(0));
    }

    #[test]
    fn test_from_text_places_cursor_at_start() {
        let s = EditorState::from_text("hello");
        assert_eq!(s.selection(), SelectionRange::collapsed(0));
        assert_eq!(s.char_len(), 5);
    }

    #[test]
    fn test_range_normalizes_reversed_offsets() {
        let range = SelectionRange::new(7, 2);
        assert_eq!(range.start(), 2);
        assert_eq!(range.end(), 7);
    }

    #[test]
    fn test_new_rejects_range_past_end() {
        let err = EditorState::new("abc", SelectionRange::new(1, 4)).unwrap_err();
        assert_eq!(
            err,
            InvalidRangeError {
                start: 1,
                end: 4,
                len: 3
            }
        );
    }

    #[test]
    fn test_new_accepts_cursor_at_end() {
        assert!(EditorState::new("abc", SelectionRange::collapsed(3)).is_ok());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let s = EditorState::from_text("café");
        assert_eq!(s.char_len(), 4);
        assert!(EditorState::new("café", SelectionRange::collapsed(5)).is_err());
    }

    #[test]
    fn test_with_selection_rejects_stale_range() {
        let s = EditorState::from_text("hi");
        assert!(s.with_selection(SelectionRange::new(0, 3)).is_err());
        let moved = s.with_selection(SelectionRange::new(0, 2)).unwrap();
        assert_eq!(moved.effective_text(), "hi");
    }

    // --- effective_text ---

    #[test]
    fn test_effective_text_returns_selection() {
        let s = state("Hello World", 0, 5);
        assert_eq!(s.effective_text(), "Hello");
    }

    #[test]
    fn test_effective_text_without_selection_returns_everything() {
        let s = state("Hello World", 4, 4);
        assert_eq!(s.effective_text(), "Hello World");
    }

    #[test]
    fn test_effective_text_multibyte_selection() {
        let s = state("naïve café", 6, 10);
        assert_eq!(s.effective_text(), "café");
    }

    // --- delete_effective ---

    #[test]
    fn test_delete_effective_removes_selection() {
        let s = state("Hello World", 0, 5).delete_effective();
        assert_eq!(s.text(), " World");
        assert_eq!(s.selection(), SelectionRange::collapsed(0));
    }

    #[test]
    fn test_delete_effective_middle_selection_collapses_at_start() {
        let s = state("abcdef", 2, 4).delete_effective();
        assert_eq!(s.text(), "abef");
        assert_eq!(s.selection(), SelectionRange::collapsed(2));
        assert_eq!(s.char_len(), 4);
    }

    #[test]
    fn test_delete_effective_without_selection_clears_everything() {
        let s = state("keep nothing", 5, 5).delete_effective();
        assert_eq!(s, EditorState::reset());
    }

    // --- insert_at ---

    #[test]
    fn test_insert_at_end() {
        let s = state("abc", 3, 3).insert_at("def");
        assert_eq!(s.text(), "abcdef");
        assert_eq!(s.selection(), SelectionRange::collapsed(6));
    }

    #[test]
    fn test_insert_at_replaces_selection() {
        let s = state("Hello World", 6, 11).insert_at("there");
        assert_eq!(s.text(), "Hello there");
        assert_eq!(s.selection(), SelectionRange::collapsed(11));
    }

    #[test]
    fn test_insert_at_counts_inserted_chars() {
        let s = state("ab", 1, 1).insert_at("ñé");
        assert_eq!(s.text(), "añéb");
        assert_eq!(s.selection(), SelectionRange::collapsed(3));
        assert_eq!(s.char_len(), 4);
    }

    #[test]
    fn test_insert_empty_string_deletes_selection() {
        let s = state("abcdef", 1, 3).insert_at("");
        assert_eq!(s.text(), "adef");
        assert_eq!(s.selection(), SelectionRange::collapsed(1));
    }

    #[test]
    fn test_insert_keeps_control_characters_verbatim() {
        let s = EditorState::reset().insert_at("a\tb\r\nc\u{7}");
        assert_eq!(s.text(), "a\tb\r\nc\u{7}");
    }

    // --- Sequences ---

    #[test]
    fn test_insert_then_delete_without_selection_is_empty() {
        let s = EditorState::reset().insert_at("x").delete_effective();
        assert_eq!(s.text(), "");
        assert_eq!(s.selection(), SelectionRange::collapsed(0));
    }

    #[test]
    fn test_operations_leave_input_untouched() {
        let original = state("Hello World", 0, 5);
        let _ = original.delete_effective();
        let _ = original.insert_at("Bye");
        assert_eq!(original.text(), "Hello World");
        assert_eq!(original.selection(), SelectionRange::new(0, 5));
    }
}
