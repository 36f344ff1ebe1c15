//! Selection-aware text buffer for the note.
//!
//! [`EditorState`] holds the note text and the active selection. All
//! operations are pure: they take a state and return the next one, leaving
//! the caller to own the single mutable slot.
//!
//! Offsets are counted in chars (Unicode scalar values).

mod buffer;

pub use buffer::{EditorState, InvalidRangeError, SelectionRange};

/// Byte index of the char at `char_idx`, or `text.len()` past the end.
pub fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Convert a char offset to a zero-based `(line, column)` pair.
///
/// Columns are char counts from the start of the line.
pub fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 0;
    let mut col = 0;
    for ch in text.chars().take(offset) {
        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// Convert a `(line, column)` pair back to a char offset.
///
/// Lines past the end clamp to the last line; columns past the end of a
/// line clamp to the line end.
pub fn offset_at(text: &str, line: usize, col: usize) -> usize {
    let mut offset = 0;
    for (idx, content) in text.split('\n').enumerate() {
        let len = content.chars().count();
        if idx == line {
            return offset + col.min(len);
        }
        offset += len + 1;
    }
    // Past the last line: end of text.
    offset.saturating_sub(1)
}

/// Number of lines, counting an empty text as one line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Length of line `line` in chars (0 if it does not exist).
pub fn line_len(text: &str, line: usize) -> usize {
    text.split('\n').nth(line).map_or(0, |l| l.chars().count())
}
