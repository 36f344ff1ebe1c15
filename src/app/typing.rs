//! Free-form editing from the keyboard.
//!
//! Keystrokes are not routed through the buffer operations: each function
//! here produces the whole next `(text, selection)` pair, which the update
//! step hands to [`EditorState::new`] for validation.

use crate::editor::{self, EditorState, SelectionRange};

/// A raw next state produced by a keystroke.
pub type RawEdit = (String, SelectionRange);

/// Cursor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    WordLeft,
    WordRight,
    LineStart,
    LineEnd,
    DocStart,
    DocEnd,
}

impl Motion {
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }
}

/// Type `typed` over the selection.
pub fn type_text(state: &EditorState, typed: &str) -> RawEdit {
    let sel = state.selection();
    let text = splice(state.text(), sel.start(), sel.end(), typed);
    (
        text,
        SelectionRange::collapsed(sel.start() + typed.chars().count()),
    )
}

/// Backspace: remove the selection, or the char before the cursor.
///
/// Returns `None` when there is nothing to delete.
pub fn delete_back(state: &EditorState) -> Option<RawEdit> {
    let sel = state.selection();
    if !sel.is_collapsed() {
        return Some(remove(state, sel.start(), sel.end()));
    }
    if sel.start() == 0 {
        return None;
    }
    Some(remove(state, sel.start() - 1, sel.start()))
}

/// Delete key: remove the selection, or the char at the cursor.
///
/// Returns `None` when there is nothing to delete.
pub fn delete_forward(state: &EditorState) -> Option<RawEdit> {
    let sel = state.selection();
    if !sel.is_collapsed() {
        return Some(remove(state, sel.start(), sel.end()));
    }
    if sel.start() >= state.char_len() {
        return None;
    }
    Some(remove(state, sel.start(), sel.start() + 1))
}

/// Where `motion` takes a cursor at `from`.
///
/// `sticky_col` is the remembered column for vertical movement; it is
/// updated by vertical motions and ignored by the rest.
pub fn motion_target(
    text: &str,
    from: usize,
    motion: Motion,
    sticky_col: &mut Option<usize>,
) -> usize {
    let len = text.chars().count();
    let (line, col) = editor::line_col(text, from);
    match motion {
        Motion::Left => from.saturating_sub(1),
        Motion::Right => (from + 1).min(len),
        Motion::Up | Motion::Down => {
            let want = *sticky_col.get_or_insert(col);
            if motion == Motion::Up {
                if line == 0 {
                    return from;
                }
                editor::offset_at(text, line - 1, want)
            } else {
                if line + 1 >= editor::line_count(text) {
                    return from;
                }
                editor::offset_at(text, line + 1, want)
            }
        }
        Motion::WordLeft => word_left(text, from),
        Motion::WordRight => word_right(text, from),
        Motion::LineStart => from - col,
        Motion::LineEnd => from - col + editor::line_len(text, line),
        Motion::DocStart => 0,
        Motion::DocEnd => len,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn word_left(text: &str, from: usize) -> usize {
    let chars: Vec<char> = text.chars().take(from).collect();
    let mut pos = chars.len();
    if pos == 0 {
        return 0;
    }
    // At the start of a line: wrap to the end of the previous one.
    if chars[pos - 1] == '\n' {
        return pos - 1;
    }
    while pos > 0 && !is_word_char(chars[pos - 1]) && chars[pos - 1] != '\n' {
        pos -= 1;
    }
    while pos > 0 && is_word_char(chars[pos - 1]) {
        pos -= 1;
    }
    pos
}

fn word_right(text: &str, from: usize) -> usize {
    let chars: Vec<char> = text.chars().skip(from).collect();
    let Some(&first) = chars.first() else {
        return from;
    };
    // At the end of a line: wrap to the start of the next one.
    if first == '\n' {
        return from + 1;
    }
    let mut pos = 0;
    while pos < chars.len() && is_word_char(chars[pos]) {
        pos += 1;
    }
    while pos < chars.len() && !is_word_char(chars[pos]) && chars[pos] != '\n' {
        pos += 1;
    }
    from + pos
}

fn remove(state: &EditorState, start: usize, end: usize) -> RawEdit {
    (
        splice(state.text(), start, end, ""),
        SelectionRange::collapsed(start),
    )
}

fn splice(text: &str, start: usize, end: usize, with: &str) -> String {
    let from = editor::byte_offset(text, start);
    let to = editor::byte_offset(text, end);
    let mut out = String::with_capacity(text.len() - (to - from) + with.len());
    out.push_str(&text[..from]);
    out.push_str(with);
    out.push_str(&text[to..]);
    out
}
