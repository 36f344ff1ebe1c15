//! Terminal UI components.
//!
//! This module contains all rendering code:
//! - the editor pane with selection highlight and cursor
//! - title, toast and status bars
//! - the help overlay

mod overlays;
mod render;
mod status;

pub use render::{line_number_width, render};

pub const TITLE: &str = "Notepad";
pub const PLACEHOLDER: &str = "Start typing your note here...";

/// Display width of a char as drawn in the editor.
///
/// Tabs and other control characters occupy one cell.
pub fn char_width(c: char) -> usize {
    if c.is_control() {
        1
    } else {
        unicode_width::UnicodeWidthChar::width(c).unwrap_or(0)
    }
}

/// The char actually drawn for `c`.
pub(crate) fn display_char(c: char) -> char {
    match c {
        '\t' => ' ',
        c if c.is_control() => '\u{fffd}',
        c => c,
    }
}
