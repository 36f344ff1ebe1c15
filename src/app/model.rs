use std::time::{Duration, Instant};

use crate::actions::{Notice, NoticeLevel};
use crate::editor::{self, EditorState, SelectionRange};

/// How long a toast stays on screen.
const TOAST_DURATION: Duration = Duration::from_secs(3);

pub type ToastLevel = NoticeLevel;

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state. The editor state is
/// the single mutable slot; everything else is presentation.
#[derive(Debug, Clone)]
pub struct Model {
    /// The note text and selection
    editor: EditorState,
    /// Fixed end of a shift-extended selection
    pub(super) anchor: Option<usize>,
    /// Remembered column for vertical movement
    pub(super) sticky_col: Option<usize>,
    /// First visible line of the editor
    pub scroll_line: usize,
    /// First visible display column of the editor
    pub scroll_col: usize,
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
    /// Whether the text changed since the last successful save
    pub dirty: bool,
    /// Whether help overlay is visible
    pub help_visible: bool,
    toast: Option<Toast>,
    /// Set after a failed flush on quit; a second quit exits without saving
    pub quit_confirmed: bool,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Model {
    /// Create a model around a loaded note.
    pub fn new(editor: EditorState, terminal_size: (u16, u16)) -> Self {
        Self {
            editor,
            anchor: None,
            sticky_col: None,
            scroll_line: 0,
            scroll_col: 0,
            width: terminal_size.0,
            height: terminal_size.1,
            dirty: false,
            help_visible: false,
            toast: None,
            quit_confirmed: false,
            should_quit: false,
        }
    }

    pub const fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// Install a new editor state, tracking whether the text changed.
    pub(super) fn set_editor(&mut self, next: EditorState) {
        if next.text() != self.editor.text() {
            self.dirty = true;
        }
        self.editor = next;
        self.anchor = None;
        self.sticky_col = None;
    }

    /// Replace the selection without touching the text.
    pub(super) fn set_selection(&mut self, range: SelectionRange) {
        match self.editor.with_selection(range) {
            Ok(next) => self.editor = next,
            Err(err) => self.show_toast(ToastLevel::Error, err.to_string()),
        }
    }

    /// The moving end of the selection (where the cursor is drawn).
    pub fn cursor(&self) -> usize {
        let sel = self.editor.selection();
        match self.anchor {
            Some(anchor) if anchor == sel.start() => sel.end(),
            _ => sel.start(),
        }
    }

    /// Cursor as zero-based `(line, column)`.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        editor::line_col(self.editor.text(), self.cursor())
    }

    /// Rows available for note text (title, toast and status bars excluded).
    pub fn text_rows(&self) -> usize {
        let toast_rows = u16::from(self.toast.is_some());
        usize::from(self.height.saturating_sub(2 + toast_rows))
    }

    /// Columns available for note text (line-number gutter excluded).
    pub fn text_cols(&self) -> usize {
        let total_lines = editor::line_count(self.editor.text());
        let gutter = usize::from(crate::ui::line_number_width(total_lines)) + 1;
        usize::from(self.width).saturating_sub(gutter)
    }

    /// Scroll so that the cursor is on screen.
    pub fn ensure_cursor_visible(&mut self) {
        let (line, _) = self.cursor_line_col();
        let rows = self.text_rows();
        if rows == 0 || line < self.scroll_line {
            self.scroll_line = line;
        } else if line >= self.scroll_line + rows {
            self.scroll_line = line + 1 - rows;
        }

        let col = self.cursor_display_col();
        let cols = self.text_cols();
        if cols == 0 || col < self.scroll_col {
            self.scroll_col = col;
        } else if col >= self.scroll_col + cols {
            self.scroll_col = col + 1 - cols;
        }
    }

    /// Display column of the cursor on its line.
    pub fn cursor_display_col(&self) -> usize {
        let (line, col) = self.cursor_line_col();
        let text = self.editor.text().split('\n').nth(line).unwrap_or_default();
        text.chars().take(col).map(crate::ui::char_width).sum()
    }

    pub fn show_notice(&mut self, notice: Notice) {
        self.show_toast(notice.level, notice.message);
    }

    /// Show a toast. The toast row shrinks the editor, so scroll again.
    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
        self.ensure_cursor_visible();
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(EditorState::reset(), (80, 24))
    }
}
