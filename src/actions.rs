//! Toolbar actions over the editor state and its ports.
//!
//! Each action takes the current [`EditorState`] and returns the next one
//! together with a [`Notice`] for the UI to display. When a port fails the
//! returned state is the input state, unchanged.

use crate::clipboard::ClipboardPort;
use crate::editor::EditorState;
use crate::store::{NOTE_KEY, PersistenceStore, StoreError};

/// Severity of a notice shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// User-facing feedback produced by an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Result of running an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub state: EditorState,
    pub notice: Notice,
}

impl ActionOutcome {
    fn new(state: EditorState, notice: Notice) -> Self {
        Self { state, notice }
    }
}

/// Load the saved note at session start.
///
/// The cursor starts at offset 0. An empty store produces no notice; a
/// failing store yields an empty note and a warning.
pub fn load_note(store: &dyn PersistenceStore) -> (EditorState, Option<Notice>) {
    match store.load(NOTE_KEY) {
        Ok(text) if text.is_empty() => (EditorState::reset(), None),
        Ok(text) => {
            tracing::info!(chars = text.chars().count(), "loaded saved note");
            (
                EditorState::from_text(text),
                Some(Notice::info("Loaded last saved note.")),
            )
        }
        Err(err) => {
            tracing::warn!(%err, "note load failed");
            (
                EditorState::reset(),
                Some(Notice::warning(format!("Could not load note: {err}"))),
            )
        }
    }
}

/// Save the note text. Edits are kept in memory if the store fails.
pub fn save_note(state: &EditorState, store: &mut dyn PersistenceStore) -> ActionOutcome {
    let notice = match store.save(NOTE_KEY, state.text()) {
        Ok(()) => {
            tracing::debug!(chars = state.char_len(), "note saved");
            Notice::info("Note saved")
        }
        Err(err) => {
            tracing::warn!(%err, "note save failed");
            Notice::error(format!("Save failed: {err}"))
        }
    };
    ActionOutcome::new(state.clone(), notice)
}

/// Copy the selection, or the whole note when nothing is selected.
pub fn copy(state: &EditorState, clipboard: &mut dyn ClipboardPort) -> ActionOutcome {
    let text = state.effective_text();
    if text.is_empty() {
        return ActionOutcome::new(state.clone(), Notice::info("Nothing to copy."));
    }
    let notice = match clipboard.write(text) {
        Ok(()) => {
            tracing::debug!(chars = text.chars().count(), "copied");
            Notice::info("Text copied")
        }
        Err(err) => {
            tracing::warn!(%err, "copy failed");
            Notice::warning(err.to_string())
        }
    };
    ActionOutcome::new(state.clone(), notice)
}

/// Cut the selection, or the whole note when nothing is selected.
///
/// Text is only removed once the clipboard accepted it.
pub fn cut(state: &EditorState, clipboard: &mut dyn ClipboardPort) -> ActionOutcome {
    let text = state.effective_text();
    if text.is_empty() {
        return ActionOutcome::new(state.clone(), Notice::info("Nothing to cut."));
    }
    match clipboard.write(text) {
        Ok(()) => {
            tracing::debug!(chars = text.chars().count(), "cut");
            ActionOutcome::new(state.delete_effective(), Notice::info("Text cut"))
        }
        Err(err) => {
            tracing::warn!(%err, "cut failed");
            ActionOutcome::new(state.clone(), Notice::warning(err.to_string()))
        }
    }
}

/// Paste clipboard text over the selection or at the cursor.
pub fn paste(state: &EditorState, clipboard: &mut dyn ClipboardPort) -> ActionOutcome {
    match clipboard.read() {
        Ok(text) if text.is_empty() => {
            ActionOutcome::new(state.clone(), Notice::info("Clipboard is empty."))
        }
        Ok(text) => {
            tracing::debug!(chars = text.chars().count(), "pasted");
            ActionOutcome::new(state.insert_at(&text), Notice::info("Text pasted"))
        }
        Err(err) => {
            tracing::warn!(%err, "paste failed");
            ActionOutcome::new(state.clone(), Notice::warning(err.to_string()))
        }
    }
}

/// Start over with an empty note.
pub fn new_note() -> ActionOutcome {
    ActionOutcome::new(EditorState::reset(), Notice::info("New note started."))
}

/// Flush the note when the session ends.
///
/// # Errors
///
/// Returns the [`StoreError`] if the note could not be written.
pub fn end_session(state: &EditorState, store: &mut dyn PersistenceStore) -> Result<(), StoreError> {
    store.save(NOTE_KEY, state.text())?;
    tracing::info!(chars = state.char_len(), "note flushed at session end");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{ClipboardError, MemoryClipboard};
    use crate::editor::SelectionRange;
    use crate::store::MemoryStore;
    use std::path::PathBuf;

    struct BrokenClipboard;

    impl ClipboardPort for BrokenClipboard {
        fn write(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no display".to_string()))
        }

        fn read(&mut self) -> Result<String, ClipboardError> {
            Err(ClipboardError::Unavailable("no display".to_string()))
        }
    }

    struct BrokenStore;

    impl PersistenceStore for BrokenStore {
        fn save(&mut self, _key: &str, _text: &str) -> Result<(), StoreError> {
            Err(StoreError::Io {
                path: PathBuf::from("/readonly/notes.json"),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        }

        fn load(&self, _key: &str) -> Result<String, StoreError> {
            Err(StoreError::Io {
                path: PathBuf::from("/readonly/notes.json"),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            })
        }
    }

    fn selected(text: &str, start: usize, end: usize) -> EditorState {
        EditorState::new(text, SelectionRange::new(start, end)).unwrap()
    }

    // --- load / save ---

    #[test]
    fn test_load_empty_store_is_silent() {
        let store = MemoryStore::new();
        let (state, notice) = load_note(&store);
        assert_eq!(state, EditorState::reset());
        assert!(notice.is_none());
    }

    #[test]
    fn test_load_saved_note_puts_cursor_at_start() {
        let mut store = MemoryStore::new();
        store.save(NOTE_KEY, "remember milk").unwrap();
        let (state, notice) = load_note(&store);
        assert_eq!(state.text(), "remember milk");
        assert_eq!(state.selection(), SelectionRange::collapsed(0));
        assert_eq!(notice, Some(Notice::info("Loaded last saved note.")));
    }

    #[test]
    fn test_load_failure_warns_with_empty_note() {
        let (state, notice) = load_note(&BrokenStore);
        assert_eq!(state, EditorState::reset());
        assert_eq!(notice.unwrap().level, NoticeLevel::Warning);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let state = selected("line one\nline two ✅", 2, 4);
        let outcome = save_note(&state, &mut store);
        assert_eq!(outcome.notice, Notice::info("Note saved"));
        assert_eq!(load_note(&store).0.text(), "line one\nline two ✅");
    }

    #[test]
    fn test_failed_save_keeps_edits() {
        let state = selected("unsaved work", 0, 3);
        let outcome = save_note(&state, &mut BrokenStore);
        assert_eq!(outcome.state, state);
        assert_eq!(outcome.notice.level, NoticeLevel::Error);
        assert!(outcome.notice.message.starts_with("Save failed"));
    }

    #[test]
    fn test_end_session_reports_store_error() {
        let state = EditorState::from_text("bye");
        assert!(end_session(&state, &mut BrokenStore).is_err());

        let mut store = MemoryStore::new();
        end_session(&state, &mut store).unwrap();
        assert_eq!(store.load(NOTE_KEY).unwrap(), "bye");
    }

    // --- copy ---

    #[test]
    fn test_copy_selection() {
        let mut clip = MemoryClipboard::new();
        let state = selected("Hello World", 0, 5);
        let outcome = copy(&state, &mut clip);
        assert_eq!(clip.contents(), "Hello");
        assert_eq!(outcome.state, state);
        assert_eq!(outcome.notice, Notice::info("Text copied"));
    }

    #[test]
    fn test_copy_without_selection_copies_everything() {
        let mut clip = MemoryClipboard::new();
        let state = selected("Hello World", 3, 3);
        copy(&state, &mut clip);
        assert_eq!(clip.contents(), "Hello World");
    }

    #[test]
    fn test_copy_empty_note_leaves_clipboard() {
        let mut clip = MemoryClipboard::with_text("previous");
        let outcome = copy(&EditorState::reset(), &mut clip);
        assert_eq!(clip.contents(), "previous");
        assert_eq!(outcome.notice, Notice::info("Nothing to copy."));
    }

    #[test]
    fn test_copy_unavailable_clipboard_warns() {
        let outcome = copy(&EditorState::from_text("x"), &mut BrokenClipboard);
        assert_eq!(outcome.notice.level, NoticeLevel::Warning);
        assert!(outcome.notice.message.contains("no display"));
    }

    // --- cut ---

    #[test]
    fn test_cut_selection() {
        let mut clip = MemoryClipboard::new();
        let outcome = cut(&selected("Hello World", 0, 5), &mut clip);
        assert_eq!(clip.contents(), "Hello");
        assert_eq!(outcome.state.text(), " World");
        assert_eq!(outcome.state.selection(), SelectionRange::collapsed(0));
        assert_eq!(outcome.notice, Notice::info("Text cut"));
    }

    #[test]
    fn test_cut_without_selection_takes_everything() {
        let mut clip = MemoryClipboard::new();
        let outcome = cut(&selected("all of it", 4, 4), &mut clip);
        assert_eq!(clip.contents(), "all of it");
        assert_eq!(outcome.state, EditorState::reset());
    }

    #[test]
    fn test_cut_empty_note() {
        let mut clip = MemoryClipboard::new();
        let outcome = cut(&EditorState::reset(), &mut clip);
        assert_eq!(outcome.notice, Notice::info("Nothing to cut."));
    }

    #[test]
    fn test_cut_keeps_text_when_clipboard_fails() {
        let state = selected("precious", 0, 3);
        let outcome = cut(&state, &mut BrokenClipboard);
        assert_eq!(outcome.state, state);
        assert_eq!(outcome.notice.level, NoticeLevel::Warning);
    }

    // --- paste ---

    #[test]
    fn test_paste_at_cursor() {
        let mut clip = MemoryClipboard::with_text("def");
        let outcome = paste(&selected("abc", 3, 3), &mut clip);
        assert_eq!(outcome.state.text(), "abcdef");
        assert_eq!(outcome.state.selection(), SelectionRange::collapsed(6));
        assert_eq!(outcome.notice, Notice::info("Text pasted"));
    }

    #[test]
    fn test_paste_replaces_selection() {
        let mut clip = MemoryClipboard::with_text("Goodbye");
        let outcome = paste(&selected("Hello World", 0, 5), &mut clip);
        assert_eq!(outcome.state.text(), "Goodbye World");
        assert_eq!(outcome.state.selection(), SelectionRange::collapsed(7));
    }

    #[test]
    fn test_paste_empty_clipboard() {
        let mut clip = MemoryClipboard::new();
        let state = selected("abc", 1, 2);
        let outcome = paste(&state, &mut clip);
        assert_eq!(outcome.state, state);
        assert_eq!(outcome.notice, Notice::info("Clipboard is empty."));
    }

    #[test]
    fn test_paste_unavailable_clipboard() {
        let state = EditorState::from_text("abc");
        let outcome = paste(&state, &mut BrokenClipboard);
        assert_eq!(outcome.state, state);
        assert_eq!(outcome.notice.level, NoticeLevel::Warning);
    }

    #[test]
    fn test_cut_then_paste_restores_text() {
        let mut clip = MemoryClipboard::new();
        let cut_out = cut(&selected("Hello World", 5, 11), &mut clip);
        let pasted = paste(&cut_out.state, &mut clip);
        assert_eq!(pasted.state.text(), "Hello World");
    }

    // --- new note ---

    #[test]
    fn test_new_note_resets() {
        let outcome = new_note();
        assert_eq!(outcome.state, EditorState::reset());
        assert_eq!(outcome.notice, Notice::info("New note started."));
    }
}
