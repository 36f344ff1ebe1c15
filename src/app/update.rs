use crate::actions;
use crate::app::{Model, ToastLevel};
use crate::editor::{EditorState, SelectionRange};

use super::typing::{self, Motion, RawEdit};

/// All possible events and actions in the application.
///
/// These represent user input, system events, and toolbar actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Typing
    /// Type a character over the selection
    InsertChar(char),
    /// Type a block of text (terminal paste) over the selection
    InsertText(String),
    /// Insert a line break (Enter)
    InsertNewline,
    /// Delete selection or character before cursor (Backspace)
    DeleteBack,
    /// Delete selection or character at cursor (Delete)
    DeleteForward,

    // Cursor and selection
    /// Move the cursor; `true` extends the selection (Shift held)
    Move(Motion, bool),
    /// Select the whole note
    SelectAll,
    /// Collapse the selection at the cursor
    ClearSelection,

    // Toolbar
    /// Save the note to the store
    Save,
    /// Copy selection (or whole note) to the clipboard
    Copy,
    /// Cut selection (or whole note) to the clipboard
    Cut,
    /// Paste clipboard text at the cursor
    Paste,
    /// Discard the text and start an empty note
    NewNote,

    // Window
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Save and quit
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// Messages that need the clipboard or the store are no-ops here and are
/// carried out by the side-effect handler.
pub fn update(mut model: Model, msg: Message) -> Model {
    if !matches!(msg, Message::Quit) {
        model.quit_confirmed = false;
    }

    match msg {
        // Typing
        Message::InsertChar(ch) => {
            let mut buf = [0_u8; 4];
            let edit = typing::type_text(model.editor(), ch.encode_utf8(&mut buf));
            apply_edit(&mut model, edit);
        }
        Message::InsertText(text) => {
            let edit = typing::type_text(model.editor(), &text);
            apply_edit(&mut model, edit);
        }
        Message::InsertNewline => {
            let edit = typing::type_text(model.editor(), "\n");
            apply_edit(&mut model, edit);
        }
        Message::DeleteBack => {
            if let Some(edit) = typing::delete_back(model.editor()) {
                apply_edit(&mut model, edit);
            }
        }
        Message::DeleteForward => {
            if let Some(edit) = typing::delete_forward(model.editor()) {
                apply_edit(&mut model, edit);
            }
        }

        // Cursor and selection
        Message::Move(motion, extend) => move_cursor(&mut model, motion, extend),
        Message::SelectAll => {
            let len = model.editor().char_len();
            model.set_selection(SelectionRange::new(0, len));
            model.anchor = Some(0);
            model.sticky_col = None;
        }
        Message::ClearSelection => {
            let cursor = model.cursor();
            model.set_selection(SelectionRange::collapsed(cursor));
            model.anchor = None;
        }

        Message::NewNote => {
            let outcome = actions::new_note();
            model.set_editor(outcome.state);
            model.show_notice(outcome.notice);
        }
        // Save/Copy/Cut/Paste: handled in effects (clipboard and store)
        Message::Save | Message::Copy | Message::Cut | Message::Paste => {}

        // Window
        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }
        Message::Resize(width, height) => {
            model.width = width;
            model.height = height;
        }

        // Application
        Message::Quit => {
            // The first quit flushes the note in effects; a second one after a
            // failed flush exits without saving.
            if model.quit_confirmed {
                model.should_quit = true;
            }
        }
    }
    model.ensure_cursor_visible();
    model
}

/// Hand a raw keystroke result to the buffer for validation.
fn apply_edit(model: &mut Model, (text, selection): RawEdit) {
    match EditorState::new(text, selection) {
        Ok(next) => model.set_editor(next),
        Err(err) => model.show_toast(ToastLevel::Error, err.to_string()),
    }
}

fn move_cursor(model: &mut Model, motion: Motion, extend: bool) {
    let sel = model.editor().selection();
    let cursor = model.cursor();
    if !motion.is_vertical() {
        model.sticky_col = None;
    }

    // Left/Right on a selection collapse it to the matching edge.
    let mut sticky_col = model.sticky_col;
    let target = match motion {
        Motion::Left if !extend && !sel.is_collapsed() => sel.start(),
        Motion::Right if !extend && !sel.is_collapsed() => sel.end(),
        _ => typing::motion_target(model.editor().text(), cursor, motion, &mut sticky_col),
    };
    model.sticky_col = sticky_col;

    if extend {
        let anchor = model.anchor.unwrap_or(if cursor == sel.start() {
            sel.end()
        } else {
            sel.start()
        });
        model.set_selection(SelectionRange::new(anchor, target));
        model.anchor = Some(anchor);
    } else {
        model.set_selection(SelectionRange::collapsed(target));
        model.anchor = None;
    }
}
