use crate::actions::{self, ActionOutcome, NoticeLevel};
use crate::app::{App, Message, Model, ToastLevel};

impl App {
    /// Run the clipboard and store work behind a message.
    pub(super) fn handle_message_side_effects(&mut self, model: &mut Model, msg: &Message) {
        match msg {
            Message::Save => {
                let outcome = actions::save_note(model.editor(), self.store.as_mut());
                if outcome.notice.level == NoticeLevel::Info {
                    model.dirty = false;
                }
                model.show_notice(outcome.notice);
            }
            Message::Copy => {
                let outcome = actions::copy(model.editor(), self.clipboard.as_mut());
                model.show_notice(outcome.notice);
            }
            Message::Cut => {
                let outcome = actions::cut(model.editor(), self.clipboard.as_mut());
                Self::apply_outcome(model, outcome);
            }
            Message::Paste => {
                let outcome = actions::paste(model.editor(), self.clipboard.as_mut());
                Self::apply_outcome(model, outcome);
            }
            Message::Quit if !model.should_quit => self.flush_on_quit(model),
            _ => {}
        }
    }

    /// Load the saved note into a fresh model.
    pub(super) fn load_session(&self, terminal_size: (u16, u16)) -> Model {
        let (editor, notice) = actions::load_note(self.store.as_ref());
        let mut model = Model::new(editor, terminal_size);
        if let Some(notice) = notice {
            model.show_notice(notice);
        }
        model
    }

    fn flush_on_quit(&mut self, model: &mut Model) {
        match actions::end_session(model.editor(), self.store.as_mut()) {
            Ok(()) => {
                model.dirty = false;
                model.should_quit = true;
            }
            Err(err) => {
                tracing::error!(%err, "note flush on quit failed");
                model.show_toast(
                    ToastLevel::Error,
                    format!("Save failed: {err}. Press Ctrl+Q again to quit without saving"),
                );
                model.quit_confirmed = true;
            }
        }
    }

    fn apply_outcome(model: &mut Model, outcome: ActionOutcome) {
        if &outcome.state != model.editor() {
            model.set_editor(outcome.state);
            model.ensure_cursor_visible();
        }
        model.show_notice(outcome.notice);
    }
}
