use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::actions;
use crate::app::{App, Model, update};

impl App {
    /// Run the main event loop.
    ///
    /// Loads the saved note, runs until the user quits, and flushes the note
    /// on the way out.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization or the event loop
    /// encounters an I/O failure.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - notepad requires an interactive terminal")?;
        let size = terminal.size()?;
        let _ = execute!(stdout(), EnableBracketedPaste);

        let mut model = self.load_session((size.width, size.height));
        let result = self.event_loop(&mut terminal, &mut model);

        let _ = execute!(stdout(), DisableBracketedPaste);
        ratatui::restore();

        if result.is_err() && !model.should_quit {
            // The loop died before the quit flush: keep the note if we can.
            if let Err(err) = actions::end_session(model.editor(), self.store.as_mut()) {
                tracing::error!(%err, "note flush after event loop failure failed");
            }
        }
        result
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let poll_ms = if needs_render { 0 } else { 250 };
            if event::poll(Duration::from_millis(poll_ms))? {
                let mut handled = 0_u32;
                let mut next_event = Some(event::read()?);
                // Coalesce key repeat and paste bursts into a single render.
                while let Some(ev) = next_event.take() {
                    if let Some(msg) = Self::handle_event(&ev, model) {
                        tracing::trace!(frame = frame_idx, ?msg, "message");
                        handled += 1;
                        let side_msg = msg.clone();
                        *model = update(std::mem::take(model), msg);
                        self.handle_message_side_effects(model, &side_msg);
                        needs_render = true;
                    }
                    if model.should_quit {
                        break;
                    }
                    if event::poll(Duration::from_millis(0))? {
                        next_event = Some(event::read()?);
                    }
                }
                if handled > 1 {
                    tracing::trace!(frame = frame_idx, handled, "event burst");
                }
            }

            if model.should_quit {
                break;
            }

            if needs_render {
                frame_idx += 1;
                let draw_start = Instant::now();
                terminal.draw(|frame| Self::view(model, frame))?;
                tracing::trace!(
                    frame = frame_idx,
                    draw_ms = draw_start.elapsed().as_secs_f64() * 1000.0,
                    "frame drawn"
                );
                needs_render = false;
            }
        }
        Ok(())
    }
}
