//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering
//!
//! The clipboard and the note store are injected into [`App`]; only the
//! side-effect handler touches them.

mod effects;
mod event_loop;
mod input;
mod model;
mod typing;
mod update;

pub use model::{Model, ToastLevel};
pub use typing::Motion;
pub use update::{Message, update};

use crate::clipboard::{ClipboardPort, MemoryClipboard};
use crate::store::{MemoryStore, PersistenceStore};

/// Main application struct that owns the ports and runs the event loop.
pub struct App {
    store: Box<dyn PersistenceStore>,
    clipboard: Box<dyn ClipboardPort>,
}

impl App {
    /// Create an application around a note store and a clipboard.
    pub fn new(store: Box<dyn PersistenceStore>, clipboard: Box<dyn ClipboardPort>) -> Self {
        Self { store, clipboard }
    }

    /// Replace the note store.
    #[must_use]
    pub fn with_store(mut self, store: Box<dyn PersistenceStore>) -> Self {
        self.store = store;
        self
    }

    /// Replace the clipboard.
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardPort>) -> Self {
        self.clipboard = clipboard;
        self
    }
}

impl Default for App {
    /// An app that keeps everything in memory.
    fn default() -> Self {
        Self::new(
            Box::new(MemoryStore::new()),
            Box::new(MemoryClipboard::new()),
        )
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App").finish_non_exhaustive()
    }
}
