// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. store::StoreError)
    clippy::module_name_repetitions
)]

//! # Notepad
//!
//! A single-note terminal notepad.
//!
//! One note is edited in a full-screen text area with:
//! - Copy, cut and paste through the system clipboard
//! - Explicit save plus a flush when the session ends
//! - A "new note" action that starts over
//!
//! ## Architecture
//!
//! Notepad uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! The clipboard and the note store sit behind traits and are injected into
//! [`app::App`], so everything but the terminal runs in tests.
//!
//! ## Modules
//!
//! - [`editor`]: The text and selection, and the pure edit operations
//! - [`actions`]: Toolbar actions over the editor state and ports
//! - [`store`]: Note persistence
//! - [`clipboard`]: Clipboard access
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved command-line defaults

pub mod actions;
pub mod app;
pub mod clipboard;
pub mod config;
pub mod editor;
pub mod store;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::clipboard::{ClipboardPort, MemoryClipboard, SystemClipboard};
    pub use crate::editor::{EditorState, SelectionRange};
    pub use crate::store::{FileStore, MemoryStore, PersistenceStore};
}
