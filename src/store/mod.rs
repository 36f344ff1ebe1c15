//! Key-value persistence for the note.
//!
//! The application keeps one note under [`NOTE_KEY`]. Loading is done once at
//! session start and saving on demand and at session end.

mod file;

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStore;

/// Key identifying the current note.
pub const NOTE_KEY: &str = "noteText";

/// The persistence store could not be read or written.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a note store: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot encode note store: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A single-level string key-value store.
pub trait PersistenceStore {
    /// Store `text` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn save(&mut self, key: &str, text: &str) -> Result<(), StoreError>;

    /// Read the value under `key`, or an empty string if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage exists but cannot be read.
    fn load(&self, key: &str) -> Result<String, StoreError>;
}

/// Store that lives only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceStore for MemoryStore {
    fn save(&mut self, key: &str, text: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), text.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<String, StoreError> {
        Ok(self.entries.get(key).cloned().unwrap_or_default())
    }
}

/// Default location of the note store in the platform data directory.
pub fn default_store_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("notepad").join("notes.json");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("notepad")
                .join("notes.json");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("notepad").join("notes.json");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("notepad")
                .join("notes.json");
        }
    }

    PathBuf::from("notepad-notes.json")
}
