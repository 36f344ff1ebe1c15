//! Clipboard access for copy, cut and paste.
//!
//! [`SystemClipboard`] talks to the platform clipboard and falls back to an
//! OSC 52 escape sequence when the platform clipboard cannot be written (for
//! example over SSH). Writes are also kept in a session-local register so
//! paste keeps working when the platform clipboard cannot be read.

use std::io::{Write, stdout};

use base64::Engine;
use thiserror::Error;

/// The clipboard cannot be used on this platform or right now.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Read/write access to a text clipboard.
pub trait ClipboardPort {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Unavailable`] if no clipboard can be written.
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Current clipboard text; empty when the clipboard holds no text.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Unavailable`] if no clipboard can be read.
    fn read(&mut self) -> Result<String, ClipboardError>;
}

/// Platform clipboard with terminal and session-local fallbacks.
///
/// The platform handle is opened on first use and kept for the session: on
/// Linux the application itself serves the clipboard contents, which vanish
/// once the last handle is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    platform: Option<arboard::Clipboard>,
    register: Option<String>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn platform(&mut self) -> Result<&mut arboard::Clipboard, arboard::Error> {
        let clipboard = match self.platform.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new()?,
        };
        Ok(self.platform.insert(clipboard))
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("connected", &self.platform.is_some())
            .field("register", &self.register)
            .finish()
    }
}

impl ClipboardPort for SystemClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let platform = self.platform().and_then(|clip| clip.set_text(text));
        if let Err(err) = platform {
            tracing::warn!(%err, "platform clipboard write failed, using OSC 52");
            self.platform = None;
            copy_to_clipboard_osc52(text)
                .map_err(|io_err| ClipboardError::Unavailable(format!("{err}; {io_err}")))?;
        }
        self.register = Some(text.to_string());
        Ok(())
    }

    fn read(&mut self) -> Result<String, ClipboardError> {
        let platform = self.platform().and_then(|clip| clip.get_text());
        if let Err(err) = &platform {
            tracing::debug!(%err, "platform clipboard read failed");
            if !matches!(err, arboard::Error::ContentNotAvailable) {
                self.platform = None;
            }
        }
        resolve_read(platform, self.register.as_deref())
    }
}

/// Pick what a paste sees when the platform clipboard could not be read.
///
/// Text this session copied is preferred over an empty result; with nothing
/// copied, a missing text entry reads as empty and any other failure is
/// reported.
fn resolve_read(
    platform: Result<String, arboard::Error>,
    register: Option<&str>,
) -> Result<String, ClipboardError> {
    match (platform, register) {
        (Ok(text), _) => Ok(text),
        (Err(_), Some(text)) => Ok(text.to_string()),
        (Err(arboard::Error::ContentNotAvailable), None) => Ok(String::new()),
        (Err(err), None) => Err(ClipboardError::Unavailable(err.to_string())),
    }
}

/// Process-local clipboard.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that already holds `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: text.into(),
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl ClipboardPort for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        text.clone_into(&mut self.contents);
        Ok(())
    }

    fn read(&mut self) -> Result<String, ClipboardError> {
        Ok(self.contents.clone())
    }
}

fn copy_to_clipboard_osc52(text: &str) -> std::io::Result<()> {
    let osc = osc52_sequence(text);
    let mut out = stdout();
    out.write_all(osc.as_bytes())?;
    out.flush()
}

fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x07")
}
