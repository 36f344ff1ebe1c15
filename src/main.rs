//! Notepad - A single-note terminal notepad.
//!
//! # Usage
//!
//! ```bash
//! notepad
//! notepad --store ~/notes.json
//! notepad --ephemeral --no-system-clipboard
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use notepad::app::App;
use notepad::clipboard::{ClipboardPort, MemoryClipboard, SystemClipboard};
use notepad::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    save_config_flags,
};
use notepad::store::{FileStore, MemoryStore, PersistenceStore, default_store_path};

const LOG_ENV: &str = "NOTEPAD_LOG";

/// A single-note terminal notepad
#[derive(Parser, Debug)]
#[command(name = "notepad", version, about, long_about = None)]
struct Cli {
    /// Note store file (JSON)
    #[arg(long, value_name = "PATH")]
    store: Option<PathBuf>,

    /// Keep the note in memory only; nothing is read or written
    #[arg(long)]
    ephemeral: bool,

    /// Use an in-process clipboard instead of the system one
    #[arg(long)]
    no_system_clipboard: bool,

    /// Write log events to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    fn flags(&self) -> ConfigFlags {
        ConfigFlags {
            store: self.store.clone(),
            ephemeral: self.ephemeral,
            no_system_clipboard: self.no_system_clipboard,
            log_file: self.log_file.clone(),
        }
    }
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = || EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if std::env::var_os(LOG_ENV).is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn build_store(flags: &ConfigFlags) -> Box<dyn PersistenceStore> {
    if flags.ephemeral {
        return Box::new(MemoryStore::new());
    }
    let path = flags.store.clone().unwrap_or_else(default_store_path);
    tracing::info!(path = %path.display(), "using note store");
    Box::new(FileStore::new(path))
}

fn build_clipboard(flags: &ConfigFlags) -> Box<dyn ClipboardPort> {
    if flags.no_system_clipboard {
        Box::new(MemoryClipboard::new())
    } else {
        Box::new(SystemClipboard::new())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.log_file.as_deref())?;

    let mut app = App::new(build_store(&effective), build_clipboard(&effective));
    app.run().context("Application error")
}
