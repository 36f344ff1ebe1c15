use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{PersistenceStore, StoreError};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct Entries(BTreeMap<String, String>);

/// Note store kept as a JSON object of string keys in a single file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, StoreError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Entries::default()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_slice(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_vec_pretty(entries)?;
        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);
        replace_file(&tmp_path, &self.path, &json).map_err(io_err)
    }
}

/// Write `contents` to `tmp_path`, then rename it over `path`.
///
/// The temporary file is removed again if either step fails.
fn replace_file(tmp_path: &Path, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let result = fs::write(tmp_path, contents).and_then(|()| fs::rename(tmp_path, path));
    if result.is_err() {
        let _ = fs::remove_file(tmp_path);
    }
    result
}

impl PersistenceStore for FileStore {
    fn save(&mut self, key: &str, text: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.0.insert(key.to_string(), text.to_string());
        self.write_entries(&entries)?;
        tracing::debug!(path = %self.path.display(), key, bytes = text.len(), "note stored");
        Ok(())
    }

    fn load(&self, key: &str) -> Result<String, StoreError> {
        let mut entries = self.read_entries()?;
        Ok(entries.0.remove(key).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NOTE_KEY;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("notes.json"));
        assert_eq!(store.load(NOTE_KEY).unwrap(), "");
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("notes.json");
        let mut store = FileStore::new(&path);
        store.save(NOTE_KEY, "hello").unwrap();
        assert!(path.exists());
        assert_eq!(store.load(NOTE_KEY).unwrap(), "hello");
    }

    #[test]
    fn test_save_keeps_other_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, r#"{"other": "kept"}"#).unwrap();

        let mut store = FileStore::new(&path);
        store.save(NOTE_KEY, "note").unwrap();

        assert_eq!(store.load("other").unwrap(), "kept");
        assert_eq!(store.load(NOTE_KEY).unwrap(), "note");
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("notes.json"));
        store.save(NOTE_KEY, "x").unwrap();
        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("notes.json")]);
    }

    #[test]
    fn test_corrupt_file_is_reported_not_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        fs::write(&path, "not json at all").unwrap();

        let mut store = FileStore::new(&path);
        assert!(matches!(
            store.load(NOTE_KEY),
            Err(StoreError::Corrupt { .. })
        ));
        assert!(store.save(NOTE_KEY, "new").is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json at all");
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let dir = tempdir().unwrap();
        // A directory where the file should be.
        let store = FileStore::new(dir.path());
        assert!(matches!(store.load(NOTE_KEY), Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        // Renaming a file over a directory fails on every platform.
        let target = dir.path().join("occupied");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x").unwrap();
        let tmp = dir.path().join("occupied.tmp");

        assert!(replace_file(&tmp, &target, b"{}").is_err());
        assert!(!tmp.exists());
        assert!(target.join("keep").exists());
    }
}
