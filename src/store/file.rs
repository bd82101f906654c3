use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::models::Money;
use crate::store::traits::KeyValueStore;
use crate::store::typed::DeskStore;

pub const SESSION_FILE: &str = "session.json";
pub const PROFILE_FILE: &str = "profile.json";

/// Open the session and profile files under `dir` as one typed store.
pub fn open_desk(dir: &Path, opening_balance: Money) -> Result<DeskStore<FileStore>, StoreError> {
    let session = FileStore::open(dir.join(SESSION_FILE))?;
    let profile = FileStore::open(dir.join(PROFILE_FILE))?;
    Ok(DeskStore::with_opening_balance(session, profile, opening_balance))
}

/// Store backed by a single JSON object file, rewritten on every change
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the file at `path`, starting empty if it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::CorruptFile {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        debug!("Opened store {} with {} keys", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    /// Delete every key and the backing file.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(&self.entries).map_err(|source| {
            StoreError::CorruptFile {
                path: self.path.clone(),
                source,
            }
        })?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let previous = self.entries.insert(key.to_string(), value);
        if let Err(err) = self.flush() {
            // Keep memory in step with what is on disk
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let Some(old) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(err) = self.flush() {
            self.entries.insert(key.to_string(), old);
            return Err(err);
        }
        Ok(())
    }
}
