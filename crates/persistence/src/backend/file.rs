// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON-file backend.
//!
//! The whole map is held in memory and rewritten to disk after every
//! mutation. A missing or empty file opens as an empty store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::backend::KeyValueStore;
use crate::error::PersistenceError;

/// A store persisted as a single JSON object on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`, loading any entries already written.
    ///
    /// # Arguments
    ///
    /// * `path` - The JSON file backing the store
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or does not
    /// contain a JSON object of string values.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path: PathBuf = path.as_ref().to_path_buf();

        let contents: String = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err.into()),
        };

        let entries: BTreeMap<String, String> = if contents.trim().is_empty() {
            BTreeMap::new()
        } else {
            serde_json::from_str(&contents).map_err(|err| PersistenceError::CorruptStore {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?
        };

        info!(path = %path.display(), entries = entries.len(), "Opened storage file");

        Ok(Self { path, entries })
    }

    /// The file backing this store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), PersistenceError> {
        let serialized: String = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, serialized)?;
        debug!(path = %self.path.display(), entries = self.entries.len(), "Flushed storage file");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let previous: Option<String> = self.entries.insert(key.to_string(), value.to_string());
        if let Err(err) = self.flush() {
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(err) = self.flush() {
            self.entries.insert(key.to_string(), previous);
            return Err(err);
        }
        Ok(())
    }
}
