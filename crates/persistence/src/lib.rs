// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the repair shop console.
//!
//! The console keeps exactly one durable thing: the signed-in user's session
//! record. This crate stores it in a flat key-value map with two backends:
//!
//! - **In-memory**: used by tests and by hosts that do not need sessions to
//!   survive a restart
//! - **JSON file**: the whole map is written as one JSON object and rewritten
//!   after every change
//!
//! Backend selection happens once at construction time and is transparent to
//! callers, who talk to [`Persistence`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

mod backend;
mod error;

#[cfg(test)]
mod tests;

pub use backend::KeyValueStore;
pub use backend::file::JsonFileStore;
pub use backend::memory::InMemoryStore;
pub use error::PersistenceError;

/// Internal enum for the concrete storage backend.
#[derive(Debug)]
enum BackendStorage {
    Memory(InMemoryStore),
    File(JsonFileStore),
}

/// Persistence adapter over the configured storage backend.
#[derive(Debug)]
pub struct Persistence {
    storage: BackendStorage,
}

impl Persistence {
    /// Creates a new persistence adapter backed by an in-memory map.
    #[must_use]
    pub const fn new_in_memory() -> Self {
        Self {
            storage: BackendStorage::Memory(InMemoryStore::new()),
        }
    }

    /// Creates a new persistence adapter backed by a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the storage file; it is created on first write
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        Ok(Self {
            storage: BackendStorage::File(JsonFileStore::open(path)?),
        })
    }

    /// Reads and decodes the JSON value stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` if nothing is stored under `key`
    /// * `Ok(Some(value))` if the stored JSON decodes as `T`
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::SerializationError` if the stored text is
    /// not valid JSON for `T`, or a backend error if the read fails.
    pub fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistenceError> {
        let Some(raw) = self.get(key)? else {
            return Ok(None);
        };
        let value: T = serde_json::from_str(&raw)?;
        Ok(Some(value))
    }

    /// Encodes `value` as JSON and stores it under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the backend write fails.
    pub fn write_json<T: Serialize>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), PersistenceError> {
        let raw: String = serde_json::to_string(value)?;
        self.set(key, &raw)?;
        debug!(key, bytes = raw.len(), "Stored JSON value");
        Ok(())
    }

    /// Whether this adapter writes through to disk.
    #[must_use]
    pub const fn is_durable(&self) -> bool {
        matches!(self.storage, BackendStorage::File(_))
    }
}

impl KeyValueStore for Persistence {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match &self.storage {
            BackendStorage::Memory(store) => store.get(key),
            BackendStorage::File(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        match &mut self.storage {
            BackendStorage::Memory(store) => store.set(key, value),
            BackendStorage::File(store) => store.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        match &mut self.storage {
            BackendStorage::Memory(store) => store.remove(key),
            BackendStorage::File(store) => store.remove(key),
        }
    }
}
