// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::{JsonFileStore, KeyValueStore, PersistenceError};

fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("storage.json")
}

#[test]
fn test_missing_file_opens_empty() {
    let dir: TempDir = tempfile::tempdir().unwrap();

    let store: JsonFileStore = JsonFileStore::open(store_path(&dir)).unwrap();

    assert_eq!(store.get("repairShopUser").unwrap(), None);
    assert!(!store_path(&dir).exists());
}

#[test]
fn test_empty_file_opens_empty() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    fs::write(store_path(&dir), "  \n").unwrap();

    let store: JsonFileStore = JsonFileStore::open(store_path(&dir)).unwrap();

    assert_eq!(store.get("anything").unwrap(), None);
}

#[test]
fn test_values_survive_reopen() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    {
        let mut store: JsonFileStore = JsonFileStore::open(store_path(&dir)).unwrap();
        store.set("repairShopUser", "{\"id\":\"1\"}").unwrap();
        store.set("theme", "dark").unwrap();
    }

    let reopened: JsonFileStore = JsonFileStore::open(store_path(&dir)).unwrap();

    assert_eq!(
        reopened.get("repairShopUser").unwrap().as_deref(),
        Some("{\"id\":\"1\"}")
    );
    assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_remove_is_written_through() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let mut store: JsonFileStore = JsonFileStore::open(store_path(&dir)).unwrap();
    store.set("repairShopUser", "x").unwrap();

    store.remove("repairShopUser").unwrap();

    let reopened: JsonFileStore = JsonFileStore::open(store_path(&dir)).unwrap();
    assert_eq!(reopened.get("repairShopUser").unwrap(), None);
}

#[test]
fn test_file_holds_a_single_json_object() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let mut store: JsonFileStore = JsonFileStore::open(store_path(&dir)).unwrap();
    store.set("a", "1").unwrap();

    let contents: String = fs::read_to_string(store.path()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();

    assert_eq!(parsed, serde_json::json!({ "a": "1" }));
}

#[test]
fn test_corrupt_file_is_rejected() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    fs::write(store_path(&dir), "[1, 2, 3]").unwrap();

    let result: Result<JsonFileStore, PersistenceError> = JsonFileStore::open(store_path(&dir));

    assert!(matches!(result, Err(PersistenceError::CorruptStore { .. })));
}

#[test]
fn test_failed_write_keeps_previous_value() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let missing_parent: PathBuf = dir.path().join("missing").join("storage.json");
    let mut store: JsonFileStore = JsonFileStore::open(&missing_parent).unwrap();

    let result: Result<(), PersistenceError> = store.set("k", "v");

    assert!(matches!(result, Err(PersistenceError::Io(_))));
    assert_eq!(store.get("k").unwrap(), None);
}
