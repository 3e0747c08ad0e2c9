// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{InMemoryStore, KeyValueStore};

#[test]
fn test_missing_key_reads_as_none() {
    let store: InMemoryStore = InMemoryStore::new();

    assert_eq!(store.get("repairShopUser").unwrap(), None);
    assert!(store.is_empty());
}

#[test]
fn test_set_replaces_previous_value() {
    let mut store: InMemoryStore = InMemoryStore::new();

    store.set("k", "first").unwrap();
    store.set("k", "second").unwrap();

    assert_eq!(store.get("k").unwrap().as_deref(), Some("second"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_remove_is_idempotent() {
    let mut store: InMemoryStore = InMemoryStore::new();
    store.set("k", "v").unwrap();

    store.remove("k").unwrap();
    store.remove("k").unwrap();

    assert_eq!(store.get("k").unwrap(), None);
}
