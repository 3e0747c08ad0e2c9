// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use tempfile::TempDir;

use crate::tests::{TestRecord, create_test_record};
use crate::{KeyValueStore, Persistence, PersistenceError};

#[test]
fn test_in_memory_json_round_trip() {
    let mut persistence: Persistence = Persistence::new_in_memory();

    persistence
        .write_json("repairShopUser", &create_test_record())
        .unwrap();

    let loaded: Option<TestRecord> = persistence.read_json("repairShopUser").unwrap();
    assert_eq!(loaded, Some(create_test_record()));
    assert!(!persistence.is_durable());
}

#[test]
fn test_file_backed_json_survives_new_adapter() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        assert!(persistence.is_durable());
        persistence
            .write_json("repairShopUser", &create_test_record())
            .unwrap();
    }

    let persistence: Persistence = Persistence::new_with_file(&path).unwrap();
    let loaded: Option<TestRecord> = persistence.read_json("repairShopUser").unwrap();

    assert_eq!(loaded, Some(create_test_record()));
}

#[test]
fn test_absent_key_reads_as_none() {
    let persistence: Persistence = Persistence::new_in_memory();

    let loaded: Option<TestRecord> = persistence.read_json("repairShopUser").unwrap();

    assert_eq!(loaded, None);
}

#[test]
fn test_malformed_value_is_a_serialization_error() {
    let mut persistence: Persistence = Persistence::new_in_memory();
    persistence.set("repairShopUser", "{not json").unwrap();

    let result: Result<Option<TestRecord>, PersistenceError> =
        persistence.read_json("repairShopUser");

    assert!(matches!(result, Err(PersistenceError::SerializationError(_))));
}

#[test]
fn test_wrong_shape_is_a_serialization_error() {
    let mut persistence: Persistence = Persistence::new_in_memory();
    persistence.set("repairShopUser", "{\"id\": 7}").unwrap();

    let result: Result<Option<TestRecord>, PersistenceError> =
        persistence.read_json("repairShopUser");

    assert!(result.is_err());
}
