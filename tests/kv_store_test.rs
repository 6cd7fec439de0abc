//! Tests for the key-value blob store.

use diesel::Connection;
use diesel::SqliteConnection;
use diesel_migrations::MigrationHarness;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use tembo_trails::{KvStore, MIGRATIONS};

/// Creates a temporary database file with schema applied, returns the file
/// handle (must stay in scope to keep the file alive) and a ready store.
fn setup_test_store() -> (NamedTempFile, KvStore) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let mut conn = SqliteConnection::establish(&db_path).expect("Failed to connect");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Migrations failed");

    let store = KvStore::new(db_path).expect("Failed to create store");
    (db_file, store)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Blob {
    count: u32,
    label: String,
}

#[test]
fn test_get_absent_key_is_none() {
    let (_db, store) = setup_test_store();
    assert!(store.get("nothing_here").expect("Query failed").is_none());
}

#[test]
fn test_set_then_get_round_trips() {
    let (_db, store) = setup_test_store();
    let blob = Blob {
        count: 3,
        label: "herd".to_string(),
    };

    store.set_json("test_key", &blob).expect("Write failed");
    let loaded: Option<Blob> = store.get_json("test_key").expect("Read failed");
    assert_eq!(loaded, Some(blob));
}

#[test]
fn test_set_overwrites_last_write_wins() {
    let (_db, store) = setup_test_store();

    store.set_json("counter", &1u32).expect("Write failed");
    store.set_json("counter", &2u32).expect("Write failed");

    let loaded: Option<u32> = store.get_json("counter").expect("Read failed");
    assert_eq!(loaded, Some(2));
}

#[test]
fn test_remove_deletes_entry() {
    let (_db, store) = setup_test_store();

    store.set_json("gone_soon", &"value").expect("Write failed");
    store.remove("gone_soon").expect("Remove failed");
    assert!(store.get("gone_soon").expect("Query failed").is_none());
}

#[test]
fn test_remove_absent_key_is_ok() {
    let (_db, store) = setup_test_store();
    store.remove("never_existed").expect("Remove failed");
}

#[test]
fn test_shape_mismatch_is_an_error() {
    let (_db, store) = setup_test_store();

    store.set_json("shape", &"a string").expect("Write failed");
    let result: Result<Option<Blob>, _> = store.get_json("shape");
    assert!(result.is_err());
}

#[test]
fn test_keys_are_independent() {
    let (_db, store) = setup_test_store();

    store.set_json("one", &1u32).expect("Write failed");
    store.set_json("two", &2u32).expect("Write failed");
    store.remove("one").expect("Remove failed");

    let two: Option<u32> = store.get_json("two").expect("Read failed");
    assert_eq!(two, Some(2));
}
