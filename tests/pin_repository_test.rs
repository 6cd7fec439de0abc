//! Tests for the sighting pin repository.

use chrono::{TimeZone, Utc};
use diesel::Connection;
use diesel::SqliteConnection;
use diesel_migrations::MigrationHarness;
use tempfile::NamedTempFile;

use tembo_trails::{MIGRATIONS, NewPin, PinRepository};

/// Creates a temporary database file with schema applied, returns the file
/// handle (must stay in scope to keep the file alive) and a ready repository.
fn setup_test_db() -> (NamedTempFile, PinRepository) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let mut conn = SqliteConnection::establish(&db_path).expect("Failed to connect");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Migrations failed");

    let repo = PinRepository::new(db_path).expect("Failed to create repository");
    (db_file, repo)
}

fn sample_pin(title: &str, herd_size: i32, hour: u32) -> NewPin {
    NewPin::at(
        -1.2921,
        36.8219,
        title.to_string(),
        "Grazing near the river.".to_string(),
        herd_size,
        Utc.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).single().expect("valid time"),
    )
}

#[test]
fn test_insert_pin() {
    let (_db, repo) = setup_test_db();

    let pin = repo
        .insert_pin(sample_pin("Rift valley herd", 7, 9))
        .expect("Insert failed");

    assert!(*pin.id() > 0);
    assert_eq!(pin.title(), "Rift valley herd");
    assert_eq!(*pin.herd_size(), 7);
}

#[test]
fn test_timestamp_round_trips_as_rfc3339() {
    let (_db, repo) = setup_test_db();
    let sighted = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).single().expect("valid time");

    let pin = repo
        .insert_pin(sample_pin("Timestamped", 3, 9))
        .expect("Insert failed");

    assert_eq!(pin.sighted_at_parsed().expect("Parse failed"), sighted);
}

#[test]
fn test_list_pins_most_recent_first() {
    let (_db, repo) = setup_test_db();
    repo.insert_pin(sample_pin("Morning", 4, 6)).expect("Insert failed");
    repo.insert_pin(sample_pin("Evening", 9, 18)).expect("Insert failed");

    let pins = repo.list_pins().expect("List failed");
    assert_eq!(pins.len(), 2);
    assert_eq!(pins[0].title(), "Evening");
    assert_eq!(pins[1].title(), "Morning");
}

#[test]
fn test_empty_table_lists_empty() {
    let (_db, repo) = setup_test_db();
    assert!(repo.list_pins().expect("List failed").is_empty());
}

#[test]
fn test_seed_demo_pins_on_empty_table() {
    let (_db, repo) = setup_test_db();

    assert_eq!(repo.seed_demo_pins().expect("Seed failed"), 2);
    let pins = repo.list_pins().expect("List failed");
    assert_eq!(pins.len(), 2);
    assert!(pins.iter().any(|p| p.title() == "Nairobi National Park"));
    assert!(pins.iter().any(|p| p.title() == "Lake Manyara"));
}

#[test]
fn test_seed_demo_pins_skips_populated_table() {
    let (_db, repo) = setup_test_db();
    repo.insert_pin(sample_pin("Existing", 2, 12)).expect("Insert failed");

    assert_eq!(repo.seed_demo_pins().expect("Seed failed"), 0);
    assert_eq!(repo.list_pins().expect("List failed").len(), 1);
}

#[test]
fn test_count_pins() {
    let (_db, repo) = setup_test_db();
    assert_eq!(repo.count_pins().expect("Count failed"), 0);
    repo.insert_pin(sample_pin("One", 1, 8)).expect("Insert failed");
    assert_eq!(repo.count_pins().expect("Count failed"), 1);
}
