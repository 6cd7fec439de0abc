//! Tests for the journal, expedition log, badges, stats, and daily fact
//! layers over the key-value store.

use diesel::Connection;
use diesel::SqliteConnection;
use diesel_migrations::MigrationHarness;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::NamedTempFile;

use tembo_trails::{
    BadgeBook, DailyFact, ExpeditionKind, ExpeditionLog, ExpeditionStatus, Journal, KvStore,
    MIGRATIONS, MemoryStats, content,
};

fn setup_test_store() -> (NamedTempFile, KvStore) {
    let db_file = NamedTempFile::new().expect("Failed to create temp file");
    let db_path = db_file.path().to_str().expect("Invalid path").to_string();

    let mut conn = SqliteConnection::establish(&db_path).expect("Failed to connect");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Migrations failed");

    let store = KvStore::new(db_path).expect("Failed to create store");
    (db_file, store)
}

// ─────────────────────────────────────────────────────────────
//  Journal
// ─────────────────────────────────────────────────────────────

#[test]
fn test_journal_starts_empty() {
    let (_db, store) = setup_test_store();
    let journal = Journal::new(store);
    assert!(journal.entries().is_empty());
}

#[test]
fn test_journal_add_and_list() {
    let (_db, store) = setup_test_store();
    let journal = Journal::new(store);

    let entry = journal.add("Waterhole visit", "Saw a calf learning to drink.").expect("Add failed");
    assert_eq!(entry.title, "Waterhole visit");

    let entries = journal.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, entry.id);
}

#[test]
fn test_journal_blank_title_becomes_untitled() {
    let (_db, store) = setup_test_store();
    let journal = Journal::new(store);

    let entry = journal.add("   ", "body only").expect("Add failed");
    assert_eq!(entry.title, "Untitled Entry");
}

#[test]
fn test_journal_update_keeps_id_and_date() {
    let (_db, store) = setup_test_store();
    let journal = Journal::new(store);

    let entry = journal.add("Draft", "first pass").expect("Add failed");
    let updated = journal
        .update(&entry.id, "Final", "second pass")
        .expect("Update failed")
        .expect("Entry exists");

    assert_eq!(updated.id, entry.id);
    assert_eq!(updated.date, entry.date);
    assert_eq!(updated.title, "Final");
    assert_eq!(journal.entries().len(), 1);
}

#[test]
fn test_journal_update_missing_entry_is_none() {
    let (_db, store) = setup_test_store();
    let journal = Journal::new(store);
    assert!(journal.update("no-such-id", "t", "c").expect("Update failed").is_none());
}

#[test]
fn test_journal_delete() {
    let (_db, store) = setup_test_store();
    let journal = Journal::new(store);

    let entry = journal.add("Short lived", "").expect("Add failed");
    assert!(journal.delete(&entry.id).expect("Delete failed"));
    assert!(journal.entries().is_empty());
    assert!(!journal.delete(&entry.id).expect("Delete failed"));
}

// ─────────────────────────────────────────────────────────────
//  Expedition log
// ─────────────────────────────────────────────────────────────

#[test]
fn test_expedition_add_with_default_checklist() {
    let (_db, store) = setup_test_store();
    let log = ExpeditionLog::new(store);

    let expedition = log
        .add("Amboseli survey", ExpeditionKind::Real, "Amboseli", "3 days", vec!["Juma".to_string()], "")
        .expect("Add failed");

    assert_eq!(expedition.status, ExpeditionStatus::InProgress);
    assert_eq!(expedition.checklist.len(), 6);
    assert!(expedition.checklist.iter().all(|item| !item.completed));
    assert!(expedition.end_date.is_none());
}

#[test]
fn test_expedition_toggle_task() {
    let (_db, store) = setup_test_store();
    let log = ExpeditionLog::new(store);
    let expedition = log
        .add("Night tracking", ExpeditionKind::Simulation, "", "", Vec::new(), "")
        .expect("Add failed");

    assert_eq!(log.toggle_task(&expedition.id, 0).expect("Toggle failed"), Some(true));
    assert_eq!(log.toggle_task(&expedition.id, 0).expect("Toggle failed"), Some(false));
    assert_eq!(log.toggle_task(&expedition.id, 99).expect("Toggle failed"), None);
    assert_eq!(log.toggle_task("no-such-id", 0).expect("Toggle failed"), None);
}

#[test]
fn test_expedition_complete_stamps_end_date() {
    let (_db, store) = setup_test_store();
    let log = ExpeditionLog::new(store);
    let expedition = log
        .add("Wrap up", ExpeditionKind::Real, "", "", Vec::new(), "")
        .expect("Add failed");

    assert!(log.complete(&expedition.id).expect("Complete failed"));
    let listed = log.list();
    assert_eq!(listed[0].status, ExpeditionStatus::Completed);
    assert!(listed[0].end_date.is_some());

    // Already completed: nothing left to complete.
    assert!(!log.complete(&expedition.id).expect("Complete failed"));
}

#[test]
fn test_expedition_stats() {
    let (_db, store) = setup_test_store();
    let log = ExpeditionLog::new(store);

    let real = log.add("Real one", ExpeditionKind::Real, "", "", Vec::new(), "").expect("Add failed");
    log.add("Sim one", ExpeditionKind::Simulation, "", "", Vec::new(), "").expect("Add failed");
    log.complete(&real.id).expect("Complete failed");

    let stats = log.stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.real, 1);
    assert_eq!(stats.simulations, 1);
}

// ─────────────────────────────────────────────────────────────
//  Badges
// ─────────────────────────────────────────────────────────────

#[test]
fn test_badge_progress_starts_at_zero() {
    let (_db, store) = setup_test_store();
    let book = BadgeBook::new(store);

    let progress = book.progress();
    assert_eq!(progress.quizzes_taken, 0);
    assert!(progress.earned.is_empty());
}

#[test]
fn test_quiz_master_needs_five_perfect_scores() {
    let (_db, store) = setup_test_store();
    let book = BadgeBook::new(store);

    for _ in 0..4 {
        assert!(book.record_quiz(true).expect("Record failed").is_empty());
    }
    // An imperfect quiz counts as taken but not toward the badge.
    assert!(book.record_quiz(false).expect("Record failed").is_empty());

    let earned = book.record_quiz(true).expect("Record failed");
    assert_eq!(earned.len(), 1);
    assert_eq!(earned[0].id, "quiz_master");

    // Earned once only.
    assert!(book.record_quiz(true).expect("Record failed").is_empty());
    let progress = book.progress();
    assert_eq!(progress.quizzes_taken, 7);
    assert_eq!(progress.perfect_quizzes, 6);
}

#[test]
fn test_memory_expert_needs_ten_wins() {
    let (_db, store) = setup_test_store();
    let book = BadgeBook::new(store);

    for _ in 0..9 {
        assert!(book.record_memory_win().expect("Record failed").is_empty());
    }
    let earned = book.record_memory_win().expect("Record failed");
    assert_eq!(earned.len(), 1);
    assert_eq!(earned[0].id, "memory_expert");
}

#[test]
fn test_journal_keeper_needs_fifteen_entries() {
    let (_db, store) = setup_test_store();
    let book = BadgeBook::new(store);

    for _ in 0..14 {
        assert!(book.record_journal_entry().expect("Record failed").is_empty());
    }
    let earned = book.record_journal_entry().expect("Record failed");
    assert_eq!(earned.len(), 1);
    assert_eq!(earned[0].id, "journal_keeper");
}

// ─────────────────────────────────────────────────────────────
//  Memory stats
// ─────────────────────────────────────────────────────────────

#[test]
fn test_memory_stats_record_and_best() {
    let (_db, store) = setup_test_store();
    let stats = MemoryStats::new(store);

    assert!(stats.results().is_empty());
    assert!(stats.best_moves().is_none());

    stats.record_win(8, 14).expect("Record failed");
    stats.record_win(8, 11).expect("Record failed");
    stats.record_win(4, 12).expect("Record failed");

    assert_eq!(stats.results().len(), 3);
    assert_eq!(stats.best_moves(), Some(11));
}

// ─────────────────────────────────────────────────────────────
//  Daily fact
// ─────────────────────────────────────────────────────────────

#[test]
fn test_daily_fact_is_stable_within_a_day() {
    let (_db, store) = setup_test_store();
    let daily = DailyFact::new(store);
    let mut rng = StdRng::seed_from_u64(1);

    let first = daily.fact_of_the_day(&mut rng);
    let second = daily.fact_of_the_day(&mut rng);
    assert_eq!(first.id, second.id);
    assert!(content::fact_by_id(first.id).is_some());
}
