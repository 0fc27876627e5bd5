use std::collections::BTreeSet;
use std::sync::{Arc, Barrier};
use std::thread;

use chrono::NaiveDate;
use rusqlite::Connection;
use tempfile::{tempdir, TempDir};

use moodlog_core::storage::{
    ConnectionProvider, FileConnectionProvider, MoodStore, NewMoodEntry, SaveOutcome,
    SqliteMoodStore,
};
use moodlog_core::MoodlogError;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn temp_store() -> (TempDir, SqliteMoodStore<FileConnectionProvider>) {
    let dir = tempdir().expect("tempdir");
    let store = SqliteMoodStore::open_path(dir.path().join("moodlog.db")).expect("open store");
    (dir, store)
}

fn row_count(store: &SqliteMoodStore<FileConnectionProvider>) -> i64 {
    let conn = Connection::open(store.provider().path()).expect("open raw connection");
    conn.query_row("SELECT COUNT(*) FROM moodentries", [], |row| row.get(0))
        .expect("count rows")
}

#[test]
fn test_create_then_get_by_date_returns_same_values() {
    let (_dir, store) = temp_store();
    let date = day(2024, 4, 10);

    let created = store
        .create(&NewMoodEntry::new(date, "Excited", "new bike", 4))
        .expect("create should succeed");
    let fetched = store
        .get_by_date(date)
        .expect("lookup should succeed")
        .expect("entry should exist");

    assert_eq!(fetched, created);
    assert_eq!(fetched.mood, "Excited");
    assert_eq!(fetched.gratitude, "new bike");
    assert_eq!(fetched.rating, 4);
}

#[test]
fn test_create_on_existing_date_fails_and_keeps_row() {
    let (_dir, store) = temp_store();
    let date = day(2024, 4, 11);
    let original = store
        .create(&NewMoodEntry::new(date, "Calm", "quiet morning", 3))
        .expect("create should succeed");

    let err = store
        .create(&NewMoodEntry::new(date, "Angry", "", 1))
        .expect_err("second create should fail");
    assert!(matches!(err, MoodlogError::DuplicateEntry(d) if d == date));

    let after = store.get_by_date(date).expect("lookup").expect("entry");
    assert_eq!(after, original);
    assert_eq!(row_count(&store), 1);
}

#[test]
fn test_upsert_twice_keeps_one_row_and_id() {
    let (_dir, store) = temp_store();
    let date = day(2024, 4, 12);

    let (first, outcome) = store
        .upsert(&NewMoodEntry::new(date, "Anxious", "friends", 2))
        .expect("first upsert");
    assert_eq!(outcome, SaveOutcome::Created);

    let (second, outcome) = store
        .upsert(&NewMoodEntry::new(date, "Happy", "it passed", 5))
        .expect("second upsert");
    assert_eq!(outcome, SaveOutcome::Updated);
    assert_eq!(second.id, first.id);
    assert_eq!(second.date, date);

    let stored = store.get_by_date(date).expect("lookup").expect("entry");
    assert_eq!(stored.id, first.id);
    assert_eq!(stored.mood, "Happy");
    assert_eq!(stored.gratitude, "it passed");
    assert_eq!(stored.rating, 5);
    assert_eq!(row_count(&store), 1);
}

#[test]
fn test_upsert_does_not_touch_other_dates() {
    let (_dir, store) = temp_store();
    let neighbour = store
        .create(&NewMoodEntry::new(day(2024, 4, 13), "Neutral", "", 3))
        .expect("create");

    store
        .upsert(&NewMoodEntry::new(day(2024, 4, 14), "Sad", "rain", 2))
        .expect("upsert");
    store
        .upsert(&NewMoodEntry::new(day(2024, 4, 14), "Calm", "rain stopped", 3))
        .expect("upsert");

    let unchanged = store
        .get_by_date(day(2024, 4, 13))
        .expect("lookup")
        .expect("entry");
    assert_eq!(unchanged, neighbour);
}

#[test]
fn test_get_by_date_missing_is_none() {
    let (_dir, store) = temp_store();
    assert!(store.get_by_date(day(2024, 1, 1)).expect("lookup").is_none());
}

#[test]
fn test_empty_gratitude_is_distinct_from_missing() {
    let (_dir, store) = temp_store();
    let date = day(2024, 1, 2);
    store
        .create(&NewMoodEntry::new(date, "Neutral", "", 3))
        .expect("create");

    let entry = store.get_by_date(date).expect("lookup");
    assert_eq!(entry.map(|e| e.gratitude), Some(String::new()));
}

#[test]
fn test_get_by_id() {
    let (_dir, store) = temp_store();
    let created = store
        .create(&NewMoodEntry::new(day(2024, 2, 1), "Happy", "cake", 5))
        .expect("create");

    let found = store.get_by_id(created.id).expect("lookup");
    assert_eq!(found, Some(created.clone()));
    assert!(store.get_by_id(created.id + 100).expect("lookup").is_none());
}

#[test]
fn test_delete_by_date_missing_is_noop() {
    let (_dir, store) = temp_store();
    store
        .create(&NewMoodEntry::new(day(2024, 3, 3), "Calm", "", 3))
        .expect("create");

    let removed = store
        .delete_by_date(day(2024, 3, 4))
        .expect("delete of a missing date should succeed");
    assert!(!removed);
    assert_eq!(store.list_all().expect("list").len(), 1);
}

#[test]
fn test_delete_by_date_removes_entry() {
    let (_dir, store) = temp_store();
    let date = day(2024, 3, 5);
    store
        .create(&NewMoodEntry::new(date, "Sad", "", 2))
        .expect("create");

    assert!(store.delete_by_date(date).expect("delete"));
    assert!(store.get_by_date(date).expect("lookup").is_none());
}

#[test]
fn test_delete_by_id_missing_is_not_found() {
    let (_dir, store) = temp_store();
    let err = store.delete_by_id(42).expect_err("delete should fail");
    assert!(matches!(err, MoodlogError::NotFound(42)));
}

#[test]
fn test_delete_by_id_removes_entry() {
    let (_dir, store) = temp_store();
    let created = store
        .create(&NewMoodEntry::new(day(2024, 3, 6), "Angry", "", 1))
        .expect("create");

    store.delete_by_id(created.id).expect("delete");
    assert!(store.get_by_id(created.id).expect("lookup").is_none());

    let err = store.delete_by_id(created.id).expect_err("second delete");
    assert!(matches!(err, MoodlogError::NotFound(_)));
}

#[test]
fn test_all_dates_and_list_all() {
    let (_dir, store) = temp_store();
    let dates = [day(2024, 1, 1), day(2024, 1, 2), day(2024, 1, 5)];
    for date in dates {
        store
            .create(&NewMoodEntry::new(date, "Happy", "", 4))
            .expect("create");
    }

    let expected: BTreeSet<NaiveDate> = dates.into_iter().collect();
    assert_eq!(store.all_dates().expect("dates"), expected);

    let entries = store.list_all().expect("list");
    assert_eq!(entries.len(), 3);
    let listed: BTreeSet<NaiveDate> = entries.iter().map(|e| e.date).collect();
    assert_eq!(listed, expected);
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let (_dir, store) = temp_store();
    let first = store
        .create(&NewMoodEntry::new(day(2024, 7, 1), "Calm", "", 3))
        .expect("create");
    store.delete_by_id(first.id).expect("delete");

    let second = store
        .create(&NewMoodEntry::new(day(2024, 7, 1), "Calm", "", 3))
        .expect("create");
    assert!(second.id > first.id);
}

#[test]
fn test_mood_is_free_text() {
    let (_dir, store) = temp_store();
    let date = day(2024, 7, 2);
    store
        .create(&NewMoodEntry::new(date, "Bittersweet", "", 9))
        .expect("store does not validate mood or rating");

    let entry = store.get_by_date(date).expect("lookup").expect("entry");
    assert_eq!(entry.mood, "Bittersweet");
    assert_eq!(entry.rating, 9);
}

#[test]
fn test_day_scenario() {
    let (_dir, store) = temp_store();
    let date = day(2024, 3, 1);

    let created = store
        .create(&NewMoodEntry::new(date, "Happy", "sunshine", 5))
        .expect("create");
    let entry = store.get_by_date(date).expect("lookup").expect("entry");
    assert_eq!(
        (entry.mood.as_str(), entry.gratitude.as_str(), entry.rating),
        ("Happy", "sunshine", 5)
    );

    let err = store
        .create(&NewMoodEntry::new(date, "Sad", "", 1))
        .expect_err("duplicate create");
    assert!(matches!(err, MoodlogError::DuplicateEntry(_)));

    store
        .upsert(&NewMoodEntry::new(date, "Sad", "", 1))
        .expect("upsert");
    let entry = store.get_by_date(date).expect("lookup").expect("entry");
    assert_eq!(
        (entry.mood.as_str(), entry.gratitude.as_str(), entry.rating),
        ("Sad", "", 1)
    );
    assert_eq!(entry.id, created.id);

    store.delete_by_date(date).expect("delete");
    assert!(store.get_by_date(date).expect("lookup").is_none());
}

#[test]
fn test_dates_past_year_9999_are_invalid() {
    let (_dir, store) = temp_store();
    store
        .create(&NewMoodEntry::new(day(2024, 1, 1), "Happy", "", 4))
        .expect("create");

    let err = store
        .create(&NewMoodEntry::new(day(10000, 1, 1), "Calm", "", 3))
        .expect_err("year 10000 has no sortable key");
    assert!(matches!(err, MoodlogError::InvalidDate(_)));
    assert_eq!(row_count(&store), 1);

    assert!(matches!(
        store.list_between(day(2024, 1, 1), day(10000, 12, 31)),
        Err(MoodlogError::InvalidDate(_))
    ));
    let listed = store
        .list_between(day(2024, 1, 1), day(9999, 12, 31))
        .expect("in-range list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].date, day(2024, 1, 1));

    assert!(matches!(
        store.get_by_date(day(10000, 1, 1)),
        Err(MoodlogError::InvalidDate(_))
    ));
}

#[test]
fn test_concurrent_creates_for_same_date_insert_once() {
    let (_dir, store) = temp_store();
    let store = Arc::new(store);
    let date = day(2024, 8, 1);
    let workers = 8;
    let barrier = Arc::new(Barrier::new(workers));

    let handles: Vec<_> = (0..workers)
        .map(|i| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.create(&NewMoodEntry::new(date, format!("mood-{}", i), "", 3))
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("worker should not panic"))
        .collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    for result in results.iter().filter(|r| r.is_err()) {
        assert!(matches!(result, Err(MoodlogError::DuplicateEntry(_))));
    }
    assert_eq!(row_count(&store), 1);
}

#[test]
fn test_concurrent_upserts_for_same_date_keep_one_row() {
    let (_dir, store) = temp_store();
    let store = Arc::new(store);
    let date = day(2024, 8, 2);
    let workers = 8;
    let barrier = Arc::new(Barrier::new(workers));

    let handles: Vec<_> = (0..workers)
        .map(|i| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.upsert(&NewMoodEntry::new(date, "Calm", format!("note {}", i), 3))
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        let (_, outcome) = handle
            .join()
            .expect("worker should not panic")
            .expect("upsert should succeed");
        if outcome == SaveOutcome::Created {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(row_count(&store), 1);
}

struct UnreachableProvider;

impl ConnectionProvider for UnreachableProvider {
    fn connect(&self) -> moodlog_core::Result<Connection> {
        Err(MoodlogError::StorageUnavailable(
            "store is offline".to_string(),
        ))
    }
}

#[test]
fn test_unreachable_store_is_storage_unavailable() {
    let err = SqliteMoodStore::open(UnreachableProvider)
        .err()
        .expect("open should fail");
    assert!(matches!(err, MoodlogError::StorageUnavailable(ref m) if m == "store is offline"));
}

#[test]
fn test_store_fails_after_file_is_corrupted() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("moodlog.db");
    std::fs::write(&path, "not a sqlite database\n".repeat(256)).expect("write garbage");

    let err = SqliteMoodStore::open_path(&path)
        .err()
        .expect("open should fail");
    assert!(matches!(err, MoodlogError::StorageUnavailable(_)));
}
