//! Unit tests for history persistence
//!
//! Every history mutation must write the full sequence through to the
//! store immediately, and a reopened log must restore exactly what was
//! persisted — including through the durable file-backed store.

use deskterm::history::HistoryLog;
use deskterm::models::{CommandResult, HistoryEntry};
use deskterm::storage::{self, keys, shared, JsonFileStore, MemoryStore};
use std::sync::Arc;

#[test]
fn test_every_append_is_persisted() {
    let store = shared(MemoryStore::new());
    let mut log = HistoryLog::open(Arc::clone(&store));

    for i in 0..3 {
        log.append(HistoryEntry::new(
            format!("send {}", i),
            CommandResult::success(i.to_string()),
        ));
        let raw = storage::lock(&store).get(keys::TERMINAL_HISTORY).unwrap();
        let persisted: Vec<HistoryEntry> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted.len(), i + 1);
    }
}

#[test]
fn test_clear_persists_empty_representation() {
    let store = shared(MemoryStore::new());
    let mut log = HistoryLog::open(Arc::clone(&store));
    log.append(HistoryEntry::new("version", CommandResult::success("v")));

    log.clear();

    let raw = storage::lock(&store).get(keys::TERMINAL_HISTORY).unwrap();
    assert_eq!(raw, "[]");
    assert!(log.all().is_empty());
}

#[test]
fn test_history_survives_file_store_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    {
        let store = shared(JsonFileStore::open(&path).unwrap());
        let mut log = HistoryLog::open(store);
        log.append(HistoryEntry::new(
            "send persisted",
            CommandResult::success("persisted"),
        ));
        log.append(HistoryEntry::new("bogus", CommandResult::failure("nope")));
    }

    let store = shared(JsonFileStore::open(&path).unwrap());
    let restored = HistoryLog::open(store);

    assert_eq!(restored.len(), 2);
    assert_eq!(restored.all()[0].command, "send persisted");
    assert!(restored.all()[0].result.is_success());
    assert_eq!(restored.all()[1].command, "bogus");
    assert!(restored.all()[1].result.is_failure());
}

#[test]
fn test_restored_entries_keep_results_and_timestamps() {
    let store = shared(MemoryStore::new());
    let entry = HistoryEntry::new("netstat", CommandResult::success("snapshot"));
    let expected_id = entry.id.clone();
    let expected_timestamp = entry.timestamp;

    {
        let mut log = HistoryLog::open(Arc::clone(&store));
        log.append(entry);
    }

    let restored = HistoryLog::open(store);
    assert_eq!(restored.all()[0].id, expected_id);
    assert_eq!(restored.all()[0].timestamp, expected_timestamp);
    assert_eq!(
        restored.all()[0].result,
        CommandResult::success("snapshot")
    );
}

#[test]
fn test_corrupt_history_key_yields_empty_log() {
    let store = shared(MemoryStore::with_entries([(
        keys::TERMINAL_HISTORY,
        "[{\"id\": truncated",
    )]));
    let log = HistoryLog::open(store);
    assert!(log.is_empty());
}
