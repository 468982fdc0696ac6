//! Persistent command history
//!
//! Append-only log of submitted commands with their computed results.
//! Every mutation writes the full serialized sequence through to the
//! injected store immediately; there is no batching and no retry. A failed
//! write is logged and otherwise ignored.

use crate::error::{Error, Result};
use crate::models::HistoryEntry;
use crate::storage::{self, keys, SharedStore};

/// Persistent history log
pub struct HistoryLog {
    /// In-memory entries, oldest first
    entries: Vec<HistoryEntry>,
    /// Backing store handle
    store: SharedStore,
}

impl HistoryLog {
    /// Open the log, restoring any previously persisted sequence.
    /// Undecodable persisted history is logged and replaced by an empty log.
    pub fn open(store: SharedStore) -> Self {
        let entries = match Self::load(&store) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("failed to restore terminal history: {}", err);
                Vec::new()
            }
        };
        Self { entries, store }
    }

    fn load(store: &SharedStore) -> Result<Vec<HistoryEntry>> {
        let raw = match storage::lock(store).get(keys::TERMINAL_HISTORY) {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };
        serde_json::from_str(&raw).map_err(|e| Error::HistoryDecodeFailed {
            reason: e.to_string(),
        })
    }

    /// Append one entry and persist the full sequence
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
        self.persist();
    }

    /// Replace the sequence with an empty one and persist
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
    }

    /// All entries, oldest first
    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the full current sequence through to the store. Attempt-once.
    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.entries) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!("failed to serialize terminal history: {}", err);
                return;
            }
        };
        if let Err(err) = storage::lock(&self.store).set(keys::TERMINAL_HISTORY, &serialized) {
            warn!("failed to persist terminal history: {}", err);
        }
    }
}
