//! History Entry Model
//!
//! Represents a single submitted command together with the result computed
//! for it at submission time. Entries are immutable once created: the
//! history sequence is append-only, and clearing replaces the sequence
//! wholesale rather than editing individual entries. Storing the computed
//! result keeps rendering pure; side-effecting commands are never re-run
//! when the transcript is redrawn.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::CommandResult;

/// A single submitted command with its computed result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier for the entry
    pub id: String,

    /// The command line as submitted
    pub command: String,

    /// Result computed when the command was submitted
    pub result: CommandResult,

    /// When the command was submitted
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create a new history entry
    pub fn new(command: impl Into<String>, result: CommandResult) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            command: command.into(),
            result,
            timestamp: Utc::now(),
        }
    }
}
