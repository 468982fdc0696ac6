//! Persisted key-value storage
//!
//! The session core never touches durable storage directly: components are
//! handed a [`KeyValueStore`] capability. [`MemoryStore`] backs tests and
//! ephemeral embedding; [`JsonFileStore`] is the durable single-file
//! implementation. Writes are synchronous and attempt-once, with no
//! batching and no retry.

pub mod file;
pub mod memory;

// Re-exports for convenience
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;

/// Well-known storage keys
pub mod keys {
    /// Serialized history entry sequence
    pub const TERMINAL_HISTORY: &str = "terminalHistory";

    /// Installed OS-version marker
    pub const OS_VERSION: &str = "osversion";

    /// Logged-in account name
    pub const USER: &str = "user";

    /// Stored credential
    pub const PASSWORD: &str = "password";

    /// Recovery-question answer. Key spelling matches existing stored data.
    pub const FORGOT_QUESTION: &str = "fogotQuestion";
}

/// String key-value storage capability
pub trait KeyValueStore: Send {
    /// Read a value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value (write-through, attempt-once)
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete a value. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Shared handle to a store, cloneable across the owning components
pub type SharedStore = Arc<Mutex<dyn KeyValueStore>>;

/// Wrap a store for shared ownership
pub fn shared<S: KeyValueStore + 'static>(store: S) -> SharedStore {
    Arc::new(Mutex::new(store))
}

/// Lock a shared store, recovering the guard if a panic poisoned it
pub fn lock(store: &SharedStore) -> MutexGuard<'_, dyn KeyValueStore + 'static> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
