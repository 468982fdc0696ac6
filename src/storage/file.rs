//! Durable JSON-backed key-value store
//!
//! A single-file store holding one flat string map. The file is read once
//! when the store opens; every mutation rewrites the whole file
//! synchronously. There is no batching and no retry.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::storage::KeyValueStore;

/// Default store file name
const DEFAULT_STORE_FILE: &str = ".deskterm_store.json";

/// Single-file JSON store
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path to the store file
    path: PathBuf,
    /// In-memory view of the stored map
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open a store at the given path, loading any existing content.
    /// A missing file is treated as an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path).map_err(|e| Error::StoreLoadFailed {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            serde_json::from_str(&raw).map_err(|e| Error::StoreLoadFailed {
                path: path.clone(),
                reason: e.to_string(),
            })?
        } else {
            HashMap::new()
        };
        Ok(Self { path, entries })
    }

    /// Open the store at the default per-user location
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Default per-user store location
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Other("Could not find home directory".to_string()))?;
        Ok(home.join(DEFAULT_STORE_FILE))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the whole map to disk
    fn flush(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, raw).map_err(|e| Error::StoreWriteFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush()
    }
}
