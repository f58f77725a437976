mod database;
mod sessions;

pub use database::Database;
pub use sessions::{
    local_today, upsert_session, ActivitySession, SessionLog, SessionStore, SESSIONS_KEY,
    SETTINGS_KEY,
};

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::StoreError;

/// The external key/value blob store: whole JSON strings in, whole JSON
/// strings out. Merging happens above this seam, never inside it.
pub trait BlobStore: Send {
    /// # Errors
    /// Returns a [`StoreError`] if the read fails.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// # Errors
    /// Returns a [`StoreError`] if the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory blob store for tests and ephemeral embeddings.
#[derive(Default)]
pub struct MemoryStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let blobs = self.blobs.lock().unwrap_or_else(|e| e.into_inner());
        Ok(blobs.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut blobs = self.blobs.lock().unwrap_or_else(|e| e.into_inner());
        blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Returns `~/.config/deskcycle[-dev]/` based on DESKCYCLE_ENV.
///
/// Set DESKCYCLE_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DESKCYCLE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("deskcycle-dev")
    } else {
        base_dir.join("deskcycle")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
