mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use log::warn;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised by a key-value store backend
#[derive(Error, Debug)]
pub enum StoreError {
    /// Key cannot be mapped to a storage location
    #[error("Invalid store key: {0}")]
    InvalidKey(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistent string-keyed storage.
///
/// Values are whole blobs: `set` replaces everything stored under the key,
/// and a completed `set` survives a process restart. A key that was never
/// written reads as `None`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the blob stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Read the JSON list persisted under `key`, falling back to empty.
///
/// A missing key, a failed read, and an undecodable blob all read as the
/// empty list. The stored value is left alone until the next successful
/// write replaces it.
pub(crate) async fn read_list<T>(store: &dyn KeyValueStore, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
{
    let blob = match store.get(key).await {
        Ok(Some(blob)) => blob,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("Failed to read key '{}', treating as empty: {}", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str(&blob) {
        Ok(items) => items,
        Err(e) => {
            warn!("Undecodable blob under key '{}', treating as empty: {}", key, e);
            Vec::new()
        }
    }
}
