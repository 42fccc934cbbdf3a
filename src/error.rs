use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during journal operations
#[derive(Error, Debug)]
pub enum JournalError {
    /// Failed to reach the coffee catalog
    #[error("Failed to fetch from catalog: {0}")]
    FetchError(#[from] reqwest::Error),

    /// Catalog answered with a non-success status
    #[error("Catalog returned HTTP {status}")]
    ApiError { status: u16 },

    /// Item failed validation at the store or API boundary
    #[error("Invalid item: {0}")]
    InvalidItem(String),

    /// Persistent store rejected a write
    #[error("Storage error: {0}")]
    StorageError(#[from] StoreError),

    /// A list could not be encoded for storage
    #[error("Failed to encode list for storage: {0}")]
    EncodeError(#[from] serde_json::Error),

    /// No auth token configured for catalog writes
    #[error("No auth token configured for catalog writes")]
    MissingAuthToken,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
