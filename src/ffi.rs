//! UniFFI bindings for coffee-journal
//!
//! This module provides FFI-compatible types and functions for use with iOS
//! and Android hosts. It wraps the async Rust API with synchronous functions
//! that manage their own tokio runtime. Hosts stay stateless across calls:
//! every function takes the data directory the journal files live under.
//!
//! Catalog access is not exposed here; the original apps keep network calls
//! host-side and only share the persistence core.

use std::fmt;

use serde_json::Value;

use crate::{Brew, Coffee, FavoriteOutcome, JournalError};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible brew style
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiBrew {
    Hot,
    Iced,
}

impl From<FfiBrew> for Brew {
    fn from(brew: FfiBrew) -> Self {
        match brew {
            FfiBrew::Hot => Brew::Hot,
            FfiBrew::Iced => Brew::Iced,
        }
    }
}

impl From<Brew> for FfiBrew {
    fn from(brew: Brew) -> Self {
        match brew {
            Brew::Hot => FfiBrew::Hot,
            Brew::Iced => FfiBrew::Iced,
        }
    }
}

/// Key-value pair for fields the library does not interpret
///
/// `value` carries the JSON encoding of the field, so non-string payloads
/// survive the trip through the bindings.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiKeyValue {
    pub key: String,
    pub value: String,
}

/// FFI-compatible coffee record
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiCoffee {
    /// Unique identifier from the catalog
    pub id: String,
    pub title: String,
    /// Description (empty string if none)
    pub description: String,
    pub ingredients: Vec<String>,
    /// Image URL (empty string if none)
    pub image: String,
    pub brew: Option<FfiBrew>,
    /// Uninterpreted fields as JSON-encoded key-value pairs
    pub extra: Vec<FfiKeyValue>,
}

impl From<Coffee> for FfiCoffee {
    fn from(coffee: Coffee) -> Self {
        FfiCoffee {
            id: coffee.id,
            title: coffee.title,
            description: coffee.description.unwrap_or_default(),
            ingredients: coffee.ingredients,
            image: coffee.image.unwrap_or_default(),
            brew: coffee.brew.map(Into::into),
            extra: coffee
                .extra
                .into_iter()
                .map(|(key, value)| FfiKeyValue {
                    key,
                    value: value.to_string(),
                })
                .collect(),
        }
    }
}

impl From<FfiCoffee> for Coffee {
    fn from(ffi: FfiCoffee) -> Self {
        Coffee {
            id: ffi.id,
            title: ffi.title,
            description: if ffi.description.is_empty() {
                None
            } else {
                Some(ffi.description)
            },
            ingredients: ffi.ingredients,
            image: if ffi.image.is_empty() {
                None
            } else {
                Some(ffi.image)
            },
            brew: ffi.brew.map(Into::into),
            extra: ffi
                .extra
                .into_iter()
                .map(|kv| {
                    let value = serde_json::from_str(&kv.value)
                        .unwrap_or(Value::String(kv.value));
                    (kv.key, value)
                })
                .collect(),
        }
    }
}

/// FFI-compatible favorite outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiFavoriteOutcome {
    Added,
    AlreadyPresent,
}

impl From<FavoriteOutcome> for FfiFavoriteOutcome {
    fn from(outcome: FavoriteOutcome) -> Self {
        match outcome {
            FavoriteOutcome::Added => FfiFavoriteOutcome::Added,
            FavoriteOutcome::AlreadyPresent => FfiFavoriteOutcome::AlreadyPresent,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiJournalError {
    /// Failed to reach the coffee catalog
    FetchError { message: String },
    /// Catalog answered with a non-success status
    ApiError { status: u16 },
    /// Item failed boundary validation
    InvalidItem { message: String },
    /// Persistent store rejected a write
    StorageError { message: String },
    /// Invalid input or configuration
    ConfigError { message: String },
    /// Runtime error (tokio)
    RuntimeError { message: String },
}

impl fmt::Display for FfiJournalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiJournalError::FetchError { message } => write!(f, "Fetch error: {}", message),
            FfiJournalError::ApiError { status } => write!(f, "Catalog returned HTTP {}", status),
            FfiJournalError::InvalidItem { message } => write!(f, "Invalid item: {}", message),
            FfiJournalError::StorageError { message } => write!(f, "Storage error: {}", message),
            FfiJournalError::ConfigError { message } => write!(f, "Config error: {}", message),
            FfiJournalError::RuntimeError { message } => write!(f, "Runtime error: {}", message),
        }
    }
}

impl std::error::Error for FfiJournalError {}

impl From<JournalError> for FfiJournalError {
    fn from(err: JournalError) -> Self {
        match err {
            JournalError::FetchError(e) => FfiJournalError::FetchError {
                message: e.to_string(),
            },
            JournalError::ApiError { status } => FfiJournalError::ApiError { status },
            JournalError::InvalidItem(msg) => FfiJournalError::InvalidItem { message: msg },
            JournalError::StorageError(e) => FfiJournalError::StorageError {
                message: e.to_string(),
            },
            JournalError::EncodeError(e) => FfiJournalError::StorageError {
                message: e.to_string(),
            },
            JournalError::MissingAuthToken => FfiJournalError::ConfigError {
                message: "No auth token configured for catalog writes".to_string(),
            },
            JournalError::BuilderError(msg) => FfiJournalError::ConfigError { message: msg },
            JournalError::ConfigError(e) => FfiJournalError::ConfigError {
                message: e.to_string(),
            },
        }
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FfiJournalError> {
    tokio::runtime::Runtime::new().map_err(|e| FfiJournalError::RuntimeError {
        message: format!("Failed to create async runtime: {}", e),
    })
}

/// Record a viewed coffee
///
/// # Arguments
/// * `data_dir` - Directory the journal files live under
/// * `coffee` - The coffee that was viewed
///
/// # Returns
/// The updated recently viewed list, newest first
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn record_view(
    data_dir: String,
    coffee: FfiCoffee,
) -> Result<Vec<FfiCoffee>, FfiJournalError> {
    let rt = create_runtime()?;
    let list = rt.block_on(crate::record_view(&data_dir, &coffee.into()))?;
    Ok(list.into_iter().map(Into::into).collect())
}

/// List recently viewed coffees, newest first
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn recently_viewed(data_dir: String) -> Result<Vec<FfiCoffee>, FfiJournalError> {
    let rt = create_runtime()?;
    let list = rt.block_on(crate::recently_viewed(&data_dir))?;
    Ok(list.into_iter().map(Into::into).collect())
}

/// Mark a coffee as a favorite
///
/// # Returns
/// `Added` on first favoriting, `AlreadyPresent` when the id is already in
/// the set (storage is left untouched in that case)
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn add_favorite(
    data_dir: String,
    coffee: FfiCoffee,
) -> Result<FfiFavoriteOutcome, FfiJournalError> {
    let rt = create_runtime()?;
    let outcome = rt.block_on(crate::add_favorite(&data_dir, &coffee.into()))?;
    Ok(outcome.into())
}

/// List favorited coffees in the order they were added
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn list_favorites(data_dir: String) -> Result<Vec<FfiCoffee>, FfiJournalError> {
    let rt = create_runtime()?;
    let list = rt.block_on(crate::list_favorites(&data_dir))?;
    Ok(list.into_iter().map(Into::into).collect())
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ffi_coffee_conversion() {
        let coffee = Coffee {
            id: "12".to_string(),
            title: "Affogato".to_string(),
            description: Some("Espresso over ice cream".to_string()),
            ingredients: vec!["Espresso".to_string(), "Ice cream".to_string()],
            image: Some("https://example.com/affogato.jpg".to_string()),
            brew: Some(Brew::Iced),
            extra: [("rating".to_string(), serde_json::json!(4.5))]
                .into_iter()
                .collect(),
        };

        let ffi: FfiCoffee = coffee.clone().into();
        assert_eq!(ffi.id, "12");
        assert_eq!(ffi.description, "Espresso over ice cream");
        assert_eq!(ffi.extra.len(), 1);
        assert_eq!(ffi.extra[0].value, "4.5");

        let back: Coffee = ffi.into();
        assert_eq!(back.id, coffee.id);
        assert_eq!(back.description, coffee.description);
        assert_eq!(back.extra.get("rating"), coffee.extra.get("rating"));
    }

    #[test]
    fn test_ffi_coffee_empty_optionals() {
        let ffi = FfiCoffee {
            id: "1".to_string(),
            title: "Espresso".to_string(),
            description: String::new(),
            ingredients: vec![],
            image: String::new(),
            brew: None,
            extra: vec![],
        };

        let coffee: Coffee = ffi.into();
        assert!(coffee.description.is_none());
        assert!(coffee.image.is_none());
    }

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn test_record_view_and_favorites_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().to_string_lossy().to_string();

        let ffi = FfiCoffee {
            id: "7".to_string(),
            title: "Macchiato".to_string(),
            description: String::new(),
            ingredients: vec![],
            image: String::new(),
            brew: Some(FfiBrew::Hot),
            extra: vec![],
        };

        let recents = record_view(data_dir.clone(), ffi.clone()).unwrap();
        assert_eq!(recents.len(), 1);

        let outcome = add_favorite(data_dir.clone(), ffi.clone()).unwrap();
        assert_eq!(outcome, FfiFavoriteOutcome::Added);
        let outcome = add_favorite(data_dir.clone(), ffi).unwrap();
        assert_eq!(outcome, FfiFavoriteOutcome::AlreadyPresent);

        assert_eq!(list_favorites(data_dir).unwrap().len(), 1);
    }
}
