use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::JournalError;

/// Brew style, mirroring the two catalog endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brew {
    Hot,
    Iced,
}

impl Brew {
    /// Path segment used by the catalog API
    pub fn as_str(&self) -> &'static str {
        match self {
            Brew::Hot => "hot",
            Brew::Iced => "iced",
        }
    }
}

impl std::fmt::Display for Brew {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coffee record from the catalog.
///
/// The journal only ever inspects `id`; every other field is carried
/// opaquely and preserved round-trip through storage, including fields
/// this library does not know about (kept in `extra`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Coffee {
    /// Unique identifier assigned by the catalog
    #[serde(deserialize_with = "id_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Image URL, when the catalog has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub brew: Option<Brew>,
    /// Fields the API sends that this library does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Coffee {
    /// Check that this record can be keyed before it touches storage.
    pub fn validate(&self) -> Result<(), JournalError> {
        if self.id.trim().is_empty() {
            return Err(JournalError::InvalidItem(
                "Coffee id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A coffee draft submitted to the catalog; the server assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewCoffee {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub brew: Brew,
}

impl NewCoffee {
    pub fn new(title: impl Into<String>, brew: Brew) -> Self {
        NewCoffee {
            title: title.into(),
            description: None,
            ingredients: Vec::new(),
            image: None,
            brew,
        }
    }

    /// Check the draft before it is sent to the catalog.
    ///
    /// The brew style is already guaranteed by the type; only the title can
    /// arrive empty from a form.
    pub fn validate(&self) -> Result<(), JournalError> {
        if self.title.trim().is_empty() {
            return Err(JournalError::InvalidItem(
                "Coffee title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// The catalog is inconsistent about id types: listings carry numbers while
/// created records carry strings. Normalize both to a string.
fn id_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
