use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::catalog::DEFAULT_BASE_URL;

/// Main journal configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct JournalConfig {
    /// Remote catalog settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Local storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Configuration for the remote coffee catalog
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the catalog API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token for catalog writes (can also be set via environment variable)
    pub auth_token: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            auth_token: None,
            timeout: default_timeout(),
        }
    }
}

/// Configuration for the local key-value store
#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// Directory holding the journal's data files
    pub data_dir: Option<String>,
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl JournalConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COFFEE__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COFFEE__API__AUTH_TOKEN
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with COFFEE__ prefix
/// 2. config.toml file in current directory
/// 3. Default values
///
/// Environment variable format: COFFEE__STORAGE__DATA_DIR
pub fn load_config() -> Result<JournalConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Environment variables with COFFEE_ prefix
        // Use double underscore for nested: COFFEE__API__AUTH_TOKEN
        .add_source(
            Environment::with_prefix("COFFEE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_default_values() {
        assert_eq!(default_base_url(), "https://sampleapis.assimilate.be");
        assert_eq!(default_timeout(), 30);
    }

    #[test]
    fn test_api_config_default() {
        let api = ApiConfig::default();
        assert_eq!(api.base_url, DEFAULT_BASE_URL);
        assert!(api.auth_token.is_none());
        assert_eq!(api.timeout, 30);
    }

    #[test]
    fn test_storage_config_default_has_no_dir() {
        let storage = StorageConfig::default();
        assert!(storage.data_dir.is_none());
    }

    #[test]
    fn test_load_config_without_file() {
        // Clear any environment variables that might interfere
        let keys_to_clear: Vec<String> = env::vars()
            .filter(|(k, _)| k.starts_with("COFFEE__"))
            .map(|(k, _)| k)
            .collect();

        for key in keys_to_clear {
            env::remove_var(&key);
        }

        let config = load_config().unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert!(config.storage.data_dir.is_none());
    }
}
