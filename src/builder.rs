use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::CatalogClient;
use crate::config::JournalConfig;
use crate::error::JournalError;
use crate::journal::Journal;
use crate::store::{FileStore, KeyValueStore};

/// Builder for configuring and constructing a [`Journal`]
#[derive(Default)]
pub struct JournalBuilder {
    data_dir: Option<PathBuf>,
    store: Option<Arc<dyn KeyValueStore>>,
    base_url: Option<String>,
    auth_token: Option<String>,
    timeout: Option<Duration>,
}

impl JournalBuilder {
    /// Keep journal state in files under `dir`
    ///
    /// # Example
    /// ```
    /// use coffee_journal::Journal;
    ///
    /// let builder = Journal::builder().data_dir("/data/coffee-journal");
    /// ```
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Use a custom key-value store instead of the file-backed default
    ///
    /// # Example
    /// ```
    /// use std::sync::Arc;
    /// use coffee_journal::{Journal, MemoryStore};
    ///
    /// let builder = Journal::builder().store(Arc::new(MemoryStore::new()));
    /// ```
    pub fn store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Override the catalog base URL (tests, proxies)
    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Bearer token used when publishing new coffees
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set a timeout for catalog requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Seed the builder from a loaded [`JournalConfig`]
    ///
    /// # Example
    /// ```no_run
    /// use coffee_journal::{Journal, JournalConfig};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = JournalConfig::load()?;
    /// let journal = Journal::from_config(&config).build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn config(mut self, config: &JournalConfig) -> Self {
        self.base_url = Some(config.api.base_url.clone());
        self.auth_token = config.api.auth_token.clone();
        self.timeout = Some(Duration::from_secs(config.api.timeout));
        if let Some(dir) = &config.storage.data_dir {
            self.data_dir = Some(PathBuf::from(dir));
        }
        self
    }

    /// Build the journal
    ///
    /// # Errors
    /// Returns `JournalError::BuilderError` if no storage location was
    /// specified via `.data_dir()`, `.store()`, or config.
    pub fn build(self) -> Result<Journal, JournalError> {
        let store: Arc<dyn KeyValueStore> = match (self.store, self.data_dir) {
            (Some(store), _) => store,
            (None, Some(dir)) => Arc::new(FileStore::new(dir)),
            (None, None) => {
                return Err(JournalError::BuilderError(
                    "No storage specified. Use .data_dir() or .store()".to_string(),
                ))
            }
        };

        let mut catalog = match self.base_url {
            Some(url) => CatalogClient::with_base_url(url, self.timeout),
            None => CatalogClient::new(self.timeout),
        };
        if let Some(token) = self.auth_token {
            catalog = catalog.auth_token(token);
        }

        Ok(Journal::new(store, catalog))
    }
}

impl Journal {
    /// Shorthand for `Journal::builder().config(config)`
    pub fn from_config(config: &JournalConfig) -> JournalBuilder {
        Journal::builder().config(config)
    }
}
