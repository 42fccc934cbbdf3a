use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::error::JournalError;
use crate::model::{Brew, Coffee, NewCoffee};

/// Hosted catalog the companion app ships against
pub const DEFAULT_BASE_URL: &str = "https://sampleapis.assimilate.be";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the remote coffee catalog.
///
/// Reads are anonymous; creating a coffee requires a bearer token.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    auth_token: Option<String>,
}

impl CatalogClient {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, timeout)
    }

    /// Point the client at a different catalog host (tests, proxies).
    pub fn with_base_url(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(concat!("coffee-journal/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        CatalogClient {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token: None,
        }
    }

    /// Token sent as the bearer credential on create calls
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Fetch every coffee of one brew style.
    pub async fn list(&self, brew: Brew) -> Result<Vec<Coffee>, JournalError> {
        let url = format!("{}/coffee/{}", self.base_url, brew);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(JournalError::ApiError {
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    /// Fetch a single coffee by id.
    pub async fn get(&self, brew: Brew, id: &str) -> Result<Coffee, JournalError> {
        let url = format!("{}/coffee/{}/{}", self.base_url, brew, id);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(JournalError::ApiError {
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    /// Submit a new coffee; the catalog assigns and returns its id.
    pub async fn create(&self, draft: &NewCoffee) -> Result<Coffee, JournalError> {
        draft.validate()?;
        let token = self
            .auth_token
            .as_deref()
            .ok_or(JournalError::MissingAuthToken)?;

        let url = format!("{}/coffee/{}", self.base_url, draft.brew);
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", token))
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(JournalError::ApiError {
                status: response.status().as_u16(),
            });
        }

        let created: Coffee = response.json().await?;
        debug!("Catalog assigned id '{}' to '{}'", created.id, created.title);
        Ok(created)
    }
}
