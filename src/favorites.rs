use std::sync::Arc;

use crate::error::JournalError;
use crate::model::Coffee;
use crate::store::{read_list, KeyValueStore};

/// Store key holding the favorites set
pub const FAVORITES_KEY: &str = "favorites";

/// Outcome of a favorite request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteOutcome {
    /// The coffee was appended to the set
    Added,
    /// A coffee with this id was already favorited; storage untouched
    AlreadyPresent,
}

/// Append-ordered, de-duplicated, unbounded set of favorited coffees.
pub struct Favorites {
    store: Arc<dyn KeyValueStore>,
}

impl Favorites {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Favorites { store }
    }

    /// Mark `coffee` as a favorite.
    ///
    /// A duplicate id reports [`FavoriteOutcome::AlreadyPresent`] instead of
    /// silently succeeding, and leaves the stored set untouched. Concurrent
    /// calls against the same store are not coordinated; the last write wins.
    pub async fn add(&self, coffee: &Coffee) -> Result<FavoriteOutcome, JournalError> {
        coffee.validate()?;

        let mut favorites = self.list().await;
        if favorites.iter().any(|c| c.id == coffee.id) {
            return Ok(FavoriteOutcome::AlreadyPresent);
        }

        favorites.push(coffee.clone());
        let blob = serde_json::to_string(&favorites)?;
        self.store.set(FAVORITES_KEY, &blob).await?;
        Ok(FavoriteOutcome::Added)
    }

    /// Every favorited coffee, oldest first. Missing or undecodable state
    /// reads as empty.
    pub async fn list(&self) -> Vec<Coffee> {
        read_list(self.store.as_ref(), FAVORITES_KEY).await
    }
}
