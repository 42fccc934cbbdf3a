use std::sync::Arc;

use log::warn;

use crate::builder::JournalBuilder;
use crate::catalog::CatalogClient;
use crate::error::JournalError;
use crate::favorites::{FavoriteOutcome, Favorites};
use crate::model::{Brew, Coffee, NewCoffee};
use crate::recents::Recents;
use crate::store::KeyValueStore;

/// The app-facing core: remote catalog plus local recents and favorites.
///
/// Construct one per process via [`Journal::builder`] and pass it to the
/// screens that need it; there is no global instance.
pub struct Journal {
    recents: Recents,
    favorites: Favorites,
    catalog: CatalogClient,
}

impl Journal {
    /// Creates a new builder for configuring a journal
    ///
    /// # Example
    /// ```no_run
    /// # use coffee_journal::Journal;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let journal = Journal::builder().data_dir("/tmp/coffee").build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> JournalBuilder {
        JournalBuilder::default()
    }

    pub(crate) fn new(store: Arc<dyn KeyValueStore>, catalog: CatalogClient) -> Self {
        Journal {
            recents: Recents::new(store.clone()),
            favorites: Favorites::new(store),
            catalog,
        }
    }

    /// Record a viewed coffee; returns the updated list, newest first.
    pub async fn record_view(&self, coffee: &Coffee) -> Result<Vec<Coffee>, JournalError> {
        self.recents.record_view(coffee).await
    }

    /// Recently viewed coffees, newest first.
    pub async fn recently_viewed(&self) -> Vec<Coffee> {
        self.recents.list().await
    }

    /// Mark a coffee as a favorite.
    pub async fn add_favorite(&self, coffee: &Coffee) -> Result<FavoriteOutcome, JournalError> {
        self.favorites.add(coffee).await
    }

    /// Favorited coffees in the order they were added.
    pub async fn favorites(&self) -> Vec<Coffee> {
        self.favorites.list().await
    }

    /// All catalog coffees of one brew style.
    pub async fn browse(&self, brew: Brew) -> Result<Vec<Coffee>, JournalError> {
        self.catalog.list(brew).await
    }

    /// Fetch one coffee from the catalog and note it as recently viewed.
    ///
    /// The fetched coffee is returned even when recording it locally fails:
    /// the screen keeps its data and the storage error is only logged.
    pub async fn view(&self, brew: Brew, id: &str) -> Result<Coffee, JournalError> {
        let coffee = self.catalog.get(brew, id).await?;

        if let Err(e) = self.recents.record_view(&coffee).await {
            warn!("Could not record coffee '{}' as recently viewed: {}", coffee.id, e);
        }

        Ok(coffee)
    }

    /// Publish a new coffee to the catalog.
    pub async fn publish(&self, draft: &NewCoffee) -> Result<Coffee, JournalError> {
        self.catalog.create(draft).await
    }
}
