use std::sync::Arc;

use crate::error::JournalError;
use crate::model::Coffee;
use crate::store::{read_list, KeyValueStore};

/// Store key holding the recently viewed list
pub const RECENTLY_VIEWED_KEY: &str = "recentlyViewed";

/// How many coffees the recently viewed list keeps
pub const RECENT_CAPACITY: usize = 3;

/// Recency-ordered, de-duplicated list of the last few coffees viewed.
///
/// Newest entries sit at index 0 and the list never grows past
/// [`RECENT_CAPACITY`]. Viewing a coffee that is already listed leaves the
/// list untouched: the first view decides its position.
pub struct Recents {
    store: Arc<dyn KeyValueStore>,
    capacity: usize,
}

impl Recents {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Recents {
            store,
            capacity: RECENT_CAPACITY,
        }
    }

    /// Record that `coffee` was viewed and return the updated list.
    ///
    /// Repeated views of the same id are a no-op that skips the write.
    /// Concurrent calls against the same store are not coordinated; the
    /// last write wins.
    pub async fn record_view(&self, coffee: &Coffee) -> Result<Vec<Coffee>, JournalError> {
        coffee.validate()?;

        let mut list = self.list().await;
        if list.iter().any(|c| c.id == coffee.id) {
            return Ok(list);
        }

        list.insert(0, coffee.clone());
        list.truncate(self.capacity);

        let blob = serde_json::to_string(&list)?;
        self.store.set(RECENTLY_VIEWED_KEY, &blob).await?;
        Ok(list)
    }

    /// Current list, newest first. Missing or undecodable state reads as empty.
    pub async fn list(&self) -> Vec<Coffee> {
        read_list(self.store.as_ref(), RECENTLY_VIEWED_KEY).await
    }
}
