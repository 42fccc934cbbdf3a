//! Core library for a coffee recipe companion app.
//!
//! Wraps the remote coffee catalog and the two pieces of local state the
//! app keeps: a capped, de-duplicated list of recently viewed coffees and
//! an unbounded, de-duplicated favorites set. Both live as JSON blobs in an
//! injected [`KeyValueStore`], so hosts can swap the file-backed default
//! for whatever their platform provides.
//!
//! ```no_run
//! use coffee_journal::{Brew, Journal};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let journal = Journal::builder().data_dir("/data/coffee").build()?;
//!
//! let coffee = journal.view(Brew::Hot, "3").await?; // fetch + mark as recently viewed
//! journal.add_favorite(&coffee).await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod journal;
pub mod model;
pub mod recents;
pub mod store;

pub mod ffi;

pub use builder::JournalBuilder;
pub use catalog::CatalogClient;
pub use config::JournalConfig;
pub use error::JournalError;
pub use favorites::{FavoriteOutcome, Favorites, FAVORITES_KEY};
pub use journal::Journal;
pub use model::{Brew, Coffee, NewCoffee};
pub use recents::{Recents, RECENTLY_VIEWED_KEY, RECENT_CAPACITY};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

/// Record a viewed coffee under `data_dir` and return the updated list.
///
/// One-shot convenience over [`Journal`] for hosts that do not keep an
/// instance around between calls.
pub async fn record_view(data_dir: &str, coffee: &Coffee) -> Result<Vec<Coffee>, JournalError> {
    Journal::builder()
        .data_dir(data_dir)
        .build()?
        .record_view(coffee)
        .await
}

/// Recently viewed coffees stored under `data_dir`, newest first.
pub async fn recently_viewed(data_dir: &str) -> Result<Vec<Coffee>, JournalError> {
    Ok(Journal::builder()
        .data_dir(data_dir)
        .build()?
        .recently_viewed()
        .await)
}

/// Mark a coffee stored under `data_dir` as a favorite.
pub async fn add_favorite(
    data_dir: &str,
    coffee: &Coffee,
) -> Result<FavoriteOutcome, JournalError> {
    Journal::builder()
        .data_dir(data_dir)
        .build()?
        .add_favorite(coffee)
        .await
}

/// Favorited coffees stored under `data_dir`, oldest first.
pub async fn list_favorites(data_dir: &str) -> Result<Vec<Coffee>, JournalError> {
    Ok(Journal::builder()
        .data_dir(data_dir)
        .build()?
        .favorites()
        .await)
}
