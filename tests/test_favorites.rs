use std::sync::Arc;

use coffee_journal::{Coffee, FavoriteOutcome, Journal, MemoryStore};
use tempfile::tempdir;

fn coffee(id: &str) -> Coffee {
    Coffee {
        id: id.to_string(),
        title: format!("Coffee {}", id),
        ..Default::default()
    }
}

/// Favoriting twice reports Added then AlreadyPresent and stores one entry
#[tokio::test]
async fn test_duplicate_favorite_reports_already_present() {
    let journal = Journal::builder()
        .store(Arc::new(MemoryStore::new()))
        .build()
        .unwrap();

    assert_eq!(
        journal.add_favorite(&coffee("A")).await.unwrap(),
        FavoriteOutcome::Added
    );
    assert_eq!(
        journal.add_favorite(&coffee("A")).await.unwrap(),
        FavoriteOutcome::AlreadyPresent
    );

    let favorites = journal.favorites().await;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].id, "A");
}

/// No favorites before the first add
#[tokio::test]
async fn test_favorites_start_empty() {
    let journal = Journal::builder()
        .store(Arc::new(MemoryStore::new()))
        .build()
        .unwrap();

    assert!(journal.favorites().await.is_empty());
}

/// Favorites keep the order they were added in
#[tokio::test]
async fn test_favorites_preserve_append_order() {
    let journal = Journal::builder()
        .store(Arc::new(MemoryStore::new()))
        .build()
        .unwrap();

    for id in ["3", "1", "2"] {
        journal.add_favorite(&coffee(id)).await.unwrap();
    }

    let ids: Vec<_> = journal.favorites().await.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, ["3", "1", "2"]);
}

/// A duplicate with a different payload is ignored, not upserted
#[tokio::test]
async fn test_duplicate_payload_change_is_ignored() {
    let journal = Journal::builder()
        .store(Arc::new(MemoryStore::new()))
        .build()
        .unwrap();

    journal.add_favorite(&coffee("A")).await.unwrap();

    let mut renamed = coffee("A");
    renamed.title = "Renamed".to_string();
    assert_eq!(
        journal.add_favorite(&renamed).await.unwrap(),
        FavoriteOutcome::AlreadyPresent
    );

    assert_eq!(journal.favorites().await[0].title, "Coffee A");
}

/// Favorites survive a new journal instance on the same data directory
#[tokio::test]
async fn test_favorites_persist_across_instances() {
    let dir = tempdir().unwrap();

    {
        let journal = Journal::builder().data_dir(dir.path()).build().unwrap();
        journal.add_favorite(&coffee("A")).await.unwrap();
        journal.add_favorite(&coffee("B")).await.unwrap();
    }

    let journal = Journal::builder().data_dir(dir.path()).build().unwrap();
    let ids: Vec<_> = journal.favorites().await.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, ["A", "B"]);
}

/// A corrupt favorites file reads as empty and the next add starts fresh
#[tokio::test]
async fn test_corrupt_file_falls_back_to_empty() {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("favorites.json"), "[{\"id\":").unwrap();

    let journal = Journal::builder().data_dir(dir.path()).build().unwrap();
    assert!(journal.favorites().await.is_empty());
    assert_eq!(
        journal.add_favorite(&coffee("A")).await.unwrap(),
        FavoriteOutcome::Added
    );
}

/// Recents and favorites live under separate keys and do not interfere
#[tokio::test]
async fn test_favorites_and_recents_are_independent() {
    let journal = Journal::builder()
        .store(Arc::new(MemoryStore::new()))
        .build()
        .unwrap();

    journal.add_favorite(&coffee("A")).await.unwrap();
    journal.record_view(&coffee("B")).await.unwrap();

    assert_eq!(journal.favorites().await.len(), 1);
    assert_eq!(journal.recently_viewed().await.len(), 1);
    assert_eq!(journal.favorites().await[0].id, "A");
    assert_eq!(journal.recently_viewed().await[0].id, "B");
}
