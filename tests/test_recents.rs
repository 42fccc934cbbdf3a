use std::sync::Arc;

use coffee_journal::{Coffee, Journal, MemoryStore, RECENT_CAPACITY};
use tempfile::tempdir;

fn coffee(id: &str) -> Coffee {
    Coffee {
        id: id.to_string(),
        title: format!("Coffee {}", id),
        ..Default::default()
    }
}

/// Any sequence of views keeps the list at or under capacity with unique ids
#[tokio::test]
async fn test_views_never_exceed_capacity_or_duplicate() {
    let journal = Journal::builder()
        .store(Arc::new(MemoryStore::new()))
        .build()
        .unwrap();

    let ids = ["1", "2", "3", "2", "4", "1", "5", "5", "6"];
    for id in ids {
        let list = journal.record_view(&coffee(id)).await.unwrap();

        assert!(list.len() <= RECENT_CAPACITY);
        let mut seen: Vec<_> = list.iter().map(|c| c.id.clone()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), list.len(), "duplicate id after viewing {}", id);
    }
}

/// Viewing four coffees leaves the newest three, newest first
#[tokio::test]
async fn test_fourth_view_evicts_oldest() {
    let journal = Journal::builder()
        .store(Arc::new(MemoryStore::new()))
        .build()
        .unwrap();

    for id in ["1", "2", "3", "4"] {
        journal.record_view(&coffee(id)).await.unwrap();
    }

    let ids: Vec<_> = journal
        .recently_viewed()
        .await
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, ["4", "3", "2"]);
}

/// A repeat view neither reorders nor duplicates: first view wins position
#[tokio::test]
async fn test_repeat_view_is_a_no_op() {
    let journal = Journal::builder()
        .store(Arc::new(MemoryStore::new()))
        .build()
        .unwrap();

    journal.record_view(&coffee("1")).await.unwrap();
    journal.record_view(&coffee("2")).await.unwrap();
    let after_repeat = journal.record_view(&coffee("1")).await.unwrap();

    let ids: Vec<_> = after_repeat.into_iter().map(|c| c.id).collect();
    assert_eq!(ids, ["1", "2"]);
}

/// Back-to-back identical views return identical lists
#[tokio::test]
async fn test_record_view_is_idempotent() {
    let journal = Journal::builder()
        .store(Arc::new(MemoryStore::new()))
        .build()
        .unwrap();

    let once = journal.record_view(&coffee("9")).await.unwrap();
    let twice = journal.record_view(&coffee("9")).await.unwrap();

    let once_ids: Vec<_> = once.into_iter().map(|c| c.id).collect();
    let twice_ids: Vec<_> = twice.into_iter().map(|c| c.id).collect();
    assert_eq!(once_ids, twice_ids);
}

/// The list survives a new journal instance on the same data directory
#[tokio::test]
async fn test_recents_persist_across_instances() {
    let dir = tempdir().unwrap();

    {
        let journal = Journal::builder().data_dir(dir.path()).build().unwrap();
        journal.record_view(&coffee("1")).await.unwrap();
        journal.record_view(&coffee("2")).await.unwrap();
    }

    let journal = Journal::builder().data_dir(dir.path()).build().unwrap();
    let ids: Vec<_> = journal
        .recently_viewed()
        .await
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, ["2", "1"]);
}

/// A hand-corrupted data file reads as an empty list and is replaced on the
/// next view instead of failing the caller
#[tokio::test]
async fn test_corrupt_file_falls_back_to_empty() {
    let _ = env_logger::builder().is_test(true).try_init();

    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("recentlyViewed.json"), "u{ not json").unwrap();

    let journal = Journal::builder().data_dir(dir.path()).build().unwrap();
    assert!(journal.recently_viewed().await.is_empty());

    let list = journal.record_view(&coffee("1")).await.unwrap();
    assert_eq!(list.len(), 1);

    // The replacement blob is decodable again
    let journal = Journal::builder().data_dir(dir.path()).build().unwrap();
    assert_eq!(journal.recently_viewed().await.len(), 1);
}
