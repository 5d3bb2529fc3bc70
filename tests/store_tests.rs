//! Integration tests for store operations.
//!
//! Tests id assignment, timestamps, ordering and the completed/pending views.

mod common;

use common::TestEnv;
use tally::{ItemPatch, Stats, StoreBatchExt};

// =============================================================================
// Id Assignment
// =============================================================================

#[test]
fn test_ids_start_at_one_and_increase() {
    let mut env = TestEnv::new();

    let ids: Vec<u64> = (0..5).map(|i| env.add_item(&format!("Task {}", i)).id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_ids_survive_interleaved_deletes() {
    let mut env = TestEnv::new();

    let mut assigned = Vec::new();
    for round in 0..4 {
        let a = env.add_item(&format!("Keep {}", round));
        let b = env.add_item(&format!("Drop {}", round));
        env.store.delete(b.id).unwrap();
        assigned.push(a.id);
        assigned.push(b.id);
    }

    assert_eq!(assigned, (1..=8).collect::<Vec<u64>>());
    assert_eq!(env.ids(), vec![1, 3, 5, 7]);
}

#[test]
fn test_ids_survive_clear_completed() {
    let mut env = TestEnv::new();

    let a = env.add_item("A");
    env.complete_item(&a);
    env.store.clear_completed();

    assert_eq!(env.add_item("B").id, 2);
}

// =============================================================================
// Get
// =============================================================================

#[test]
fn test_get_after_add() {
    let mut env = TestEnv::new();

    let item = env.add_item_with_desc("Title", "Description");
    let retrieved = env.store.get(item.id).unwrap();

    assert_eq!(retrieved.title, "Title");
    assert_eq!(retrieved.description, "Description");
    assert!(!retrieved.completed);
}

#[test]
fn test_get_all_insertion_order() {
    let mut env = TestEnv::new();

    env.add_item("First");
    env.add_item("Second");
    env.add_item("Third");

    let titles: Vec<&str> = env.store.get_all().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

// =============================================================================
// Timestamps
// =============================================================================

#[test]
fn test_add_sets_both_timestamps() {
    let mut env = TestEnv::new();

    let item = env.add_item("Task");
    assert_eq!(item.created_at, item.updated_at);
}

#[test]
fn test_update_preserves_id_and_created_at() {
    let mut env = TestEnv::new();

    let item = env.add_item("Task");
    env.tick(30);

    let updated = env
        .store
        .update(item.id, ItemPatch::new().title("Renamed").completed(true))
        .unwrap();

    assert_eq!(updated.id, item.id);
    assert_eq!(updated.created_at, item.created_at);
    assert!(updated.updated_at > item.updated_at);
}

#[test]
fn test_updated_at_never_decreases() {
    let mut env = TestEnv::new();

    let item = env.add_item("Task");
    let mut previous = item.updated_at;

    for step in [10, 0, -20, 5, -1] {
        env.tick(step);
        let updated = env.store.update(item.id, ItemPatch::new()).unwrap();
        assert!(updated.updated_at >= previous);
        assert!(updated.updated_at >= updated.created_at);
        previous = updated.updated_at;
    }
}

#[test]
fn test_complete_refreshes_updated_at() {
    let mut env = TestEnv::new();

    let item = env.add_item("Task");
    env.tick(60);
    let completed = env.complete_item(&item);

    assert!(completed.completed);
    assert_eq!(completed.updated_at - item.updated_at, chrono::Duration::seconds(60));
}

// =============================================================================
// Delete
// =============================================================================

#[test]
fn test_delete_returns_stored_item() {
    let mut env = TestEnv::new();

    let item = env.add_item_with_desc("Task", "details");
    env.tick(5);
    let stored = env.complete_item(&item);

    let deleted = env.store.delete(item.id).unwrap();
    assert_eq!(deleted, stored);
    assert!(env.store.get(item.id).is_none());
}

// =============================================================================
// Completed / Pending Views
// =============================================================================

#[test]
fn test_views_partition_collection() {
    let mut env = TestEnv::new();
    env.assert_partitioned();

    let items: Vec<_> = (0..6).map(|i| env.add_item(&format!("Task {}", i))).collect();
    env.assert_partitioned();

    env.complete_item(&items[1]);
    env.complete_item(&items[4]);
    env.assert_partitioned();

    env.store.update(items[1].id, ItemPatch::new().completed(false)).unwrap();
    env.store.delete(items[2].id).unwrap();
    env.assert_partitioned();

    env.store.clear_completed();
    env.assert_partitioned();
}

#[test]
fn test_uncomplete_moves_back_to_pending() {
    let mut env = TestEnv::new();

    let item = env.add_item("Task");
    env.complete_item(&item);
    env.store.update(item.id, ItemPatch::new().completed(false)).unwrap();

    assert!(env.store.completed().is_empty());
    assert_eq!(env.store.pending().len(), 1);
}

// =============================================================================
// Stats
// =============================================================================

#[test]
fn test_empty_store_stats() {
    let env = TestEnv::new();

    assert_eq!(
        env.store.stats(),
        Stats {
            total: 0,
            completed: 0,
            pending: 0,
            completion_rate: "0%".to_string(),
        }
    );
}

#[test]
fn test_complete_and_clear_scenario() {
    let mut env = TestEnv::new();

    let a = env.add_item("A");
    let b = env.add_item("B");
    assert_eq!((a.id, b.id), (1, 2));

    env.store.complete(1).unwrap();

    assert_eq!(
        env.store.stats(),
        Stats {
            total: 2,
            completed: 1,
            pending: 1,
            completion_rate: "50.00%".to_string(),
        }
    );

    let cleared = env.store.clear_completed();
    assert_eq!(cleared.len(), 1);
    assert_eq!(cleared[0].id, 1);
    assert_eq!(env.ids(), vec![2]);
}

#[test]
fn test_stats_after_batch() {
    let mut env = TestEnv::new();

    for i in 0..3 {
        env.add_item(&format!("Task {}", i));
    }
    env.store.batch_complete(&[1, 2, 3]);

    let stats = env.store.stats();
    assert_eq!(stats.completed, 3);
    assert_eq!(stats.completion_rate, "100.00%");
}

#[test]
fn test_completion_rate_rounds_half_up() {
    let mut env = TestEnv::new();

    for i in 0..32 {
        env.add_item(&format!("Task {}", i));
    }
    env.store.complete(1).unwrap();

    let stats = env.store.stats();
    assert_eq!(stats.completion_rate, "3.13%");
    assert_eq!(stats.completed + stats.pending, stats.total);
}
