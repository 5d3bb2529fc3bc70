//! Shared test infrastructure for tally integration tests.
//!
//! Provides TestEnv helper for consistent test setup.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use tally::{Item, ItemStore, ManualClock};

/// Test environment: a store driven by a manual clock.
pub struct TestEnv {
    pub clock: ManualClock,
    pub store: ItemStore<ManualClock>,
}

impl TestEnv {
    /// Create a new test environment with an empty store.
    pub fn new() -> Self {
        let start: DateTime<Utc> = "2026-01-01T09:00:00Z".parse().expect("Failed to parse start time");
        let clock = ManualClock::new(start);
        let store = ItemStore::with_clock(clock.clone());
        Self { clock, store }
    }

    /// Add an item with no description.
    pub fn add_item(&mut self, title: &str) -> Item {
        self.store.add(title, "")
    }

    /// Add an item with a description.
    pub fn add_item_with_desc(&mut self, title: &str, description: &str) -> Item {
        self.store.add(title, description)
    }

    /// Complete an item.
    pub fn complete_item(&mut self, item: &Item) -> Item {
        self.store.complete(item.id).expect("Failed to complete item")
    }

    /// Move the clock forward.
    pub fn tick(&self, seconds: i64) {
        self.clock.advance(Duration::seconds(seconds));
    }

    /// Ids of all items, in store order.
    pub fn ids(&self) -> Vec<u64> {
        self.store.get_all().iter().map(|i| i.id).collect()
    }

    /// Assert the completed and pending views partition the collection.
    pub fn assert_partitioned(&self) {
        let completed: Vec<u64> = self.store.completed().iter().map(|i| i.id).collect();
        let pending: Vec<u64> = self.store.pending().iter().map(|i| i.id).collect();

        assert!(
            completed.iter().all(|id| !pending.contains(id)),
            "Completed {:?} and pending {:?} overlap",
            completed,
            pending
        );

        let mut union: Vec<u64> = completed.into_iter().chain(pending).collect();
        union.sort_unstable();
        let mut all = self.ids();
        all.sort_unstable();
        assert_eq!(union, all, "Completed and pending don't cover the collection");
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
