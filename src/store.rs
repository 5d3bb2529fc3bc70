//! High-level store API for tally.

use crate::clock::{Clock, SystemClock};
use crate::query::Filter;
use crate::types::{Item, ItemPatch, NewItem, Stats};
use chrono::{DateTime, Utc};
use log::{debug, warn};

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No item with this id.
    NotFound(u64),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "item with id {} not found", id),
        }
    }
}

impl std::error::Error for StoreError {}

/// Ordered in-memory collection of items.
///
/// Items keep insertion order. Ids start at 1 and are never reused, even
/// after the item holding one has been deleted.
#[derive(Debug)]
pub struct ItemStore<C: Clock = SystemClock> {
    items: Vec<Item>,
    next_id: u64,
    clock: C,
}

impl ItemStore<SystemClock> {
    /// Create an empty store on the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ItemStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ItemStore<C> {
    /// Create an empty store stamping items with the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            clock,
        }
    }

    /// Add a new item at the end of the collection.
    pub fn add(&mut self, title: &str, description: &str) -> Item {
        let now = self.clock.now();
        let id = self.next_id;
        self.next_id += 1;

        let item = Item {
            id,
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
            created_at: now,
            updated_at: now,
        };

        debug!("Added item {}: {}", id, item.title);
        self.items.push(item.clone());
        item
    }

    /// Add a new item from a `NewItem`.
    pub fn add_new(&mut self, spec: NewItem) -> Item {
        self.add(&spec.title, &spec.description)
    }

    /// All items in insertion order.
    pub fn get_all(&self) -> &[Item] {
        &self.items
    }

    /// Get an item by id.
    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Overwrite the fields supplied in `patch` and refresh `updated_at`.
    pub fn update(&mut self, id: u64, patch: ItemPatch) -> Result<Item, StoreError> {
        let now = self.clock.now();
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;

        item.apply(patch);
        item.updated_at = monotonic(item.updated_at, now, id);

        debug!("Updated item {}", id);
        Ok(item.clone())
    }

    /// Mark an item as completed.
    pub fn complete(&mut self, id: u64) -> Result<Item, StoreError> {
        self.update(id, ItemPatch::new().completed(true))
    }

    /// Remove an item, keeping the order of the rest.
    pub fn delete(&mut self, id: u64) -> Result<Item, StoreError> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let item = self.items.remove(index);
        debug!("Deleted item {}", id);
        Ok(item)
    }

    /// Completed items, in order.
    pub fn completed(&self) -> Vec<&Item> {
        self.filtered(&Filter::new().completed(true))
    }

    /// Pending items, in order.
    pub fn pending(&self) -> Vec<&Item> {
        self.filtered(&Filter::new().completed(false))
    }

    /// Remove every completed item and return them in their original order.
    pub fn clear_completed(&mut self) -> Vec<Item> {
        let (cleared, kept): (Vec<Item>, Vec<Item>) =
            std::mem::take(&mut self.items).into_iter().partition(|item| item.completed);
        self.items = kept;

        debug!("Cleared {} completed item(s)", cleared.len());
        cleared
    }

    /// Counts and completion rate.
    pub fn stats(&self) -> Stats {
        let completed = self.items.iter().filter(|item| item.completed).count();
        Stats::from_counts(self.items.len(), completed)
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id the next `add` will assign.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub(crate) fn filtered(&self, filter: &Filter) -> Vec<&Item> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }
}

/// `updated_at` never moves backwards, even if the clock does.
fn monotonic(previous: DateTime<Utc>, now: DateTime<Utc>, id: u64) -> DateTime<Utc> {
    if now < previous {
        warn!("Clock went backwards while updating item {}; keeping previous timestamp", id);
        previous
    } else {
        now
    }
}
