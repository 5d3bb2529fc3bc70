//! Batch operations for bulk updates.

use crate::clock::Clock;
use crate::store::{ItemStore, StoreError};
use crate::types::{Item, NewItem};
use log::info;

/// Result of a batch complete or delete.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Items the operation succeeded on, in request order.
    pub items: Vec<Item>,
    /// Ids that were not found.
    pub not_found: Vec<u64>,
}

impl BatchResult {
    fn record(&mut self, outcome: Result<Item, StoreError>) {
        match outcome {
            Ok(item) => self.items.push(item),
            Err(StoreError::NotFound(id)) => self.not_found.push(id),
        }
    }
}

/// Extension trait for batch operations on the store.
pub trait StoreBatchExt {
    /// Add multiple items; ids follow input order.
    fn batch_add(&mut self, specs: Vec<NewItem>) -> Vec<Item>;

    /// Complete multiple items. Missing ids don't stop the batch.
    fn batch_complete(&mut self, ids: &[u64]) -> BatchResult;

    /// Delete multiple items. Missing ids don't stop the batch.
    fn batch_delete(&mut self, ids: &[u64]) -> BatchResult;
}

impl<C: Clock> StoreBatchExt for ItemStore<C> {
    fn batch_add(&mut self, specs: Vec<NewItem>) -> Vec<Item> {
        let created: Vec<Item> = specs.into_iter().map(|spec| self.add_new(spec)).collect();
        info!("Batch added {} item(s)", created.len());
        created
    }

    fn batch_complete(&mut self, ids: &[u64]) -> BatchResult {
        let mut result = BatchResult::default();
        for &id in ids {
            result.record(self.complete(id));
        }
        info!(
            "Batch completed {} item(s), {} not found",
            result.items.len(),
            result.not_found.len()
        );
        result
    }

    fn batch_delete(&mut self, ids: &[u64]) -> BatchResult {
        let mut result = BatchResult::default();
        for &id in ids {
            result.record(self.delete(id));
        }
        info!(
            "Batch deleted {} item(s), {} not found",
            result.items.len(),
            result.not_found.len()
        );
        result
    }
}
