//! Tally: a small in-memory list manager.
//!
//! Tally keeps an ordered list of items, each with a title, description,
//! completion flag and timestamps, and answers simple questions about it.
//!
//! # Example
//!
//! ```
//! use tally::{ItemPatch, ItemStore};
//!
//! let mut store = ItemStore::new();
//!
//! let first = store.add("Learn Rust", "Ownership and borrowing");
//! let second = store.add("Write docs", "");
//! assert_eq!((first.id, second.id), (1, 2));
//!
//! store.complete(first.id).unwrap();
//! store.update(second.id, ItemPatch::new().description("Usage guide")).unwrap();
//!
//! let stats = store.stats();
//! assert_eq!(stats.completion_rate, "50.00%");
//!
//! let cleared = store.clear_completed();
//! assert_eq!(cleared[0].id, first.id);
//! assert_eq!(store.len(), 1);
//! ```

mod clock;
mod store;
mod types;

pub mod batch;
pub mod protocol;
pub mod query;

// Re-export public API
pub use batch::{BatchResult, StoreBatchExt};
pub use clock::{Clock, ManualClock, SystemClock};
pub use protocol::{Request, Response, load_script, parse_script};
pub use query::{Filter, Query, StoreQueryExt};
pub use store::{ItemStore, StoreError};
pub use types::{Item, ItemPatch, NewItem, Stats};
