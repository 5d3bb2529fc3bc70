//! Core data types for tally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single tracked record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Assigned by the store, starting at 1
    pub id: u64,

    /// Short description of the work
    pub title: String,

    /// Longer free-form text, empty when not given
    #[serde(default)]
    pub description: String,

    /// Whether the item has been completed
    #[serde(default)]
    pub completed: bool,

    /// When created
    pub created_at: DateTime<Utc>,

    /// Last modification
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Apply a patch's supplied fields. Timestamps are the store's concern.
    pub(crate) fn apply(&mut self, patch: ItemPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }
}

/// Fields an update may overwrite. Anything left as `None` is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl ItemPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the completion flag.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// True if the patch overwrites nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

/// Specification for creating an item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub title: String,
    pub description: String,
}

impl NewItem {
    /// Start with just a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Summary counts over the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Percentage with two decimals, e.g. "50.00%", or "0%" for an empty store
    pub completion_rate: String,
}

impl Stats {
    /// Build stats from raw counts. `completed` must not exceed `total`.
    pub(crate) fn from_counts(total: usize, completed: usize) -> Self {
        debug_assert!(completed <= total, "completed {} > total {}", completed, total);

        let completion_rate = if total == 0 {
            "0%".to_string()
        } else {
            // Hundredths of a percent, ties rounded up.
            let hundredths = (completed as u128 * 20_000 + total as u128) / (2 * total as u128);
            format!("{}.{:02}%", hundredths / 100, hundredths % 100)
        };

        Self {
            total,
            completed,
            pending: total - completed,
            completion_rate,
        }
    }
}
