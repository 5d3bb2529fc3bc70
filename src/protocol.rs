//! Serializable command surface over the store.
//!
//! A script is a list of [`Request`]s in YAML or JSON; each one executed via
//! [`ItemStore::handle`] yields a [`Response`].

use crate::clock::Clock;
use crate::store::{ItemStore, StoreError};
use crate::types::{Item, ItemPatch, Stats};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A single store operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Add a new item.
    Add {
        title: String,
        #[serde(default)]
        description: String,
    },

    /// Get an item by id.
    Get { id: u64 },

    /// List all items.
    List,

    /// Overwrite some fields of an item.
    Update {
        id: u64,
        #[serde(flatten)]
        patch: ItemPatch,
    },

    /// Mark an item completed.
    Complete { id: u64 },

    /// Delete an item.
    Delete { id: u64 },

    /// List completed items.
    Completed,

    /// List pending items.
    Pending,

    /// Remove all completed items.
    ClearCompleted,

    /// Summary counts.
    Stats,
}

/// Result of executing a [`Request`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    /// Single item response.
    Item { item: Item },

    /// Multiple items response.
    Items { items: Vec<Item> },

    /// Stats response.
    Stats { stats: Stats },

    /// Item not found.
    NotFound { id: u64 },
}

impl Response {
    /// True for a not-found response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Response::NotFound { .. })
    }

    fn items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        Response::Items {
            items: items.into_iter().cloned().collect(),
        }
    }
}

impl From<Result<Item, StoreError>> for Response {
    fn from(result: Result<Item, StoreError>) -> Self {
        match result {
            Ok(item) => Response::Item { item },
            Err(StoreError::NotFound(id)) => Response::NotFound { id },
        }
    }
}

impl<C: Clock> ItemStore<C> {
    /// Execute a request against the store.
    pub fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::Add { title, description } => Response::Item {
                item: self.add(&title, &description),
            },

            Request::Get { id } => match self.get(id) {
                Some(item) => Response::Item { item: item.clone() },
                None => Response::NotFound { id },
            },

            Request::List => Response::items(self.get_all()),

            Request::Update { id, patch } => self.update(id, patch).into(),

            Request::Complete { id } => self.complete(id).into(),

            Request::Delete { id } => self.delete(id).into(),

            Request::Completed => Response::items(self.completed()),

            Request::Pending => Response::items(self.pending()),

            Request::ClearCompleted => Response::Items {
                items: self.clear_completed(),
            },

            Request::Stats => Response::Stats { stats: self.stats() },
        }
    }
}

/// Parse a script from text. JSON is tried when `json` is set, YAML otherwise.
pub fn parse_script(contents: &str, json: bool) -> Result<Vec<Request>> {
    if json {
        serde_json::from_str(contents).context("Failed to parse JSON script")
    } else {
        serde_yaml::from_str(contents).context("Failed to parse YAML script")
    }
}

/// Load a script file; `.json` files are read as JSON, anything else as YAML.
pub fn load_script(path: &Path) -> Result<Vec<Request>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read script {}", path.display()))?;
    let json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    parse_script(&contents, json)
}
