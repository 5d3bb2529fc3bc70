//! Query API with flexible filtering.

use crate::clock::Clock;
use crate::store::ItemStore;
use crate::types::Item;

/// Criteria an item must meet. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub completed: Option<bool>,
    pub title_contains: Option<String>,
}

impl Filter {
    /// Create a filter that matches every item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by completion flag.
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Filter by title substring (case-insensitive).
    pub fn title_contains(mut self, substring: impl Into<String>) -> Self {
        self.title_contains = Some(substring.into());
        self
    }

    /// Check a single item against the filter.
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(completed) = self.completed
            && item.completed != completed
        {
            return false;
        }

        if let Some(needle) = &self.title_contains
            && !item.title.to_lowercase().contains(&needle.to_lowercase())
        {
            return false;
        }

        true
    }
}

/// Query builder for fluent queries.
pub struct Query<'a, C: Clock> {
    store: &'a ItemStore<C>,
    filter: Filter,
}

impl<'a, C: Clock> Query<'a, C> {
    /// Create a new query.
    pub(crate) fn new(store: &'a ItemStore<C>) -> Self {
        Self {
            store,
            filter: Filter::new(),
        }
    }

    /// Filter by completion flag.
    pub fn completed(mut self, completed: bool) -> Self {
        self.filter = self.filter.completed(completed);
        self
    }

    /// Filter by title substring.
    pub fn title_contains(mut self, substring: impl Into<String>) -> Self {
        self.filter = self.filter.title_contains(substring);
        self
    }

    /// Execute the query and return matching items in store order.
    pub fn execute(self) -> Vec<&'a Item> {
        self.store.filtered(&self.filter)
    }

    /// Count matching items.
    pub fn count(self) -> usize {
        self.store.get_all().iter().filter(|item| self.filter.matches(item)).count()
    }
}

/// Extension trait to add query methods to the store.
pub trait StoreQueryExt<C: Clock> {
    /// Start building a query.
    fn query(&self) -> Query<'_, C>;

    /// Query with a pre-built filter.
    fn query_with_filter(&self, filter: &Filter) -> Vec<&Item>;
}

impl<C: Clock> StoreQueryExt<C> for ItemStore<C> {
    fn query(&self) -> Query<'_, C> {
        Query::new(self)
    }

    fn query_with_filter(&self, filter: &Filter) -> Vec<&Item> {
        self.filtered(filter)
    }
}
