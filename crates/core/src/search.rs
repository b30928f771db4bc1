//! Filter/search engine for the question catalog.
//!
//! Lives in `core` so the HTTP listing and the client-side browser derive the
//! visible subset with exactly the same predicates. The engine is a linear
//! rescan: catalogs are small and the result must be recomputed on every
//! change of catalog, selector, or query.

use serde::{Deserialize, Serialize};

use crate::category::{Category, CategorySelector};

/// Anything the engine can filter: a category plus the two searchable texts.
pub trait Searchable {
    fn category(&self) -> Category;
    fn title(&self) -> &str;
    fn model_answer(&self) -> &str;
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn category(&self) -> Category {
        (**self).category()
    }

    fn title(&self) -> &str {
        (**self).title()
    }

    fn model_answer(&self) -> &str {
        (**self).model_answer()
    }
}

/// The pair of inputs that determines the visible subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    pub selector: CategorySelector,
    pub query: String,
}

impl CatalogFilter {
    pub fn new(selector: CategorySelector, query: impl Into<String>) -> Self {
        Self {
            selector,
            query: query.into(),
        }
    }

    /// `All` with an empty query: the identity filter.
    pub fn is_unrestricted(&self) -> bool {
        self.selector == CategorySelector::All && is_blank_query(&self.query)
    }

    /// Whether a single record passes both predicates.
    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        self.selector.admits(item.category()) && matches_query(item, &self.query)
    }

    /// Apply the filter, preserving the catalog's relative order.
    pub fn apply<'a, T: Searchable>(&self, catalog: &'a [T]) -> Vec<&'a T> {
        filter_catalog(catalog, self)
    }
}

/// A query that is empty or only whitespace disables the text predicate.
pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}

/// Text predicate.
///
/// A non-blank query is lowercased but not trimmed: surrounding whitespace
/// takes part in the substring match.
pub fn matches_query<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    if is_blank_query(query) {
        return true;
    }
    let needle = query.to_lowercase();
    item.title().to_lowercase().contains(&needle)
        || item.model_answer().to_lowercase().contains(&needle)
}

/// Derive the ordered subsequence of `catalog` admitted by `filter`.
///
/// Category is checked before text; both are per-record predicates so the
/// order does not change the result.
pub fn filter_catalog<'a, T: Searchable>(catalog: &'a [T], filter: &CatalogFilter) -> Vec<&'a T> {
    catalog
        .iter()
        .filter(|item| filter.selector.admits(item.category()))
        .filter(|item| matches_query(*item, &filter.query))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
