//! Response envelope and listing payload types.
//!
//! Every successful response is wrapped in `{ "data": ... }` through
//! [`DataResponse`] rather than ad-hoc `serde_json::json!` values.

use serde::Serialize;

use devinterview_core::category::CategorySelector;
use devinterview_core::search::CatalogFilter;
use devinterview_store::models::question::QuestionSummary;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Payload of the question listing: the filter that produced it echoed
/// back, the count, and the visible summaries in catalog order.
#[derive(Debug, Serialize)]
pub struct QuestionListing {
    pub category: CategorySelector,
    pub query: String,
    pub total: usize,
    pub items: Vec<QuestionSummary>,
}

impl QuestionListing {
    pub fn new(filter: CatalogFilter, items: Vec<QuestionSummary>) -> Self {
        Self {
            category: filter.selector,
            query: filter.query,
            total: items.len(),
            items,
        }
    }
}
