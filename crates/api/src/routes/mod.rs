pub mod health;
pub mod questions;
pub mod subscriptions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                                      list categories
/// /catalog                                         full records in order
///
/// /questions                                       list (?category, q), create
/// /questions/{id}                                  get, update, delete (?confirm=true)
/// /questions/{id}/resources                        append learning resource
/// /questions/{id}/resources/{index}                remove learning resource
///
/// /subscriptions                                   list, subscribe
/// /subscriptions/{email}                           unsubscribe
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", questions::categories_router())
        .nest("/catalog", questions::catalog_router())
        .nest("/questions", questions::router())
        .nest("/subscriptions", subscriptions::router())
}
