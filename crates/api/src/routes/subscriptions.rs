//! Route definitions for email subscriptions.
//!
//! Mounted at `/subscriptions` by `api_routes()`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::subscriptions;
use crate::state::AppState;

/// Subscription routes.
///
/// ```text
/// GET    /                        -> list_subscriptions
/// POST   /                        -> subscribe
/// DELETE /{email}                 -> unsubscribe
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(subscriptions::list_subscriptions).post(subscriptions::subscribe),
        )
        .route("/{email}", delete(subscriptions::unsubscribe))
}
