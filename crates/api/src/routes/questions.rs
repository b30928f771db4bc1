//! Route definitions for the question catalog.
//!
//! Mounted at `/questions`, `/catalog` and `/categories` by `api_routes()`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// Question routes.
///
/// ```text
/// GET    /                        -> list_questions (?category, q)
/// POST   /                        -> create_question
/// GET    /{id}                    -> get_question
/// PUT    /{id}                    -> update_question
/// DELETE /{id}                    -> delete_question (?confirm=true)
/// POST   /{id}/resources          -> add_resource
/// DELETE /{id}/resources/{index}  -> remove_resource
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(questions::list_questions).post(questions::create_question),
        )
        .route(
            "/{id}",
            get(questions::get_question)
                .put(questions::update_question)
                .delete(questions::delete_question),
        )
        .route("/{id}/resources", post(questions::add_resource))
        .route("/{id}/resources/{index}", delete(questions::remove_resource))
}

/// Category routes.
///
/// ```text
/// GET    /                        -> list_categories
/// ```
pub fn categories_router() -> Router<AppState> {
    Router::new().route("/", get(questions::list_categories))
}

/// Full-record catalog route.
///
/// ```text
/// GET    /                        -> list_catalog
/// ```
pub fn catalog_router() -> Router<AppState> {
    Router::new().route("/", get(questions::list_catalog))
}
