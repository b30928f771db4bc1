//! Handlers for email subscription capture.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use devinterview_core::error::CoreError;
use devinterview_core::subscription::{validate_email_input, ENTITY_SUBSCRIPTION};
use devinterview_store::models::subscription::SubscribeRequest;
use devinterview_store::repositories::SubscriptionRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /subscriptions
///
/// All captured subscriptions in capture order.
pub async fn list_subscriptions(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let subscriptions = SubscriptionRepo::list(&state.store).await;
    Ok(Json(DataResponse {
        data: subscriptions,
    }))
}

/// POST /subscriptions
///
/// Capture an address. Any non-empty value is accepted. Returns 201 for a
/// new address and 200 when an existing one is re-activated.
pub async fn subscribe(
    State(state): State<AppState>,
    Json(input): Json<SubscribeRequest>,
) -> AppResult<impl IntoResponse> {
    validate_email_input(&input.email)?;

    let (subscription, created) = SubscriptionRepo::subscribe(&state.store, &input.email).await;

    tracing::info!(created, "Email subscription captured");

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: subscription })))
}

/// DELETE /subscriptions/{email}
///
/// Deactivate a subscription.
pub async fn unsubscribe(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<impl IntoResponse> {
    let subscription = SubscriptionRepo::deactivate(&state.store, &email)
        .await
        .ok_or_else(|| CoreError::not_found(ENTITY_SUBSCRIPTION, &email))?;

    tracing::info!("Email subscription deactivated");

    Ok(Json(DataResponse { data: subscription }))
}
