//! Handlers for the question catalog.
//!
//! Provides the filtered listing, detail lookup, category list, the admin
//! create/update/delete endpoints, and positional learning-resource editing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use devinterview_core::category::{BadgeTone, Category, CategorySelector};
use devinterview_core::error::CoreError;
use devinterview_core::question::{require_question_id, ENTITY_QUESTION};
use devinterview_core::search::CatalogFilter;
use devinterview_store::models::question::{LearningResource, QuestionDraft};
use devinterview_store::repositories::QuestionRepo;

use crate::error::AppResult;
use crate::response::{DataResponse, QuestionListing};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuestionsParams {
    /// `All` or an exact category label. Absent means `All`.
    pub category: Option<String>,
    /// Free-text query; not trimmed before matching.
    pub q: Option<String>,
}

/// Query parameters for deletion.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuestionParams {
    #[serde(default)]
    pub confirm: bool,
}

/// One entry of the category list.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub label: &'static str,
    pub badge_tone: BadgeTone,
}

// ---------------------------------------------------------------------------
// Read handlers
// ---------------------------------------------------------------------------

/// GET /categories
///
/// The closed category list in presentation order.
pub async fn list_categories() -> impl IntoResponse {
    let categories: Vec<CategoryInfo> = Category::ALL
        .into_iter()
        .map(|c| CategoryInfo {
            label: c.label(),
            badge_tone: c.badge_tone(),
        })
        .collect();
    Json(DataResponse { data: categories })
}

/// GET /questions?category=&q=
///
/// Filtered listing of question summaries. An empty result is a normal
/// response with `total: 0`.
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<ListQuestionsParams>,
) -> AppResult<impl IntoResponse> {
    let selector = match params.category.as_deref() {
        Some(raw) => CategorySelector::parse(raw)?,
        None => CategorySelector::All,
    };
    let filter = CatalogFilter::new(selector, params.q.unwrap_or_default());

    let questions = QuestionRepo::list_filtered(&state.store, &filter).await;
    let items: Vec<_> = questions.iter().map(|q| q.summary()).collect();

    tracing::debug!(
        category = %filter.selector,
        query = %filter.query,
        total = items.len(),
        "Question listing derived"
    );

    Ok(Json(DataResponse {
        data: QuestionListing::new(filter, items),
    }))
}

/// GET /catalog
///
/// Every question as a full record, in catalog order. Clients that filter
/// locally load the catalog through this endpoint.
pub async fn list_catalog(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let questions = QuestionRepo::list(&state.store).await;
    Ok(Json(DataResponse { data: questions }))
}

/// GET /questions/{id}
///
/// A single question. Malformed ids and unknown ids are both 404.
pub async fn get_question(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = require_question_id(&token)?;
    let question = QuestionRepo::find_by_id(&state.store, id)
        .await
        .ok_or_else(|| CoreError::not_found(ENTITY_QUESTION, id))?;

    Ok(Json(DataResponse { data: question }))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /questions
///
/// Create a question. Title and model answer are required; category
/// defaults to Backend.
pub async fn create_question(
    State(state): State<AppState>,
    Json(input): Json<QuestionDraft>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let question = QuestionRepo::create(&state.store, &input).await;

    tracing::info!(
        question_id = question.id,
        category = %question.category,
        "Question created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: question })))
}

/// PUT /questions/{id}
///
/// Replace every field of a question, keeping its position in the catalog.
pub async fn update_question(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(input): Json<QuestionDraft>,
) -> AppResult<impl IntoResponse> {
    let id = require_question_id(&token)?;
    input.validate()?;

    let question = QuestionRepo::update(&state.store, id, &input)
        .await
        .ok_or_else(|| CoreError::not_found(ENTITY_QUESTION, id))?;

    tracing::info!(question_id = id, "Question updated");

    Ok(Json(DataResponse { data: question }))
}

/// DELETE /questions/{id}?confirm=true
///
/// Irreversibly delete a question. Without `confirm=true` nothing is removed.
pub async fn delete_question(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Query(params): Query<DeleteQuestionParams>,
) -> AppResult<impl IntoResponse> {
    if !params.confirm {
        return Err(CoreError::Validation(
            "Deletion must be confirmed with confirm=true".to_string(),
        )
        .into());
    }
    let id = require_question_id(&token)?;

    if !QuestionRepo::delete(&state.store, id).await {
        return Err(CoreError::not_found(ENTITY_QUESTION, id).into());
    }

    tracing::info!(question_id = id, "Question deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /questions/{id}/resources
///
/// Append a learning resource. Title and URL are required.
pub async fn add_resource(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(input): Json<LearningResource>,
) -> AppResult<impl IntoResponse> {
    let id = require_question_id(&token)?;
    input.validate()?;

    let question = QuestionRepo::add_resource(&state.store, id, input)
        .await
        .ok_or_else(|| CoreError::not_found(ENTITY_QUESTION, id))?;

    tracing::info!(
        question_id = id,
        resources = question.learning_resources.len(),
        "Learning resource added"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: question })))
}

/// DELETE /questions/{id}/resources/{index}
///
/// Remove the learning resource at a position.
pub async fn remove_resource(
    State(state): State<AppState>,
    Path((token, index)): Path<(String, usize)>,
) -> AppResult<impl IntoResponse> {
    let id = require_question_id(&token)?;

    let question = QuestionRepo::remove_resource(&state.store, id, index)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY_QUESTION, id))?;

    tracing::info!(question_id = id, index, "Learning resource removed");

    Ok(Json(DataResponse { data: question }))
}
