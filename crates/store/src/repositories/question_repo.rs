//! Repository for catalog questions.
//!
//! Callers validate drafts before calling in; the repository only enforces
//! ordering, identity, and positional resource indexing.

use chrono::Utc;

use devinterview_core::error::CoreError;
use devinterview_core::question::validate_resource_index;
use devinterview_core::search::CatalogFilter;
use devinterview_core::types::DbId;

use crate::models::question::{LearningResource, Question, QuestionDraft};
use crate::store::CatalogStore;

/// Provides CRUD operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// The full catalog in order.
    pub async fn list(store: &CatalogStore) -> Vec<Question> {
        store.read().await.questions.clone()
    }

    /// The ordered subsequence admitted by `filter`.
    pub async fn list_filtered(store: &CatalogStore, filter: &CatalogFilter) -> Vec<Question> {
        let state = store.read().await;
        filter.apply(&state.questions).into_iter().cloned().collect()
    }

    /// Find a question by its ID.
    pub async fn find_by_id(store: &CatalogStore, id: DbId) -> Option<Question> {
        store
            .read()
            .await
            .questions
            .iter()
            .find(|q| q.id == id)
            .cloned()
    }

    /// Append a new question built from `draft`, returning the stored record.
    pub async fn create(store: &CatalogStore, draft: &QuestionDraft) -> Question {
        let mut state = store.write().await;
        let id = state.ids.next();
        let question = draft.clone().into_question(id, Utc::now());
        state.questions.push(question.clone());
        question
    }

    /// Replace every field of the question with `id`, keeping its position
    /// and creation time.
    pub async fn update(store: &CatalogStore, id: DbId, draft: &QuestionDraft) -> Option<Question> {
        let mut state = store.write().await;
        let slot = state.questions.iter_mut().find(|q| q.id == id)?;
        let now = Utc::now();
        let mut replacement = draft.clone().into_question(id, now);
        replacement.created_at = slot.created_at;
        *slot = replacement;
        Some(slot.clone())
    }

    /// Remove the question with `id`. Returns `false` when it did not exist.
    pub async fn delete(store: &CatalogStore, id: DbId) -> bool {
        let mut state = store.write().await;
        let before = state.questions.len();
        state.questions.retain(|q| q.id != id);
        state.questions.len() != before
    }

    /// Append a learning resource to the question with `id`.
    pub async fn add_resource(
        store: &CatalogStore,
        id: DbId,
        resource: LearningResource,
    ) -> Option<Question> {
        let mut state = store.write().await;
        let question = state.questions.iter_mut().find(|q| q.id == id)?;
        question.learning_resources.push(resource);
        question.updated_at = Some(Utc::now());
        Some(question.clone())
    }

    /// Remove the learning resource at `index` from the question with `id`.
    ///
    /// Returns `Ok(None)` when the question does not exist and a validation
    /// error when the index is out of range.
    pub async fn remove_resource(
        store: &CatalogStore,
        id: DbId,
        index: usize,
    ) -> Result<Option<Question>, CoreError> {
        let mut state = store.write().await;
        let Some(question) = state.questions.iter_mut().find(|q| q.id == id) else {
            return Ok(None);
        };
        validate_resource_index(index, question.learning_resources.len())?;
        question.learning_resources.remove(index);
        question.updated_at = Some(Utc::now());
        Ok(Some(question.clone()))
    }
}
