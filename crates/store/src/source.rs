//! The record-source contract and its in-process implementation.
//!
//! [`QuestionSource`] is the narrow interface the presentation side consumes.
//! Every call is fallible and may fail independently of the others; callers
//! must not assume local state was changed when a call fails.

use std::time::Duration;

use async_trait::async_trait;
use validator::Validate;

use devinterview_core::error::CoreError;
use devinterview_core::question::ENTITY_QUESTION;
use devinterview_core::subscription::validate_email_input;
use devinterview_core::types::DbId;

use crate::models::question::{Question, QuestionDraft};
use crate::models::subscription::EmailSubscription;
use crate::repositories::{QuestionRepo, SubscriptionRepo};
use crate::store::CatalogStore;

/// Latency the demo source simulates when none is configured explicitly.
pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(1000);

/// External record source for questions and subscriptions.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// The full catalog in order.
    async fn list_questions(&self) -> Result<Vec<Question>, CoreError>;

    /// A single question; `Ok(None)` when the id is unknown.
    async fn get_question(&self, id: DbId) -> Result<Option<Question>, CoreError>;

    /// Create a question, returning it with its assigned id.
    async fn create_question(&self, draft: QuestionDraft) -> Result<Question, CoreError>;

    /// Fully replace the question with `id`.
    async fn update_question(&self, id: DbId, draft: QuestionDraft) -> Result<Question, CoreError>;

    /// Delete the question with `id`.
    async fn delete_question(&self, id: DbId) -> Result<(), CoreError>;

    /// Subscribe `email` to the daily question mail.
    async fn subscribe_email(&self, email: String) -> Result<EmailSubscription, CoreError>;
}

/// [`QuestionSource`] backed directly by a [`CatalogStore`], with optional
/// simulated latency before every call.
#[derive(Clone)]
pub struct StoreSource {
    store: CatalogStore,
    latency: Duration,
}

impl StoreSource {
    /// A source with no simulated latency.
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store,
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl QuestionSource for StoreSource {
    async fn list_questions(&self) -> Result<Vec<Question>, CoreError> {
        self.simulate_latency().await;
        Ok(QuestionRepo::list(&self.store).await)
    }

    async fn get_question(&self, id: DbId) -> Result<Option<Question>, CoreError> {
        self.simulate_latency().await;
        Ok(QuestionRepo::find_by_id(&self.store, id).await)
    }

    async fn create_question(&self, draft: QuestionDraft) -> Result<Question, CoreError> {
        draft.validate()?;
        self.simulate_latency().await;
        let question = QuestionRepo::create(&self.store, &draft).await;
        tracing::debug!(question_id = question.id, "Question created through store source");
        Ok(question)
    }

    async fn update_question(&self, id: DbId, draft: QuestionDraft) -> Result<Question, CoreError> {
        draft.validate()?;
        self.simulate_latency().await;
        QuestionRepo::update(&self.store, id, &draft)
            .await
            .ok_or_else(|| CoreError::not_found(ENTITY_QUESTION, id))
    }

    async fn delete_question(&self, id: DbId) -> Result<(), CoreError> {
        self.simulate_latency().await;
        if QuestionRepo::delete(&self.store, id).await {
            Ok(())
        } else {
            Err(CoreError::not_found(ENTITY_QUESTION, id))
        }
    }

    async fn subscribe_email(&self, email: String) -> Result<EmailSubscription, CoreError> {
        validate_email_input(&email)?;
        self.simulate_latency().await;
        let (subscription, _) = SubscriptionRepo::subscribe(&self.store, &email).await;
        Ok(subscription)
    }
}
