//! Test doubles for the record source.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use devinterview_core::error::CoreError;
use devinterview_core::types::DbId;
use devinterview_store::models::question::{Question, QuestionDraft};
use devinterview_store::models::subscription::EmailSubscription;
use devinterview_store::source::{QuestionSource, StoreSource};
use devinterview_store::CatalogStore;

use crate::session::Session;

/// A [`StoreSource`] that can be switched to fail or to never answer, and
/// counts the calls that reached it.
pub(crate) struct ScriptedSource {
    inner: StoreSource,
    failing: AtomicBool,
    hanging: AtomicBool,
    calls: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(store: CatalogStore) -> Arc<Self> {
        Arc::new(Self {
            inner: StoreSource::new(store),
            failing: AtomicBool::new(false),
            hanging: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn seeded() -> Arc<Self> {
        Self::new(CatalogStore::seeded())
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_hanging(&self, hanging: bool) {
        self.hanging.store(hanging, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn store(&self) -> &CatalogStore {
        self.inner.store()
    }

    pub fn session(self: &Arc<Self>) -> Session {
        Session::new(self.clone(), Some(Duration::from_secs(10)))
    }

    async fn gate(&self) -> Result<(), CoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.hanging.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(CoreError::Unavailable("scripted failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl QuestionSource for ScriptedSource {
    async fn list_questions(&self) -> Result<Vec<Question>, CoreError> {
        self.gate().await?;
        self.inner.list_questions().await
    }

    async fn get_question(&self, id: DbId) -> Result<Option<Question>, CoreError> {
        self.gate().await?;
        self.inner.get_question(id).await
    }

    async fn create_question(&self, draft: QuestionDraft) -> Result<Question, CoreError> {
        self.gate().await?;
        self.inner.create_question(draft).await
    }

    async fn update_question(&self, id: DbId, draft: QuestionDraft) -> Result<Question, CoreError> {
        self.gate().await?;
        self.inner.update_question(id, draft).await
    }

    async fn delete_question(&self, id: DbId) -> Result<(), CoreError> {
        self.gate().await?;
        self.inner.delete_question(id).await
    }

    async fn subscribe_email(&self, email: String) -> Result<EmailSubscription, CoreError> {
        self.gate().await?;
        self.inner.subscribe_email(email).await
    }
}
