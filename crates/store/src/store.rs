use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use devinterview_core::types::DbId;

use crate::models::question::Question;
use crate::models::subscription::EmailSubscription;
use crate::seed;

/// Owned handle to the in-memory catalog.
///
/// Cheaply cloneable: clones share the same state. Repository functions take
/// `&CatalogStore` and acquire the lock once per operation, so every
/// operation is atomic with respect to the others.
#[derive(Clone, Default)]
pub struct CatalogStore {
    inner: Arc<RwLock<CatalogState>>,
}

/// State guarded by the store lock.
#[derive(Debug, Default)]
pub(crate) struct CatalogState {
    pub questions: Vec<Question>,
    pub subscriptions: Vec<EmailSubscription>,
    pub ids: IdSequence,
}

impl CatalogStore {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding `questions` in the given order.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let mut ids = IdSequence::default();
        for q in &questions {
            ids.observe(q.id);
        }
        Self {
            inner: Arc::new(RwLock::new(CatalogState {
                questions,
                subscriptions: Vec::new(),
                ids,
            })),
        }
    }

    /// A catalog pre-populated with the example questions.
    pub fn seeded() -> Self {
        Self::with_questions(seed::example_questions())
    }

    /// Number of questions currently held.
    pub async fn question_count(&self) -> usize {
        self.inner.read().await.questions.len()
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, CatalogState> {
        self.inner.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, CatalogState> {
        self.inner.write().await
    }
}

/// Issues question ids from a millisecond clock.
///
/// Ids are strictly increasing: a new id is the current Unix time in
/// milliseconds, bumped past the last issued or observed id when the clock
/// has not advanced.
#[derive(Debug, Default)]
pub(crate) struct IdSequence {
    last: DbId,
}

impl IdSequence {
    /// Record an externally assigned id so later ids stay above it.
    pub fn observe(&mut self, id: DbId) {
        self.last = self.last.max(id);
    }

    pub fn next(&mut self) -> DbId {
        self.next_at(Utc::now().timestamp_millis())
    }

    pub fn next_at(&mut self, now_millis: DbId) -> DbId {
        let id = now_millis.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}
