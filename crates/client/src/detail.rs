//! Single-question detail view.

use devinterview_core::error::CoreError;
use devinterview_core::question::parse_question_id;
use devinterview_store::models::question::Question;

use crate::notice::Notice;
use crate::operation::{Failure, Operation, Settled};
use crate::session::Session;

/// State of the detail view.
///
/// A token that does not parse and an id the source does not know both
/// end in `NotFound`; no partial record is ever shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Found(Question),
    NotFound,
    Failed(Notice),
}

#[derive(Debug)]
pub struct DetailView {
    state: DetailState,
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailView {
    pub fn new() -> Self {
        Self {
            state: DetailState::Loading,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Start loading the question named by `token`.
    ///
    /// Returns `None` when the token is not an id; the view is then already
    /// `NotFound` and the source is never called.
    pub fn begin(&mut self, session: &Session, token: &str) -> Option<Operation<Option<Question>>> {
        let Some(id) = parse_question_id(token) else {
            tracing::debug!(token, "Detail token is not a question id");
            self.state = DetailState::NotFound;
            return None;
        };

        self.state = DetailState::Loading;
        Some(session.call("get_question", move |source| async move {
            source.get_question(id).await
        }))
    }

    pub fn finish(&mut self, settled: Settled<Option<Question>>) {
        self.state = match settled {
            Settled::Succeeded(Some(question)) => DetailState::Found(question),
            Settled::Succeeded(None)
            | Settled::Failed(Failure::Rejected(CoreError::NotFound { .. })) => DetailState::NotFound,
            Settled::Failed(failure) => DetailState::Failed(failure.notice()),
        };
    }

    /// Load `token` and wait for the outcome.
    pub async fn load(&mut self, session: &Session, token: &str) -> &DetailState {
        if let Some(op) = self.begin(session, token) {
            let settled = op.settle().await;
            self.finish(settled);
        }
        &self.state
    }
}
