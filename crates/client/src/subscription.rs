//! Email subscription capture form.

use devinterview_core::error::CoreError;
use devinterview_core::subscription::validate_email_input;
use devinterview_store::models::subscription::EmailSubscription;

use crate::notice::Notice;
use crate::operation::{Operation, Settled};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    /// A submission is in flight; further submissions are refused.
    Pending,
    Subscribed,
    Failed,
}

#[derive(Debug)]
pub struct SubscriptionForm {
    input: String,
    status: FormStatus,
    notice: Option<Notice>,
}

impl Default for SubscriptionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SubscriptionForm {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            status: FormStatus::Idle,
            notice: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Start submitting the current input.
    ///
    /// An empty input is rejected before the source is called. While a
    /// previous submission is pending a second one is refused with
    /// [`CoreError::Conflict`].
    pub fn begin_submit(&mut self, session: &Session) -> Result<Operation<EmailSubscription>, CoreError> {
        if self.status == FormStatus::Pending {
            return Err(CoreError::Conflict(
                "A subscription request is already pending".to_string(),
            ));
        }
        if let Err(err) = validate_email_input(&self.input) {
            self.status = FormStatus::Failed;
            self.notice = Some(Notice::from(&err));
            return Err(err);
        }

        self.status = FormStatus::Pending;
        self.notice = None;
        let email = self.input.clone();
        Ok(session.call("subscribe_email", move |source| async move {
            source.subscribe_email(email).await
        }))
    }

    /// Apply the outcome of a submission. Success clears the input; failure
    /// keeps it so the user can retry.
    pub fn finish_submit(&mut self, settled: Settled<EmailSubscription>) {
        match settled {
            Settled::Succeeded(_) => {
                tracing::info!("Email subscription accepted");
                self.input.clear();
                self.status = FormStatus::Subscribed;
                self.notice = Some(Notice::success("Subscribed to the daily question"));
            }
            Settled::Failed(failure) => {
                self.status = FormStatus::Failed;
                self.notice = Some(failure.notice());
            }
        }
    }

    /// Submit and wait for the outcome.
    pub async fn submit(&mut self, session: &Session) -> Settled<EmailSubscription> {
        let op = match self.begin_submit(session) {
            Ok(op) => op,
            Err(err) => return Settled::from(Err(err)),
        };
        let settled = op.settle().await;
        self.finish_submit(settled.clone());
        settled
    }
}
