//! Awaitable, cancellable handles for source calls.
//!
//! An [`Operation`] is a spawned task paired with a [`CancellationToken`]
//! and a deadline. Awaiting [`Operation::settle`] always yields an explicit
//! [`Settled`] value: the call either produced its result or failed for a
//! named reason. A call that never completes resolves to
//! [`Failure::TimedOut`] once the deadline passes.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use devinterview_core::error::CoreError;

use crate::notice::Notice;

/// Why an operation did not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    /// The source answered with an error.
    #[error(transparent)]
    Rejected(#[from] CoreError),

    #[error("Operation was cancelled")]
    Cancelled,

    #[error("Operation timed out")]
    TimedOut,

    /// The task panicked or was torn down before settling.
    #[error("Operation aborted")]
    Aborted,
}

impl Failure {
    /// The acknowledgement shown to the user for this failure.
    pub fn notice(&self) -> Notice {
        match self {
            Self::Rejected(err) => Notice::from(err),
            Self::Cancelled => Notice::error("The request was cancelled"),
            Self::TimedOut => Notice::retryable("The request took too long, please try again"),
            Self::Aborted => Notice::retryable("The request failed unexpectedly, please try again"),
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Rejected(err) => err.is_retryable(),
            Self::Cancelled => false,
            Self::TimedOut | Self::Aborted => true,
        }
    }
}

/// Outcome of a settled [`Operation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settled<T> {
    Succeeded(T),
    Failed(Failure),
}

impl<T> Settled<T> {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    pub fn into_result(self) -> Result<T, Failure> {
        match self {
            Self::Succeeded(value) => Ok(value),
            Self::Failed(failure) => Err(failure),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Settled<U> {
        match self {
            Self::Succeeded(value) => Settled::Succeeded(f(value)),
            Self::Failed(failure) => Settled::Failed(failure),
        }
    }
}

impl<T> From<Result<T, CoreError>> for Settled<T> {
    fn from(result: Result<T, CoreError>) -> Self {
        match result {
            Ok(value) => Self::Succeeded(value),
            Err(err) => Self::Failed(Failure::Rejected(err)),
        }
    }
}

/// A source call in flight.
#[must_use = "an operation does nothing useful unless it is settled"]
pub struct Operation<T> {
    label: &'static str,
    handle: JoinHandle<Result<T, CoreError>>,
    cancel: CancellationToken,
    deadline: Option<Instant>,
}

impl<T> fmt::Debug for Operation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("label", &self.label)
            .field("deadline", &self.deadline)
            .field("finished", &self.handle.is_finished())
            .finish()
    }
}

impl<T: Send + 'static> Operation<T> {
    /// Spawn `call` onto the runtime. The deadline, if any, counts from now.
    pub fn spawn<F>(label: &'static str, timeout: Option<Duration>, call: F) -> Self
    where
        F: Future<Output = Result<T, CoreError>> + Send + 'static,
    {
        tracing::debug!(operation = label, "Operation started");
        Self {
            label,
            handle: tokio::spawn(call),
            cancel: CancellationToken::new(),
            deadline: timeout.map(|t| Instant::now() + t),
        }
    }

    /// An operation that has already settled with `result`.
    ///
    /// Used for calls rejected locally before reaching the source.
    pub fn ready(label: &'static str, result: Result<T, CoreError>) -> Self {
        Self::spawn(label, None, std::future::ready(result))
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Token that cancels this operation when triggered, usable from
    /// another task.
    pub fn canceller(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the underlying call has completed, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the call to settle, be cancelled, or run past its deadline.
    ///
    /// The task is aborted on cancellation and on timeout, so a late result
    /// is never observed.
    pub async fn settle(self) -> Settled<T> {
        let Self {
            label,
            mut handle,
            cancel,
            deadline,
        } = self;

        let expired = async move {
            match deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };

        let settled = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                handle.abort();
                Settled::Failed(Failure::Cancelled)
            }
            joined = &mut handle => match joined {
                Ok(result) => Settled::from(result),
                Err(e) => {
                    tracing::error!(operation = label, error = %e, "Operation task failed");
                    Settled::Failed(Failure::Aborted)
                }
            },
            _ = expired => {
                handle.abort();
                Settled::Failed(Failure::TimedOut)
            }
        };

        match &settled {
            Settled::Succeeded(_) => tracing::debug!(operation = label, "Operation succeeded"),
            Settled::Failed(failure) => {
                tracing::warn!(operation = label, error = %failure, "Operation failed")
            }
        }
        settled
    }
}
