//! User-visible acknowledgements.
//!
//! Every settled operation that the user triggered produces exactly one
//! [`Notice`], success or failure. How it is presented is up to the host.

use serde::Serialize;

use devinterview_core::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeTone {
    Success,
    Error,
}

/// A message for the user, plus whether re-triggering the action may help.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub tone: NoticeTone,
    pub message: String,
    pub retryable: bool,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            tone: NoticeTone::Success,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            tone: NoticeTone::Error,
            message: message.into(),
            retryable: false,
        }
    }

    /// An error notice the user can act on by trying again.
    pub fn retryable(message: impl Into<String>) -> Self {
        Self {
            retryable: true,
            ..Self::error(message)
        }
    }

    pub fn is_error(&self) -> bool {
        self.tone == NoticeTone::Error
    }
}

impl From<&CoreError> for Notice {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::error(msg.clone()),
            CoreError::NotFound { entity, id } => {
                Self::error(format!("{entity} {id} no longer exists"))
            }
            CoreError::Conflict(msg) => Self::error(msg.clone()),
            CoreError::Unavailable(_) => {
                Self::retryable("The service is unavailable, please try again")
            }
            CoreError::Internal(_) => Self::error("Something went wrong"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_is_retryable() {
        let notice = Notice::from(&CoreError::Unavailable("connection refused".into()));
        assert!(notice.is_error());
        assert!(notice.retryable);
        assert!(!notice.message.contains("connection refused"));
    }

    #[test]
    fn validation_message_is_shown_as_is() {
        let notice = Notice::from(&CoreError::Validation("Title is required".into()));
        assert_eq!(notice.message, "Title is required");
        assert!(!notice.retryable);
    }
}
