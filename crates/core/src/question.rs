//! Question-level helpers: identifier parsing, excerpts, and positional
//! resource indexing.

use crate::error::CoreError;
use crate::types::DbId;

/// Entity name used in not-found errors for questions.
pub const ENTITY_QUESTION: &str = "Question";

/// Number of characters of the model answer shown in listing excerpts.
pub const EXCERPT_CHARS: usize = 150;

/// Suffix appended to every excerpt.
pub const EXCERPT_ELLIPSIS: &str = "...";

/// Parse an identifier token taken from a path or link.
///
/// Strict decimal parsing: anything that is not a complete `i64` yields
/// `None`, which callers treat exactly like a lookup miss.
pub fn parse_question_id(token: &str) -> Option<DbId> {
    token.parse::<DbId>().ok()
}

/// Resolve a token to an id, or the question not-found error.
pub fn require_question_id(token: &str) -> Result<DbId, CoreError> {
    parse_question_id(token).ok_or_else(|| CoreError::not_found(ENTITY_QUESTION, token))
}

/// First [`EXCERPT_CHARS`] characters of `text` followed by `...`.
///
/// Counts characters rather than bytes so multi-byte text is never split.
pub fn excerpt(text: &str) -> String {
    let mut out: String = text.chars().take(EXCERPT_CHARS).collect();
    out.push_str(EXCERPT_ELLIPSIS);
    out
}

/// Check a positional index into an ordered resource list of length `len`.
pub fn validate_resource_index(index: usize, len: usize) -> Result<(), CoreError> {
    if index < len {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Learning resource index {index} is out of range (question has {len} resources)"
        )))
    }
}
