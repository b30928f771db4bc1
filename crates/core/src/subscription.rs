//! Email subscription capture rules.
//!
//! No address grammar is checked at this layer: any non-empty value is
//! accepted and forwarded.

use crate::error::CoreError;

/// Entity name used in not-found errors for subscriptions.
pub const ENTITY_SUBSCRIPTION: &str = "EmailSubscription";

/// Validate the captured address before any external call is made.
pub fn validate_email_input(email: &str) -> Result<(), CoreError> {
    if email.is_empty() {
        return Err(CoreError::Validation(
            "Email address is required".to_string(),
        ));
    }
    Ok(())
}
