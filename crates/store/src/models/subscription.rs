//! Email subscription model.

use serde::{Deserialize, Serialize};

use devinterview_core::types::Timestamp;

/// A captured email subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSubscription {
    pub email: String,
    pub is_active: bool,
    pub subscribed_at: Timestamp,
}

/// DTO for a subscription request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}
