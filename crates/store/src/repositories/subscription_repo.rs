//! Repository for email subscriptions.

use chrono::Utc;

use crate::models::subscription::EmailSubscription;
use crate::store::CatalogStore;

/// Provides capture and lookup for email subscriptions.
pub struct SubscriptionRepo;

impl SubscriptionRepo {
    /// Record a subscription for `email`.
    ///
    /// A repeated address re-activates and returns the existing record; the
    /// boolean is `true` when a new record was created.
    pub async fn subscribe(store: &CatalogStore, email: &str) -> (EmailSubscription, bool) {
        let mut state = store.write().await;
        if let Some(existing) = state.subscriptions.iter_mut().find(|s| s.email == email) {
            existing.is_active = true;
            return (existing.clone(), false);
        }
        let subscription = EmailSubscription {
            email: email.to_string(),
            is_active: true,
            subscribed_at: Utc::now(),
        };
        state.subscriptions.push(subscription.clone());
        (subscription, true)
    }

    /// All subscriptions in capture order.
    pub async fn list(store: &CatalogStore) -> Vec<EmailSubscription> {
        store.read().await.subscriptions.clone()
    }

    pub async fn find_by_email(store: &CatalogStore, email: &str) -> Option<EmailSubscription> {
        store
            .read()
            .await
            .subscriptions
            .iter()
            .find(|s| s.email == email)
            .cloned()
    }

    /// Mark the subscription for `email` inactive.
    pub async fn deactivate(store: &CatalogStore, email: &str) -> Option<EmailSubscription> {
        let mut state = store.write().await;
        let subscription = state.subscriptions.iter_mut().find(|s| s.email == email)?;
        subscription.is_active = false;
        Some(subscription.clone())
    }
}
