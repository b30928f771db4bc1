pub mod questions;
pub mod subscriptions;
