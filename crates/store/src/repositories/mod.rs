//! Repositories over the in-memory [`CatalogStore`](crate::CatalogStore).
//!
//! Each repository is a zero-sized type with associated async functions that
//! take the store handle as their first argument.

pub mod question_repo;
pub mod subscription_repo;

pub use question_repo::QuestionRepo;
pub use subscription_repo::SubscriptionRepo;
