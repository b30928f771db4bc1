//! Domain vocabulary for the developer interview catalog.
//!
//! This crate has no I/O. It defines identifiers, the shared error type, the
//! closed category enumeration, and the filter/search engine used by both the
//! HTTP service and the client-side view state.

pub mod category;
pub mod error;
pub mod question;
pub mod search;
pub mod subscription;
pub mod types;
