//! In-memory catalog store for the developer interview catalog.
//!
//! The store is an explicitly owned, cheaply cloneable handle
//! ([`CatalogStore`]) passed to repositories, HTTP handlers, and the
//! in-process [`source::StoreSource`]. Nothing here is process-global.

pub mod models;
pub mod repositories;
pub mod seed;
pub mod source;
mod store;

pub use store::CatalogStore;
