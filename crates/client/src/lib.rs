//! Consumer side of the interview catalog.
//!
//! Each view ([`listing::CatalogBrowser`], [`detail::DetailView`],
//! [`admin::AdminConsole`], [`subscription::SubscriptionForm`]) is a plain
//! state machine driven through `&mut self`. Calls to the record source go
//! through a [`session::Session`] and come back as an
//! [`operation::Settled`] value.

pub mod admin;
pub mod config;
pub mod detail;
pub mod http_source;
pub mod listing;
pub mod notice;
pub mod operation;
pub mod session;
pub mod subscription;

#[cfg(test)]
mod testing;

pub use config::ClientConfig;
pub use http_source::HttpSource;
pub use operation::{Failure, Operation, Settled};
pub use session::Session;
