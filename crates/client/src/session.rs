//! The handle views use to reach the record source.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use devinterview_core::error::CoreError;
use devinterview_store::source::{QuestionSource, StoreSource};
use devinterview_store::CatalogStore;

use crate::config::ClientConfig;
use crate::http_source::HttpSource;
use crate::operation::Operation;

/// A record source plus the deadline applied to every call made through it.
///
/// Cheap to clone; views borrow it for the duration of a call.
#[derive(Clone)]
pub struct Session {
    source: Arc<dyn QuestionSource>,
    operation_timeout: Option<Duration>,
}

impl Session {
    pub fn new(source: Arc<dyn QuestionSource>, operation_timeout: Option<Duration>) -> Self {
        Self {
            source,
            operation_timeout,
        }
    }

    /// Talk to the catalog API at `config.api_url`.
    pub fn over_http(config: &ClientConfig) -> Self {
        Self::new(
            Arc::new(HttpSource::new(config.api_url.clone())),
            Some(config.operation_timeout),
        )
    }

    /// Work directly against `store`, delaying each call by the configured
    /// simulated latency.
    pub fn in_process(store: CatalogStore, config: &ClientConfig) -> Self {
        Self::new(
            Arc::new(StoreSource::new(store).with_latency(config.simulated_latency)),
            Some(config.operation_timeout),
        )
    }

    pub fn operation_timeout(&self) -> Option<Duration> {
        self.operation_timeout
    }

    /// Start `call` against the source as an [`Operation`].
    pub fn call<T, F, Fut>(&self, label: &'static str, call: F) -> Operation<T>
    where
        T: Send + 'static,
        F: FnOnce(Arc<dyn QuestionSource>) -> Fut,
        Fut: Future<Output = Result<T, CoreError>> + Send + 'static,
    {
        Operation::spawn(label, self.operation_timeout, call(Arc::clone(&self.source)))
    }
}
