//! Dispatcher builder and base-URL resolution
//!
//! The base address is threaded into the dispatcher at construction rather
//! than read from process-wide state at call time. The builder supports the
//! same resolution the original dev setup used: an environment-style
//! override falling back to a fixed default.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use shapewire_client::{DispatcherBuilder, Transport, TransportRequest, TransportResponse, TransportFuture};
//!
//! struct NoopTransport;
//!
//! impl Transport for NoopTransport {
//!     fn send(&self, _request: TransportRequest) -> TransportFuture<'_> {
//!         Box::pin(async { Ok(TransportResponse { status: 204, body: serde_json::Value::Null }) })
//!     }
//! }
//!
//! let dispatcher = DispatcherBuilder::new()
//!     .base_url_from_env("SHAPEWIRE_DOCTEST_ENDPOINT", "http://localhost:5000")
//!     .build(Arc::new(NoopTransport));
//! assert_eq!(dispatcher.base_url(), "http://localhost:5000");
//! ```

use std::sync::Arc;

use crate::dispatcher::Dispatcher;
use crate::transport::Transport;

/// Builder for configuring and creating a [`Dispatcher`]
#[derive(Debug, Default)]
pub struct DispatcherBuilder {
    base_url: Option<String>,
}

impl DispatcherBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL explicitly
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Resolve the base URL from an environment variable, falling back to
    /// a fixed default when the variable is unset or empty
    pub fn base_url_from_env(mut self, var: &str, default: impl Into<String>) -> Self {
        let resolved = match std::env::var(var) {
            Ok(value) if !value.is_empty() => value,
            _ => default.into(),
        };
        self.base_url = Some(resolved);
        self
    }

    /// Build the dispatcher over the given transport
    ///
    /// Without a configured base URL the dispatcher issues relative URLs,
    /// which suits transports that sit behind a dev proxy.
    pub fn build(self, transport: Arc<dyn Transport>) -> Dispatcher {
        Dispatcher::new(self.base_url.unwrap_or_default(), transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{TransportFuture, TransportRequest, TransportResponse};

    struct NoopTransport;

    impl Transport for NoopTransport {
        fn send(&self, _request: TransportRequest) -> TransportFuture<'_> {
            Box::pin(async {
                Ok(TransportResponse {
                    status: 204,
                    body: serde_json::Value::Null,
                })
            })
        }
    }

    #[test]
    fn explicit_base_url_wins() {
        let dispatcher = DispatcherBuilder::new()
            .base_url("http://api.internal:8080")
            .build(Arc::new(NoopTransport));
        assert_eq!(dispatcher.base_url(), "http://api.internal:8080");
    }

    #[test]
    fn env_override_falls_back_to_default() {
        let dispatcher = DispatcherBuilder::new()
            .base_url_from_env("SHAPEWIRE_TEST_UNSET_ENDPOINT", "http://localhost:5000")
            .build(Arc::new(NoopTransport));
        assert_eq!(dispatcher.base_url(), "http://localhost:5000");
    }

    #[test]
    fn env_override_takes_precedence_when_set() {
        std::env::set_var("SHAPEWIRE_TEST_SET_ENDPOINT", "http://staging:9000");
        let dispatcher = DispatcherBuilder::new()
            .base_url_from_env("SHAPEWIRE_TEST_SET_ENDPOINT", "http://localhost:5000")
            .build(Arc::new(NoopTransport));
        assert_eq!(dispatcher.base_url(), "http://staging:9000");
        std::env::remove_var("SHAPEWIRE_TEST_SET_ENDPOINT");
    }

    #[test]
    fn unconfigured_builder_issues_relative_urls() {
        let dispatcher = DispatcherBuilder::new().build(Arc::new(NoopTransport));
        assert_eq!(dispatcher.base_url(), "");
    }
}
