//! Transport boundary for the call dispatcher
//!
//! The dispatcher does not implement HTTP. It depends on a request function
//! of shape `(method, url, body?) -> (status, wire body)`, expressed as the
//! [`Transport`] trait. Retries, connection pooling and TLS all belong to
//! the implementing collaborator.
//!
//! # Status vs Transport Failure
//!
//! A completed HTTP exchange is always `Ok(TransportResponse)`, whatever
//! the status code; classifying non-2xx statuses is the failure mapper's
//! job, not the transport's. `Err(TransportError)` is reserved for failures
//! where no status exists at all (connection refused, DNS failure).
//!
//! # Why Box<dyn Future>?
//!
//! Trait methods cannot return `impl Future` while staying object-safe, and
//! the dispatcher stores its transport as `Arc<dyn Transport>`. A boxed,
//! pinned future gives every implementation a uniform return type; the
//! boxing cost is noise next to a network round trip.

use futures::future::BoxFuture;
use thiserror::Error;

use crate::endpoint::Method;

/// Outbound request handed to the transport
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Fully rendered URL (base + substituted path)
    pub url: String,
    /// JSON body, if the endpoint declares one
    pub body: Option<serde_json::Value>,
}

/// Completed response reported by the transport
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code, whatever it was
    pub status: u16,
    /// Raw response body; `Null` when the response had none
    pub body: serde_json::Value,
}

/// Failure below the HTTP layer, before any status existed
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Future returned by [`Transport::send`]
pub type TransportFuture<'a> = BoxFuture<'a, Result<TransportResponse, TransportError>>;

/// External collaborator that actually moves bytes
///
/// Implementations must be `Send + Sync`: one transport instance is shared
/// across all concurrent calls of a dispatcher. The dispatcher itself never
/// retries a send.
pub trait Transport: Send + Sync {
    /// Perform one HTTP exchange
    fn send(&self, request: TransportRequest) -> TransportFuture<'_>;
}
