//! Common test utilities for shapewire-client integration tests
//!
//! Provides a mock transport so dispatcher behavior can be tested without
//! a real HTTP stack. The mock records every request it sees and answers
//! with whatever the configured handler returns.

use std::sync::{Arc, Mutex};

use shapewire_client::{
    Transport, TransportError, TransportFuture, TransportRequest, TransportResponse,
};

/// Install a test subscriber once so dispatcher traces show with --nocapture
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Mock transport backed by a synchronous handler function
pub struct MockTransport<F> {
    handler: F,
    requests: Mutex<Vec<TransportRequest>>,
}

impl<F> MockTransport<F>
where
    F: Fn(&TransportRequest) -> Result<TransportResponse, TransportError> + Send + Sync + 'static,
{
    pub fn new(handler: F) -> Arc<Self> {
        Arc::new(MockTransport {
            handler,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Every request the dispatcher has sent so far
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl<F> Transport for MockTransport<F>
where
    F: Fn(&TransportRequest) -> Result<TransportResponse, TransportError> + Send + Sync + 'static,
{
    fn send(&self, request: TransportRequest) -> TransportFuture<'_> {
        self.requests.lock().unwrap().push(request.clone());
        let result = (self.handler)(&request);
        Box::pin(async move { result })
    }
}

/// Successful response with the given body
pub fn ok(body: serde_json::Value) -> Result<TransportResponse, TransportError> {
    Ok(TransportResponse { status: 200, body })
}

/// Completed response with an arbitrary status
pub fn status(status: u16, body: serde_json::Value) -> Result<TransportResponse, TransportError> {
    Ok(TransportResponse { status, body })
}

/// Transport-level failure
pub fn failed(message: &str) -> Result<TransportResponse, TransportError> {
    Err(TransportError(message.to_string()))
}
