//! Async call dispatcher for shapewire
//!
//! This crate turns endpoint descriptors and typed arguments into dispatched
//! calls over a pluggable transport:
//!
//! - **Endpoint descriptors**: generation-time metadata for each operation
//! - **Dispatcher**: encode arguments, send, decode the response or raise
//!   a typed failure
//! - **Transport boundary**: the external collaborator that moves bytes
//! - **Failure mapping**: non-2xx statuses and transport failures become
//!   the uniform error shape from `shapewire-core`
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use shapewire_client::{CallArgs, Dispatcher, Endpoint, Transport};
//! use shapewire_core::Shape;
//!
//! # async fn example(transport: Arc<dyn Transport>) -> shapewire_core::Result<()> {
//! let dispatcher = Dispatcher::builder()
//!     .base_url_from_env("EXAMPLE_API_ENDPOINT", "http://localhost:5000")
//!     .build(transport);
//!
//! let get_foo = Endpoint::get("get_foo", "/api/foo/<foo_id>")
//!     .arg("foo_id", Shape::string())
//!     .returns(Shape::string());
//!
//! let outcome = dispatcher.invoke(&get_foo, CallArgs::new().arg("foo_id", "world")).await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod dispatcher;
pub mod endpoint;
pub mod failure;
pub mod transport;

// Re-export the most commonly used types for convenience
pub use builder::DispatcherBuilder;
pub use dispatcher::{CallArgs, CallOutcome, Dispatcher};
pub use endpoint::{Endpoint, Method};
pub use transport::{Transport, TransportError, TransportFuture, TransportRequest, TransportResponse};
