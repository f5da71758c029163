//! shapewire - typed marshalling runtime for generated API clients
//!
//! This is the main convenience crate that re-exports the shapewire
//! sub-crates. Use it if you want a single dependency providing both the
//! codec and the dispatcher.
//!
//! # Architecture
//!
//! shapewire is organized into modular crates:
//!
//! - **shapewire-core**: shape descriptions, typed values, the recursive
//!   wire codec and the error taxonomy
//! - **shapewire-client**: endpoint descriptors, the async call dispatcher
//!   over a pluggable transport, and failure mapping
//!
//! Generated bindings are thin adapters over this runtime: each generated
//! function supplies an endpoint descriptor plus typed arguments to
//! [`Dispatcher::invoke`] and returns or raises based on the call outcome.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use shapewire::{CallArgs, Dispatcher, Endpoint, Shape, TypedValue};
//!
//! # async fn example(transport: Arc<dyn shapewire::client::Transport>) -> shapewire::Result<()> {
//! let dispatcher = Dispatcher::builder()
//!     .base_url_from_env("EXAMPLE_API_ENDPOINT", "http://localhost:5000")
//!     .build(transport);
//!
//! let reverse = Endpoint::post("reverse", "/api/reverse")
//!     .with_body(Shape::list(Shape::number()))
//!     .returns(Shape::list(Shape::number()));
//!
//! let items = TypedValue::list(vec![TypedValue::int(37), TypedValue::int(13)]);
//! let outcome = dispatcher
//!     .invoke(&reverse, CallArgs::new().with_body(items))
//!     .await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

// Re-export all public APIs from sub-crates
pub use shapewire_client as client;
pub use shapewire_core as core;

// Convenience re-exports of the most commonly used types
pub use shapewire_client::{CallArgs, CallOutcome, Dispatcher, DispatcherBuilder, Endpoint, Method};
pub use shapewire_core::{codec, Error, Field, MappingTransform, Result, Shape, TypedValue};
