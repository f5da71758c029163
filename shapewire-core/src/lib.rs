//! Core marshalling contract for shapewire
//!
//! This crate provides the typed marshalling layer a code generator and its
//! paired runtime must uphold when converting richly-typed client-side
//! values (dates, date-only values, tuples, nullable unions, homogeneous
//! mappings with key transformation) into and out of a JSON wire format:
//!
//! - **Shapes**: a closed tagged-variant description of value structure
//! - **Typed values**: the in-memory counterpart of wire values
//! - **Codec**: total, inverse encode/decode driven recursively by shapes
//! - **Error handling**: the shared `ShapeMismatch`/`CallFailure` taxonomy
//!
//! # Architecture
//!
//! The crate is transport-agnostic: it converts values but does not dictate
//! how they travel. The `shapewire-client` crate builds the call dispatcher
//! and transport boundary on top of this foundation.
//!
//! # Example
//!
//! ```rust
//! use shapewire_core::{codec, Shape, TypedValue};
//!
//! let shape = Shape::nullable(Shape::list(Shape::number()));
//!
//! // Absent values travel as JSON null
//! let wire = codec::encode(&TypedValue::Null, &shape).unwrap();
//! assert!(wire.is_null());
//!
//! // Present values defer to the inner shape
//! let items = TypedValue::list(vec![TypedValue::int(1), TypedValue::int(2)]);
//! let wire = codec::encode(&items, &shape).unwrap();
//! assert_eq!(codec::decode(&wire, &shape).unwrap(), items);
//! ```

pub mod codec;
pub mod error;
pub mod shape;
pub mod value;

// Re-export the most commonly used types for convenience
pub use error::{Error, Path, Result, Segment};
pub use shape::{Field, Identity, MappingTransform, PrimitiveKind, Shape};
pub use value::TypedValue;
