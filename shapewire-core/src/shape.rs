//! Shape descriptions driving encode and decode
//!
//! A [`Shape`] is a declarative description of a value's structure. The
//! codec walks a value against its shape with one rule per variant, composed
//! recursively, so arbitrarily nested combinations (tuples of records
//! containing nullable mappings of dates) need no special-casing.
//!
//! # Closed Set of Kinds
//!
//! Shapes form a closed tagged-variant type rather than scattered runtime
//! type checks. Adding a new kind is a localized change: one variant here,
//! one encode rule and one decode rule in the codec.
//!
//! # Generation Time vs Run Time
//!
//! Shapes are normally produced once by a code generator alongside the
//! endpoint descriptors and are read-only for the process lifetime. Nothing
//! stops hand-writing them, which is what the tests do.
//!
//! # Examples
//!
//! ```rust
//! use shapewire_core::Shape;
//!
//! // [date, number], heterogeneous tuple elements are supported
//! let pair = Shape::tuple(vec![Shape::date(), Shape::number()]);
//! let shape = Shape::nullable(Shape::list(pair));
//! ```

use std::fmt;
use std::sync::Arc;

/// Directly JSON-compatible leaf kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// UTF-8 string
    String,
    /// JSON number (integer or float)
    Number,
    /// Boolean
    Bool,
}

impl PrimitiveKind {
    /// Kind name used in mismatch diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Number => "number",
            PrimitiveKind::Bool => "boolean",
        }
    }
}

/// Pluggable, invertible key/value transform for mapping shapes
///
/// The exact transform functions are generator-specific conventions (for
/// example suffixing every key), so the runtime treats them as configuration
/// rather than hard-coded behavior. `encode_key` and `decode_key` must be
/// exact inverses over the keys actually produced; the value hooks operate
/// on already-encoded wire values and default to identity.
///
/// Returning `None` from a decode hook marks the input as something the
/// encode side could never have produced, which the codec surfaces as a
/// shape mismatch at that key.
pub trait MappingTransform: Send + Sync {
    /// Transform an in-memory key to its wire form
    fn encode_key(&self, key: &str) -> String;

    /// Reverse [`encode_key`](Self::encode_key); `None` if the wire key is
    /// not in the transform's image
    fn decode_key(&self, wire_key: &str) -> Option<String>;

    /// Post-process an encoded mapping value before it goes on the wire
    fn encode_value(&self, value: serde_json::Value) -> serde_json::Value {
        value
    }

    /// Reverse [`encode_value`](Self::encode_value) before the value shape
    /// decodes it; `None` if the wire value is not in the transform's image
    fn decode_value(&self, wire: serde_json::Value) -> Option<serde_json::Value> {
        Some(wire)
    }
}

/// The no-op transform: keys and values pass through unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl MappingTransform for Identity {
    fn encode_key(&self, key: &str) -> String {
        key.to_string()
    }

    fn decode_key(&self, wire_key: &str) -> Option<String> {
        Some(wire_key.to_string())
    }
}

/// One named field of a record shape
///
/// `wire_name` is the key used in the JSON object. The original bindings
/// rename snake_case fields to camelCase at generation time; the runtime
/// only applies whatever name was recorded.
#[derive(Debug, Clone)]
pub struct Field {
    /// In-memory field name
    pub name: String,
    /// Key used on the wire
    pub wire_name: String,
    /// Shape of the field's value
    pub shape: Shape,
}

impl Field {
    /// Create a field with distinct in-memory and wire names
    pub fn new(name: impl Into<String>, wire_name: impl Into<String>, shape: Shape) -> Self {
        Field {
            name: name.into(),
            wire_name: wire_name.into(),
            shape,
        }
    }
}

/// Declarative description of a value's structure
///
/// See the module docs for the design rationale. Shapes are cheap to clone;
/// mapping transforms are shared behind an `Arc`.
#[derive(Clone)]
pub enum Shape {
    /// JSON-native leaf value
    Primitive(PrimitiveKind),
    /// Absolute instant, ISO-8601 string with timezone on the wire
    DateTime,
    /// Calendar date with no time-of-day, `YYYY-MM-DD` on the wire
    Date,
    /// Fixed-arity JSON array with per-position element shapes
    Tuple(Vec<Shape>),
    /// Explicitly optional value; wire `null` means absent
    Nullable(Box<Shape>),
    /// Homogeneous JSON array
    List(Box<Shape>),
    /// Homogeneous JSON object with transformed keys
    Mapping {
        /// Key/value transform applied around the value shape
        transform: Arc<dyn MappingTransform>,
        /// Shape of every mapping value
        value: Box<Shape>,
    },
    /// JSON object with a fixed set of named fields
    Record(Vec<Field>),
}

impl Shape {
    /// String primitive
    pub fn string() -> Self {
        Shape::Primitive(PrimitiveKind::String)
    }

    /// Number primitive
    pub fn number() -> Self {
        Shape::Primitive(PrimitiveKind::Number)
    }

    /// Boolean primitive
    pub fn boolean() -> Self {
        Shape::Primitive(PrimitiveKind::Bool)
    }

    /// Absolute instant
    pub fn datetime() -> Self {
        Shape::DateTime
    }

    /// Calendar date
    pub fn date() -> Self {
        Shape::Date
    }

    /// Fixed-arity tuple with heterogeneous element shapes
    pub fn tuple(elements: Vec<Shape>) -> Self {
        Shape::Tuple(elements)
    }

    /// Optional wrapper around an inner shape
    pub fn nullable(inner: Shape) -> Self {
        Shape::Nullable(Box::new(inner))
    }

    /// Homogeneous list
    pub fn list(element: Shape) -> Self {
        Shape::List(Box::new(element))
    }

    /// Mapping with a configured key/value transform
    pub fn mapping(transform: impl MappingTransform + 'static, value: Shape) -> Self {
        Shape::Mapping {
            transform: Arc::new(transform),
            value: Box::new(value),
        }
    }

    /// Record with named fields
    pub fn record(fields: Vec<Field>) -> Self {
        Shape::Record(fields)
    }

    /// Kind name used in mismatch diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Primitive(kind) => kind.name(),
            Shape::DateTime => "datetime",
            Shape::Date => "date",
            Shape::Tuple(_) => "tuple",
            Shape::Nullable(_) => "nullable",
            Shape::List(_) => "list",
            Shape::Mapping { .. } => "mapping",
            Shape::Record(_) => "record",
        }
    }
}

// Hand-written because `Arc<dyn MappingTransform>` has no useful Debug.
impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Primitive(kind) => f.debug_tuple("Primitive").field(kind).finish(),
            Shape::DateTime => write!(f, "DateTime"),
            Shape::Date => write!(f, "Date"),
            Shape::Tuple(elements) => f.debug_tuple("Tuple").field(elements).finish(),
            Shape::Nullable(inner) => f.debug_tuple("Nullable").field(inner).finish(),
            Shape::List(element) => f.debug_tuple("List").field(element).finish(),
            Shape::Mapping { value, .. } => f
                .debug_struct("Mapping")
                .field("value", value)
                .finish_non_exhaustive(),
            Shape::Record(fields) => f.debug_tuple("Record").field(fields).finish(),
        }
    }
}
