//! Richly-typed in-memory values
//!
//! [`TypedValue`] is the client-side counterpart of a wire value: dates are
//! real `chrono` types rather than strings, tuples and lists are distinct,
//! and absence is the explicit [`TypedValue::Null`] variant rather than a
//! value inferred to be missing from its runtime shape.
//!
//! # Equality
//!
//! The derived `PartialEq` is the domain's semantic equality: two instants
//! are equal iff they denote the same point in time, calendar dates compare
//! by date alone, containers compare element-wise, and mappings/records
//! compare by key set and association (ordering is irrelevant, the backing
//! store is a `BTreeMap`).
//!
//! # Lifecycle
//!
//! Typed values are created per call and discarded after the call
//! completes; nothing here holds persistent state.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Number;

/// A value tagged with enough structure to be encoded under a shape
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// UTF-8 string
    String(String),
    /// JSON number (integer or float)
    Number(Number),
    /// Boolean
    Bool(bool),
    /// Absolute instant
    DateTime(DateTime<Utc>),
    /// Calendar date, no time-of-day
    Date(NaiveDate),
    /// Fixed-arity heterogeneous sequence
    Tuple(Vec<TypedValue>),
    /// Homogeneous sequence
    List(Vec<TypedValue>),
    /// Homogeneous string-keyed mapping
    Mapping(BTreeMap<String, TypedValue>),
    /// Named fields, keyed by their in-memory names
    Record(BTreeMap<String, TypedValue>),
    /// The absent value of a nullable shape
    Null,
}

impl TypedValue {
    /// String value
    pub fn str(value: impl Into<String>) -> Self {
        TypedValue::String(value.into())
    }

    /// Integer number value
    pub fn int(value: i64) -> Self {
        TypedValue::Number(Number::from(value))
    }

    /// Float number value
    ///
    /// Non-finite floats have no JSON representation and become `Null`,
    /// matching `serde_json`'s own behavior.
    pub fn float(value: f64) -> Self {
        Number::from_f64(value).map_or(TypedValue::Null, TypedValue::Number)
    }

    /// Tuple value
    pub fn tuple(items: Vec<TypedValue>) -> Self {
        TypedValue::Tuple(items)
    }

    /// List value
    pub fn list(items: Vec<TypedValue>) -> Self {
        TypedValue::List(items)
    }

    /// Mapping value from key/value pairs
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TypedValue)>,
    {
        TypedValue::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    /// Record value from field name/value pairs
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TypedValue)>,
    {
        TypedValue::Record(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v))
                .collect(),
        )
    }

    /// Kind name used in mismatch diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypedValue::String(_) => "string",
            TypedValue::Number(_) => "number",
            TypedValue::Bool(_) => "boolean",
            TypedValue::DateTime(_) => "datetime",
            TypedValue::Date(_) => "date",
            TypedValue::Tuple(_) => "tuple",
            TypedValue::List(_) => "list",
            TypedValue::Mapping(_) => "mapping",
            TypedValue::Record(_) => "record",
            TypedValue::Null => "null",
        }
    }
}

// Conversions mirroring the ergonomics of the wire types: callers can pass
// plain Rust values wherever a TypedValue is expected.

impl From<&str> for TypedValue {
    fn from(value: &str) -> Self {
        TypedValue::String(value.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(value: String) -> Self {
        TypedValue::String(value)
    }
}

impl From<i64> for TypedValue {
    fn from(value: i64) -> Self {
        TypedValue::int(value)
    }
}

impl From<bool> for TypedValue {
    fn from(value: bool) -> Self {
        TypedValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for TypedValue {
    fn from(value: DateTime<Utc>) -> Self {
        TypedValue::DateTime(value)
    }
}

impl From<NaiveDate> for TypedValue {
    fn from(value: NaiveDate) -> Self {
        TypedValue::Date(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_equality_ignores_insertion_order() {
        let a = TypedValue::mapping([("x", TypedValue::int(1)), ("y", TypedValue::int(2))]);
        let b = TypedValue::mapping([("y", TypedValue::int(2)), ("x", TypedValue::int(1))]);
        assert_eq!(a, b);
    }

    #[test]
    fn tuple_equality_is_positional() {
        let a = TypedValue::tuple(vec![TypedValue::int(1), TypedValue::int(2)]);
        let b = TypedValue::tuple(vec![TypedValue::int(2), TypedValue::int(1)]);
        assert_ne!(a, b);
    }

    #[test]
    fn non_finite_float_becomes_null() {
        assert_eq!(TypedValue::float(f64::NAN), TypedValue::Null);
        assert_eq!(TypedValue::float(2.5), TypedValue::Number(Number::from_f64(2.5).unwrap()));
    }

    #[test]
    fn from_impls_produce_expected_variants() {
        assert_eq!(TypedValue::from("hi"), TypedValue::str("hi"));
        assert_eq!(TypedValue::from(5i64), TypedValue::int(5));
        assert_eq!(TypedValue::from(true), TypedValue::Bool(true));
    }
}
