//! Shape-driven codec between typed values and wire values
//!
//! This module is the heart of the marshalling contract: a pair of total,
//! inverse functions converting between [`TypedValue`] and JSON wire values
//! under a [`Shape`].
//!
//! # How Dispatch Works
//!
//! Both directions recurse structurally over the shape with exactly one
//! rule per shape kind. Container rules re-enter [`encode`]/[`decode`] for
//! their children, so any nesting depth works without special-casing
//! combinations. The recursion threads a [`Path`] so a failure deep inside
//! a structure reports the exact field/index chain.
//!
//! # Round Trip Invariant
//!
//! For every shape `S` and conforming value `V`,
//! `decode(&encode(&V, &S)?, &S)? == V` under the domain's semantic
//! equality: instant equality for datetimes, calendar-date equality for
//! dates, element-wise equality for tuples and lists, key-set plus
//! association equality for mappings after the reverse key transform.
//!
//! # Purity
//!
//! Both functions are pure and stateless; they are safely reusable across
//! concurrent calls without locking.
//!
//! # Examples
//!
//! ```rust
//! use shapewire_core::{codec, Shape, TypedValue};
//!
//! let shape = Shape::tuple(vec![Shape::string(), Shape::number()]);
//! let value = TypedValue::tuple(vec![TypedValue::str("a"), TypedValue::int(7)]);
//!
//! let wire = codec::encode(&value, &shape).unwrap();
//! assert_eq!(wire, serde_json::json!(["a", 7]));
//! assert_eq!(codec::decode(&wire, &shape).unwrap(), value);
//! ```

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::error::{Error, Path, Result};
use crate::shape::{PrimitiveKind, Shape};
use crate::value::TypedValue;

/// Encode a typed value to its JSON wire form under the given shape
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] when the value does not conform to the
/// shape (wrong variant, wrong tuple arity, missing record field).
pub fn encode(value: &TypedValue, shape: &Shape) -> Result<Value> {
    encode_at(value, shape, &Path::root())
}

/// Decode a JSON wire value to a typed value under the given shape
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] when the wire value is structurally
/// incompatible with the shape: wrong primitive kind, wrong arity,
/// unparseable date string, missing record field, or a mapping key/value
/// outside the transform's image. Decoding is all-or-nothing; a partial
/// value is never produced.
pub fn decode(wire: &Value, shape: &Shape) -> Result<TypedValue> {
    decode_at(wire, shape, &Path::root())
}

fn encode_at(value: &TypedValue, shape: &Shape, path: &Path) -> Result<Value> {
    match shape {
        Shape::Primitive(kind) => match (kind, value) {
            (PrimitiveKind::String, TypedValue::String(s)) => Ok(Value::String(s.clone())),
            (PrimitiveKind::Number, TypedValue::Number(n)) => Ok(Value::Number(n.clone())),
            (PrimitiveKind::Bool, TypedValue::Bool(b)) => Ok(Value::Bool(*b)),
            _ => Err(Error::mismatch(path, kind.name(), value.kind_name())),
        },
        Shape::DateTime => match value {
            TypedValue::DateTime(instant) => Ok(Value::String(format_instant(instant))),
            _ => Err(Error::mismatch(path, "datetime", value.kind_name())),
        },
        Shape::Date => match value {
            TypedValue::Date(date) => Ok(Value::String(date.format("%Y-%m-%d").to_string())),
            _ => Err(Error::mismatch(path, "date", value.kind_name())),
        },
        Shape::Tuple(elements) => match value {
            TypedValue::Tuple(items) => {
                if items.len() != elements.len() {
                    return Err(arity_mismatch(path, elements.len(), items.len()));
                }
                let encoded = items
                    .iter()
                    .zip(elements)
                    .enumerate()
                    .map(|(i, (item, element))| encode_at(item, element, &path.index(i)))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Value::Array(encoded))
            }
            _ => Err(Error::mismatch(path, "tuple", value.kind_name())),
        },
        Shape::Nullable(inner) => match value {
            TypedValue::Null => Ok(Value::Null),
            present => encode_at(present, inner, path),
        },
        Shape::List(element) => match value {
            TypedValue::List(items) => {
                let encoded = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| encode_at(item, element, &path.index(i)))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Value::Array(encoded))
            }
            _ => Err(Error::mismatch(path, "list", value.kind_name())),
        },
        Shape::Mapping { transform, value: value_shape } => match value {
            TypedValue::Mapping(entries) => {
                let mut wire = Map::new();
                for (key, item) in entries {
                    let encoded = encode_at(item, value_shape, &path.key(key))?;
                    wire.insert(transform.encode_key(key), transform.encode_value(encoded));
                }
                Ok(Value::Object(wire))
            }
            _ => Err(Error::mismatch(path, "mapping", value.kind_name())),
        },
        Shape::Record(fields) => match value {
            TypedValue::Record(entries) => {
                let mut wire = Map::new();
                for field in fields {
                    let field_path = path.field(&field.name);
                    let item = entries
                        .get(&field.name)
                        .ok_or_else(|| Error::mismatch(&field_path, field.shape.kind_name(), "missing field"))?;
                    wire.insert(field.wire_name.clone(), encode_at(item, &field.shape, &field_path)?);
                }
                Ok(Value::Object(wire))
            }
            _ => Err(Error::mismatch(path, "record", value.kind_name())),
        },
    }
}

fn decode_at(wire: &Value, shape: &Shape, path: &Path) -> Result<TypedValue> {
    match shape {
        Shape::Primitive(kind) => match (kind, wire) {
            (PrimitiveKind::String, Value::String(s)) => Ok(TypedValue::String(s.clone())),
            (PrimitiveKind::Number, Value::Number(n)) => Ok(TypedValue::Number(n.clone())),
            (PrimitiveKind::Bool, Value::Bool(b)) => Ok(TypedValue::Bool(*b)),
            _ => Err(Error::mismatch(path, kind.name(), wire_kind(wire))),
        },
        Shape::DateTime => match wire {
            Value::String(s) => parse_instant(s)
                .map(TypedValue::DateTime)
                .ok_or_else(|| Error::mismatch(path, "ISO-8601 instant", format!("{:?}", s))),
            _ => Err(Error::mismatch(path, "ISO-8601 instant", wire_kind(wire))),
        },
        Shape::Date => match wire {
            Value::String(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(TypedValue::Date)
                .map_err(|_| Error::mismatch(path, "ISO-8601 calendar date", format!("{:?}", s))),
            _ => Err(Error::mismatch(path, "ISO-8601 calendar date", wire_kind(wire))),
        },
        Shape::Tuple(elements) => match wire {
            Value::Array(items) => {
                if items.len() != elements.len() {
                    return Err(arity_mismatch(path, elements.len(), items.len()));
                }
                let decoded = items
                    .iter()
                    .zip(elements)
                    .enumerate()
                    .map(|(i, (item, element))| decode_at(item, element, &path.index(i)))
                    .collect::<Result<Vec<_>>>()?;
                Ok(TypedValue::Tuple(decoded))
            }
            _ => Err(Error::mismatch(path, "tuple", wire_kind(wire))),
        },
        Shape::Nullable(inner) => match wire {
            Value::Null => Ok(TypedValue::Null),
            present => decode_at(present, inner, path),
        },
        Shape::List(element) => match wire {
            Value::Array(items) => {
                let decoded = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| decode_at(item, element, &path.index(i)))
                    .collect::<Result<Vec<_>>>()?;
                Ok(TypedValue::List(decoded))
            }
            _ => Err(Error::mismatch(path, "list", wire_kind(wire))),
        },
        Shape::Mapping { transform, value: value_shape } => match wire {
            Value::Object(entries) => {
                let mut decoded = std::collections::BTreeMap::new();
                for (wire_key, wire_value) in entries {
                    let key_path = path.key(wire_key);
                    let key = transform
                        .decode_key(wire_key)
                        .ok_or_else(|| Error::mismatch(&key_path, "transformed mapping key", format!("{:?}", wire_key)))?;
                    let raw = transform
                        .decode_value(wire_value.clone())
                        .ok_or_else(|| Error::mismatch(&key_path, "transformed mapping value", wire_kind(wire_value)))?;
                    let item = decode_at(&raw, value_shape, &path.key(&key))?;
                    // A transform that is not invertible over this key set
                    // would silently drop an association; reject instead.
                    if decoded.insert(key, item).is_some() {
                        return Err(Error::mismatch(
                            &key_path,
                            "unique key after reverse transform",
                            format!("{:?}", wire_key),
                        ));
                    }
                }
                Ok(TypedValue::Mapping(decoded))
            }
            _ => Err(Error::mismatch(path, "mapping", wire_kind(wire))),
        },
        Shape::Record(fields) => match wire {
            Value::Object(entries) => {
                let mut decoded = std::collections::BTreeMap::new();
                for field in fields {
                    let field_path = path.field(&field.name);
                    let item = entries
                        .get(&field.wire_name)
                        .ok_or_else(|| Error::mismatch(&field_path, field.shape.kind_name(), "missing field"))?;
                    decoded.insert(field.name.clone(), decode_at(item, &field.shape, &field_path)?);
                }
                Ok(TypedValue::Record(decoded))
            }
            _ => Err(Error::mismatch(path, "record", wire_kind(wire))),
        },
    }
}

// UTC `Z` suffix always; sub-second digits only when the instant has them,
// so whole-second instants keep the compact `2020-02-01T03:02:01Z` form.
fn format_instant(instant: &DateTime<Utc>) -> String {
    if instant.timestamp_subsec_nanos() == 0 {
        instant.to_rfc3339_opts(SecondsFormat::Secs, true)
    } else {
        instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

// Accepts any RFC 3339 offset and normalizes to the same absolute instant.
fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

fn arity_mismatch(path: &Path, expected: usize, actual: usize) -> Error {
    Error::mismatch(
        path,
        format!("tuple of arity {}", expected),
        format!("{} elements", actual),
    )
}

fn wire_kind(wire: &Value) -> &'static str {
    match wire {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
