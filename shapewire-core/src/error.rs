//! Error types for shapewire
//!
//! This module defines the failure taxonomy shared by the codec and the
//! dispatcher:
//!
//! - **ShapeMismatch**: a wire value is structurally incompatible with the
//!   declared shape (wrong arity, wrong primitive kind, unparseable date).
//!   Mismatches are never silently coerced; the error names the offending
//!   position via a [`Path`].
//! - **CallFailure**: a dispatched call completed with a non-2xx status.
//!   It carries the numeric status and the raw response body so callers can
//!   inspect both to decide on recovery.
//! - **Transport**: the transport collaborator failed before any status
//!   existed (connection refused, DNS failure, ...). The cause's description
//!   is preserved.
//!
//! # Propagation Policy
//!
//! All failures reject the in-flight call's outcome. There is no local
//! recovery inside the codec or dispatcher, and no automatic retries:
//! retry policy, if any, belongs to the transport collaborator.
//!
//! # Examples
//!
//! ```rust
//! use shapewire_core::{Error, Path};
//!
//! let err = Error::mismatch(&Path::root().field("when"), "datetime", "number");
//! assert_eq!(err.to_string(), "shape mismatch at $.when: expected datetime, found number");
//! ```

use std::fmt;

use thiserror::Error;

/// Result type for shapewire operations
///
/// Convenience alias used throughout the shapewire crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy for encoding, decoding and dispatching calls
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Wire value structurally incompatible with the declared shape
    ///
    /// Raised by the codec for wrong primitive kinds, tuple arity
    /// mismatches, missing record fields, unparseable dates and
    /// non-invertible mapping keys. `path` names the field/index chain
    /// where the mismatch occurred.
    #[error("shape mismatch at {path}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Field/index chain locating the offending value
        path: Path,
        /// What the shape required at that position
        expected: String,
        /// What was actually there
        found: String,
    },

    /// A dispatched call completed with a non-2xx status
    ///
    /// Carries the original status code and the raw wire body. The core
    /// never retries these; callers inspect status and body.
    #[error("call failed with status {status}")]
    CallFailure {
        /// HTTP status code reported by the transport
        status: u16,
        /// Raw response body, untouched by the codec
        body: serde_json::Value,
    },

    /// Transport-level failure before a response status existed
    #[error("transport error: {0}")]
    Transport(String),
}

impl Error {
    /// Build a `ShapeMismatch` at the given path
    pub fn mismatch(path: &Path, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Error::ShapeMismatch {
            path: path.clone(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// The status code of a failed call, if this is a `CallFailure`
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::CallFailure { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// One step in a [`Path`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Record field, displayed as `.name`
    Field(String),
    /// Tuple or list position, displayed as `[i]`
    Index(usize),
    /// Mapping key, displayed as `["key"]`
    Key(String),
}

/// Field/index chain locating a value inside a nested structure
///
/// Paths are built by the codec while it recurses, so that a mismatch three
/// levels deep reports exactly where it happened, e.g. `$.subField[1]["k"]`.
/// The root alone displays as `$`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<Segment>);

impl Path {
    /// The root path, `$`
    pub fn root() -> Self {
        Path(Vec::new())
    }

    /// Extend with a record field segment
    pub fn field(&self, name: &str) -> Self {
        self.child(Segment::Field(name.to_string()))
    }

    /// Extend with a tuple/list index segment
    pub fn index(&self, index: usize) -> Self {
        self.child(Segment::Index(index))
    }

    /// Extend with a mapping key segment
    pub fn key(&self, key: &str) -> Self {
        self.child(Segment::Key(key.to_string()))
    }

    fn child(&self, segment: Segment) -> Self {
        let mut segments = self.0.clone();
        segments.push(segment);
        Path(segments)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.0 {
            match segment {
                Segment::Field(name) => write!(f, ".{}", name)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
                Segment::Key(key) => write!(f, "[{:?}]", key)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_displays_as_dollar() {
        assert_eq!(Path::root().to_string(), "$");
    }

    #[test]
    fn path_display_chains_segments() {
        let path = Path::root().field("subField").index(1).key("k");
        assert_eq!(path.to_string(), "$.subField[1][\"k\"]");
    }

    #[test]
    fn mismatch_message_names_path() {
        let err = Error::mismatch(&Path::root().index(2), "number", "string");
        assert_eq!(
            err.to_string(),
            "shape mismatch at $[2]: expected number, found string"
        );
    }

    #[test]
    fn call_failure_exposes_status() {
        let err = Error::CallFailure {
            status: 400,
            body: serde_json::Value::Null,
        };
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "call failed with status 400");
    }

    #[test]
    fn non_failure_has_no_status() {
        let err = Error::Transport("connection refused".into());
        assert_eq!(err.status(), None);
    }
}
