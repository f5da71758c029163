//! Endpoint descriptors
//!
//! An [`Endpoint`] is generation-time metadata identifying one remote
//! operation: its HTTP method, path pattern, path-argument shapes, optional
//! body shape and optional result shape. Descriptors are produced once by
//! the code generator and are read-only for the process lifetime; the
//! generated functions are thin adapters that pass a descriptor and typed
//! arguments to [`Dispatcher::invoke`](crate::Dispatcher::invoke).
//!
//! # Path Patterns
//!
//! Patterns use `<name>` placeholders (`/api/foo/<foo_id>`), matching the
//! route syntax the original backend framework exposes to the generator.
//!
//! # Examples
//!
//! ```rust
//! use shapewire_client::{Endpoint, Method};
//! use shapewire_core::Shape;
//!
//! let descriptor = Endpoint::get("get_foo", "/api/foo/<foo_id>")
//!     .arg("foo_id", Shape::string())
//!     .returns(Shape::record(vec![]));
//! assert_eq!(descriptor.method, Method::Get);
//! assert!(descriptor.body.is_none());
//! ```

use std::fmt;

use shapewire_core::Shape;

/// HTTP method of a remote operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Uppercase wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generation-time description of one remote operation
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Operation name, used for diagnostics and tracing
    pub name: String,
    /// HTTP method
    pub method: Method,
    /// Path pattern with `<name>` placeholders
    pub path: String,
    /// Path arguments in declaration order, each with its shape
    pub args: Vec<(String, Shape)>,
    /// Body payload shape; `None` means the request carries no body
    pub body: Option<Shape>,
    /// Result shape; `None` means the operation returns nothing
    pub result: Option<Shape>,
}

impl Endpoint {
    /// Create a descriptor with the given method
    pub fn new(name: impl Into<String>, method: Method, path: impl Into<String>) -> Self {
        Endpoint {
            name: name.into(),
            method,
            path: path.into(),
            args: Vec::new(),
            body: None,
            result: None,
        }
    }

    /// GET descriptor
    pub fn get(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::Get, path)
    }

    /// POST descriptor
    pub fn post(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::Post, path)
    }

    /// PUT descriptor
    pub fn put(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::Put, path)
    }

    /// DELETE descriptor
    pub fn delete(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, Method::Delete, path)
    }

    /// Declare a path argument and its shape
    pub fn arg(mut self, name: impl Into<String>, shape: Shape) -> Self {
        self.args.push((name.into(), shape));
        self
    }

    /// Declare a body payload shape
    pub fn with_body(mut self, shape: Shape) -> Self {
        self.body = Some(shape);
        self
    }

    /// Declare the result shape
    pub fn returns(mut self, shape: Shape) -> Self {
        self.result = Some(shape);
        self
    }
}
