//! Call dispatcher
//!
//! Builds an outbound request from a typed argument set, hands it to the
//! transport, and either decodes the typed response or surfaces a typed
//! failure.
//!
//! # Call Lifecycle
//!
//! 1. **Render**: path arguments are encoded under their declared shapes
//!    and substituted into the path pattern
//! 2. **Encode**: the body payload, if declared, is encoded under the body
//!    shape
//! 3. **Send**: the request goes to the transport; the future suspends
//!    without blocking other in-flight calls
//! 4. **Classify**: non-2xx responses and transport failures become errors
//!    via the failure mapper
//! 5. **Decode**: 2xx responses are decoded under the result shape, or
//!    resolve to [`CallOutcome::Void`] when no result shape is declared
//!
//! # Concurrency
//!
//! `Dispatcher` is cheaply cloneable (the transport is shared behind an
//! `Arc`) and holds no per-call state between invocations, so one instance
//! can serve any number of concurrent calls without locking. Completion
//! order of concurrent calls is unspecified; callers needing ordering must
//! await one call before issuing the next.

use std::sync::Arc;

use serde_json::Value;
use shapewire_core::{codec, Error, Path, Result, TypedValue};

use crate::builder::DispatcherBuilder;
use crate::endpoint::Endpoint;
use crate::failure;
use crate::transport::{Transport, TransportRequest};

/// Typed arguments for one invocation
///
/// Path arguments are matched to the endpoint's declarations by name; the
/// body value is encoded under the endpoint's body shape.
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    path_args: Vec<(String, TypedValue)>,
    body: Option<TypedValue>,
}

impl CallArgs {
    /// Empty argument set
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a path argument value
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<TypedValue>) -> Self {
        self.path_args.push((name.into(), value.into()));
        self
    }

    /// Supply the body payload value
    pub fn with_body(mut self, value: TypedValue) -> Self {
        self.body = Some(value);
        self
    }

    fn path_arg(&self, name: &str) -> Option<&TypedValue> {
        self.path_args
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}

/// Outcome of a successfully dispatched call
///
/// Endpoints that declare no result shape resolve to `Void`, which is
/// distinguishable from any decoded value, including a legitimately
/// decoded `TypedValue::Null` from a nullable result shape.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    /// Decoded response under the endpoint's result shape
    Value(TypedValue),
    /// The endpoint declares no result
    Void,
}

impl CallOutcome {
    /// Whether this is the explicit void outcome
    pub fn is_void(&self) -> bool {
        matches!(self, CallOutcome::Void)
    }

    /// The decoded value, if any
    pub fn into_value(self) -> Option<TypedValue> {
        match self {
            CallOutcome::Value(value) => Some(value),
            CallOutcome::Void => None,
        }
    }
}

/// Dispatches typed calls over a pluggable transport
///
/// The base URL is explicit construction-time state, not process-wide
/// configuration; see [`DispatcherBuilder`] for environment-style
/// resolution.
#[derive(Clone)]
pub struct Dispatcher {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    /// Create a dispatcher with an explicit base URL
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Dispatcher {
            base_url: base_url.into(),
            transport,
        }
    }

    /// Start building a dispatcher
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Invoke one remote operation
    ///
    /// # Errors
    ///
    /// - [`Error::ShapeMismatch`] if arguments or the response body do not
    ///   conform to the endpoint's declared shapes
    /// - [`Error::CallFailure`] for a completed non-2xx response, carrying
    ///   the status and raw body
    /// - [`Error::Transport`] when the exchange failed below the HTTP layer
    #[tracing::instrument(skip(self, endpoint, args), fields(endpoint = %endpoint.name))]
    pub async fn invoke(&self, endpoint: &Endpoint, args: CallArgs) -> Result<CallOutcome> {
        let url = self.render_url(endpoint, &args)?;
        let body = encode_body(endpoint, &args)?;

        tracing::debug!(method = %endpoint.method, %url, "sending request");
        let response = self
            .transport
            .send(TransportRequest {
                method: endpoint.method,
                url,
                body,
            })
            .await
            .map_err(Error::from)?;
        tracing::debug!(status = response.status, "response received");

        if !failure::is_success(response.status) {
            return Err(failure::from_response(response));
        }

        match &endpoint.result {
            None => Ok(CallOutcome::Void),
            Some(shape) => codec::decode(&response.body, shape).map(CallOutcome::Value),
        }
    }

    fn render_url(&self, endpoint: &Endpoint, args: &CallArgs) -> Result<String> {
        let mut path = endpoint.path.clone();
        for (name, shape) in &endpoint.args {
            let arg_path = Path::root().field(name);
            let value = args
                .path_arg(name)
                .ok_or_else(|| Error::mismatch(&arg_path, shape.kind_name(), "missing argument"))?;
            let wire = codec::encode(value, shape)?;
            let rendered = render_segment(&wire)
                .ok_or_else(|| Error::mismatch(&arg_path, "primitive path argument", value.kind_name()))?;
            path = path.replace(&format!("<{}>", name), &rendered);
        }
        Ok(format!("{}{}", self.base_url, path))
    }
}

fn encode_body(endpoint: &Endpoint, args: &CallArgs) -> Result<Option<Value>> {
    let body_path = Path::root().field("body");
    match (&endpoint.body, &args.body) {
        (Some(shape), Some(value)) => codec::encode(value, shape).map(Some),
        (Some(shape), None) => Err(Error::mismatch(&body_path, shape.kind_name(), "missing body")),
        (None, Some(value)) => Err(Error::mismatch(&body_path, "no body", value.kind_name())),
        (None, None) => Ok(None),
    }
}

// Only primitive wire values can appear in a path.
fn render_segment(wire: &Value) -> Option<String> {
    match wire {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapewire_core::Shape;

    #[test]
    fn call_args_finds_named_arg() {
        let args = CallArgs::new().arg("foo_id", "world").arg("n", 3i64);
        assert_eq!(args.path_arg("n"), Some(&TypedValue::int(3)));
        assert_eq!(args.path_arg("missing"), None);
    }

    #[test]
    fn void_outcome_is_not_a_value() {
        assert!(CallOutcome::Void.is_void());
        assert_eq!(CallOutcome::Void.into_value(), None);
        // A nullable result legitimately decoding to Null is still a value
        let null_result = CallOutcome::Value(TypedValue::Null);
        assert!(!null_result.is_void());
        assert_eq!(null_result.into_value(), Some(TypedValue::Null));
    }

    #[test]
    fn body_required_but_missing_is_a_mismatch() {
        let endpoint = Endpoint::post("create", "/api/bar").with_body(Shape::string());
        let err = encode_body(&endpoint, &CallArgs::new()).unwrap_err();
        assert!(err.to_string().contains("missing body"));
    }

    #[test]
    fn unexpected_body_is_a_mismatch() {
        let endpoint = Endpoint::get("fetch", "/api/bar");
        let args = CallArgs::new().with_body(TypedValue::str("x"));
        let err = encode_body(&endpoint, &args).unwrap_err();
        assert!(err.to_string().contains("expected no body"));
    }

    #[test]
    fn path_segments_render_primitives_only() {
        assert_eq!(render_segment(&serde_json::json!("abc")), Some("abc".into()));
        assert_eq!(render_segment(&serde_json::json!(17)), Some("17".into()));
        assert_eq!(render_segment(&serde_json::json!(true)), Some("true".into()));
        assert_eq!(render_segment(&serde_json::json!([1])), None);
    }
}
