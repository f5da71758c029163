//! Failure propagation integration tests
//!
//! Non-2xx statuses and transport-level failures must always reject the
//! call outcome, never resolve to something that looks like a successful
//! decode.

mod common;

use common::{failed, ok, status, MockTransport};
use serde_json::json;
use shapewire_client::{CallArgs, Dispatcher, Endpoint};
use shapewire_core::{Error, Shape, TypedValue};

#[tokio::test]
async fn status_400_rejects_with_call_failure() {
    common::init_tracing();
    let transport = MockTransport::new(|_req| status(400, serde_json::Value::Null));
    let dispatcher = Dispatcher::new("", transport);

    let endpoint = Endpoint::get("failing", "/api/failing");
    let err = dispatcher
        .invoke(&endpoint, CallArgs::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert!(matches!(err, Error::CallFailure { status: 400, .. }));
}

#[tokio::test]
async fn failure_body_is_preserved_raw() {
    let transport = MockTransport::new(|_req| status(404, json!({"detail": "no such foo"})));
    let dispatcher = Dispatcher::new("", transport);

    let endpoint = Endpoint::get("get_foo", "/api/foo/<foo_id>")
        .arg("foo_id", Shape::string())
        .returns(Shape::string());

    let err = dispatcher
        .invoke(&endpoint, CallArgs::new().arg("foo_id", "nope"))
        .await
        .unwrap_err();

    match err {
        Error::CallFailure { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, json!({"detail": "no such foo"}));
        }
        other => panic!("expected CallFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn non_2xx_never_decodes_a_result() {
    // Even when the body would decode cleanly under the result shape,
    // a failed status must reject the outcome.
    let transport = MockTransport::new(|_req| status(500, json!("looks fine")));
    let dispatcher = Dispatcher::new("", transport);

    let endpoint = Endpoint::get("greet", "/api/greet").returns(Shape::string());
    let err = dispatcher
        .invoke(&endpoint, CallArgs::new())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn transport_failure_rejects_with_transport_error() {
    let transport = MockTransport::new(|_req| failed("connection refused"));
    let dispatcher = Dispatcher::new("", transport);

    let endpoint = Endpoint::get("greet", "/api/greet").returns(Shape::string());
    let err = dispatcher
        .invoke(&endpoint, CallArgs::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.to_string(), "transport error: connection refused");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn void_endpoint_still_fails_on_bad_status() {
    let transport = MockTransport::new(|_req| status(400, serde_json::Value::Null));
    let dispatcher = Dispatcher::new("", transport);

    let endpoint = Endpoint::post("only_inject", "/api/raw").with_body(Shape::string());
    let err = dispatcher
        .invoke(&endpoint, CallArgs::new().with_body(TypedValue::str("x")))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
}

#[tokio::test]
async fn success_and_failure_are_distinguishable_for_nullable_results() {
    // A nullable result legitimately decoding to null is Ok; a failed call
    // is Err. The two can never be confused.
    let transport = MockTransport::new(|req| {
        if req.url.ends_with("/ok") {
            ok(serde_json::Value::Null)
        } else {
            status(400, serde_json::Value::Null)
        }
    });
    let dispatcher = Dispatcher::new("", transport);

    let shape = Shape::nullable(Shape::string());
    let good = Endpoint::get("good", "/api/ok").returns(shape.clone());
    let bad = Endpoint::get("bad", "/api/bad").returns(shape);

    let outcome = dispatcher.invoke(&good, CallArgs::new()).await.unwrap();
    assert_eq!(outcome.into_value(), Some(TypedValue::Null));

    let err = dispatcher.invoke(&bad, CallArgs::new()).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
}
