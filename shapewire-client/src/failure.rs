//! Failure mapping for completed and failed exchanges
//!
//! Translates transport outcomes into the uniform error shape of
//! [`shapewire_core::Error`]:
//!
//! - a completed non-2xx response becomes [`Error::CallFailure`], carrying
//!   the original status and the raw body for the caller to inspect;
//! - a transport-level failure becomes [`Error::Transport`], preserving the
//!   cause's description.
//!
//! Failures are never swallowed and never converted into a sentinel
//! success value; the dispatcher surfaces every one of them as a rejected
//! call outcome.

use shapewire_core::Error;

use crate::transport::{TransportError, TransportResponse};

/// Whether a status code counts as success (2xx class)
pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Map a completed non-2xx response to a `CallFailure`
///
/// The body is carried through untouched so callers can inspect whatever
/// the backend reported, structured or not.
pub fn from_response(response: TransportResponse) -> Error {
    Error::CallFailure {
        status: response.status,
        body: response.body,
    }
}

impl From<TransportError> for Error {
    fn from(error: TransportError) -> Self {
        Error::Transport(error.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_2xx_counts_as_success() {
        assert!(is_success(200));
        assert!(is_success(201));
        assert!(is_success(299));
        assert!(!is_success(199));
        assert!(!is_success(300));
        assert!(!is_success(400));
        assert!(!is_success(500));
    }

    #[test]
    fn failure_carries_status_and_raw_body() {
        let err = from_response(TransportResponse {
            status: 400,
            body: json!({"detail": "bad input"}),
        });
        match err {
            Error::CallFailure { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, json!({"detail": "bad input"}));
            }
            other => panic!("expected CallFailure, got {:?}", other),
        }
    }

    #[test]
    fn transport_error_preserves_cause() {
        let err: Error = TransportError("connection refused".into()).into();
        assert_eq!(err.to_string(), "transport error: connection refused");
    }
}
