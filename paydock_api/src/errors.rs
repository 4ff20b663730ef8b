//! Error types for the API client.

use crate::types::ErrorResponse;

/// Errors that can occur when making API requests.
///
/// A failed dispatch is either [`Error::Timeout`] (nothing came back from the
/// server) or [`Error::Response`] (the server rejected the request and said
/// why). The remaining variants cover failures on either side of that
/// exchange: bad configuration or credentials before any I/O, an error body
/// that was not the expected JSON shape, a body that was not UTF-8, or a
/// success body that did not match the target type.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No response was received (connection failure, reset, or timeout).
    #[error("Request timed out or no response was received")]
    Timeout {
        #[source]
        source: Option<reqwest::Error>,
    },
    /// The API returned a non-success status with a structured error payload.
    #[error("Request failed with status {status}: {}", .error.error.message)]
    Response { status: u16, error: ErrorResponse },
    /// The API returned a non-success status but the body was not a valid error payload.
    #[error("Request failed with status {status} and an unreadable error body")]
    ErrorPayload {
        status: u16,
        body: String,
        #[source]
        source: serde_json::Error,
    },
    /// A success response could not be deserialized into the requested type.
    #[error("Failed to deserialize response")]
    Deserialize {
        body: String,
        #[source]
        source: serde_json::Error,
    },
    /// The server replied with a body that is not valid UTF-8. The bytes are
    /// kept untouched in `source` (see [`std::string::FromUtf8Error::as_bytes`]).
    #[error("Response body with status {status} is not valid UTF-8")]
    Encoding {
        status: u16,
        #[source]
        source: std::string::FromUtf8Error,
    },
    /// A request body could not be serialized to JSON.
    #[error("Failed to serialize request body")]
    Serialize(#[source] serde_json::Error),
    /// The client configuration or a constructed URL was invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Returns true when no reply was received from the server.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Returns the structured upstream error payload, if the server sent one.
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Error::Response { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Returns the HTTP status the server replied with, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Response { status, .. }
            | Error::ErrorPayload { status, .. }
            | Error::Encoding { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorDetail;

    fn sample_error_response() -> ErrorResponse {
        ErrorResponse {
            status: 400,
            error: ErrorDetail {
                message: "Validation error".to_string(),
                code: Some("ValidationError".to_string()),
                details: None,
            },
            resource: None,
            json_response: String::new(),
        }
    }

    #[test]
    fn response_error_display_includes_upstream_message() {
        let err = Error::Response {
            status: 400,
            error: sample_error_response(),
        };
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("Validation error"));
    }

    #[test]
    fn accessors_distinguish_kinds() {
        let timeout = Error::Timeout { source: None };
        assert!(timeout.is_timeout());
        assert!(timeout.error_response().is_none());
        assert_eq!(timeout.status(), None);

        let response = Error::Response {
            status: 400,
            error: sample_error_response(),
        };
        assert!(!response.is_timeout());
        assert_eq!(response.status(), Some(400));
        assert_eq!(
            response.error_response().and_then(|e| e.error.code.as_deref()),
            Some("ValidationError")
        );
    }

    #[test]
    fn error_payload_keeps_status_without_structured_body() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = Error::ErrorPayload {
            status: 502,
            body: "<html>".to_string(),
            source,
        };
        assert_eq!(err.status(), Some(502));
        assert!(err.error_response().is_none());
        assert!(!err.is_timeout());
    }

    #[test]
    fn encoding_error_keeps_original_bytes() {
        let source = String::from_utf8(vec![b'{', 0xff, b'}']).unwrap_err();
        let err = Error::Encoding { status: 200, source };
        assert_eq!(err.status(), Some(200));
        match &err {
            Error::Encoding { source, .. } => assert_eq!(source.as_bytes(), &[b'{', 0xff, b'}']),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
