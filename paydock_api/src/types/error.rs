//! The error payload returned by the API on non-success statuses.

use serde::{Deserialize, Serialize};

/// Structured error body, e.g.
/// `{"status": 400, "error": {"message": "...", "code": "..."}, "resource": {"type": "charge"}}`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    /// Filled from the HTTP status when the body omits it.
    #[serde(default)]
    pub status: u16,
    pub error: ErrorDetail,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<ErrorResource>,
    /// Raw error body as received. Not part of the wire format.
    #[serde(skip)]
    pub json_response: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorDetail {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Machine-readable detail; shape varies by error (list of field errors, gateway message, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResource {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
