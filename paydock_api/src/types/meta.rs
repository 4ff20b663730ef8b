//! Envelope types shared by every endpoint.

use serde::{Deserialize, Serialize};

/// Standard success envelope: `{"status": 200, "resource": {"type": ..., "data": ...}}`.
///
/// `json_response` is not part of the wire format. The client fills it with the
/// body exactly as the server sent it, so callers can reach fields that are not
/// modelled here.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Response<T> {
    pub status: u16,
    pub resource: Resource<T>,
    #[serde(skip)]
    pub json_response: String,
}

/// The `resource` object of a response. List endpoints also report paging.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Resource<T> {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

/// A deserialized body together with the text it was parsed from.
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    pub value: T,
    pub raw: String,
}

impl<T> From<Parsed<Response<T>>> for Response<T> {
    fn from(parsed: Parsed<Response<T>>) -> Self {
        let mut response = parsed.value;
        response.json_response = parsed.raw;
        response
    }
}
