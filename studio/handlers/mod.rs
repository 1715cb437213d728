pub mod config;
pub mod dataset;
pub mod snapshot;
pub mod curve;

use serde::Serialize;
use serde_json::{json, Value};

/// A JSON body plus the HTTP status it should be sent with.
///
/// Handlers build these instead of `tiny_http::Response`s so that their
/// output can be inspected directly in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body:   Value,
}

impl ApiReply {
    pub fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => ApiReply { status: 200, body },
            Err(e)   => ApiReply::internal(e.to_string()),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiReply { status: 400, body: json!({ "error": message.into() }) }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiReply { status: 500, body: json!({ "error": message.into() }) }
    }
}
