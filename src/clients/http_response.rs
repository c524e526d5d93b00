//! HTTP response types for the Pact API client.

use std::collections::HashMap;

use serde_json::Value;

/// An HTTP response from the Pact API.
///
/// The body is always parsed: an empty body is `{}` and a body that is not
/// valid JSON is wrapped as `{"raw_body": "<text>"}`.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Parses a response body from its text.
    #[must_use]
    pub fn parse_body(text: &str) -> Value {
        if text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(text).unwrap_or_else(|_| serde_json::json!({ "raw_body": text }))
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }
}
