//! HTTP request types for the Pact API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Pact API.

use std::collections::HashMap;
use std::fmt;

use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the Pact API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partially updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods that send their parameters as a request body.
    #[must_use]
    pub const fn carries_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Form content type (`application/x-www-form-urlencoded`).
    #[default]
    Form,
    /// JSON content type (`application/json`).
    Json,
}

impl DataType {
    /// Returns the MIME type string for this data type.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Form => "application/x-www-form-urlencoded",
            Self::Json => "application/json",
        }
    }
}

/// Converts a JSON value into its wire representation for a query string
/// or form field.
///
/// Returns `None` for `null`, which callers treat as "not supplied".
/// Arrays become comma-separated scalars; objects are sent as compact JSON.
#[must_use]
pub fn to_param_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(arr) => {
            let values: Vec<String> = arr
                .iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    _ => None,
                })
                .collect();
            Some(values.join(","))
        }
        Value::Object(_) => Some(value.to_string()),
    }
}

/// An HTTP request to be sent to the Pact API.
///
/// The path is relative to the client's base URL and is appended verbatim.
///
/// # Example
///
/// ```rust
/// use pact_api::clients::{HttpRequest, HttpMethod, DataType};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/users/me/orders")
///     .query_param("page", "2")
///     .build()
///     .unwrap();
/// assert_eq!(request.path_and_query(), "/users/me/orders?page=2");
///
/// let request = HttpRequest::builder(HttpMethod::Post, "/tokens/")
///     .body_param("login", "a@b.com")
///     .body_type(DataType::Form)
///     .build()
///     .unwrap();
/// assert!(request.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// Query parameters in the order they will be sent.
    pub query: Vec<(String, String)>,
    /// Body fields in the order they will be sent, if any.
    pub body: Option<Vec<(String, Value)>>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `Some` but `body_type` is `None`
    /// - `body` is `Some` on a GET or DELETE request
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if self.body.is_some() && !self.http_method.carries_body() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the percent-encoded query string without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Returns the path followed by the query string, if there is one.
    #[must_use]
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }

    /// Returns the body as form fields, dropping `null` values.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(String, String)> {
        self.body
            .iter()
            .flatten()
            .filter_map(|(key, value)| to_param_value(value).map(|v| (key.clone(), v)))
            .collect()
    }

    /// Returns the body as a JSON object.
    #[must_use]
    pub fn json_body(&self) -> Value {
        let map: serde_json::Map<String, Value> = self.body.iter().flatten().cloned().collect();
        Value::Object(map)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Vec<(String, Value)>>,
    body_type: Option<DataType>,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            body_type: None,
            extra_headers: None,
        }
    }

    /// Sets all body fields at once.
    ///
    /// When setting a body, you must also set the body type via [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, fields: Vec<(String, Value)>) -> Self {
        self.body = Some(fields);
        self
    }

    /// Adds a single body field.
    #[must_use]
    pub fn body_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.body
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    /// Sets the content type of the request body.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            query: self.query,
            body: self.body,
            body_type: self.body_type,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}
