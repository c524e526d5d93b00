//! HTTP client for Pact API communication.
//!
//! This module provides the [`HttpClient`] type, the credentialed transport
//! every API operation goes through.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{DataType, HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{AccessToken, BaseUrl, PactConfig};

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Credentialed HTTP transport for the Pact API.
///
/// The client handles:
/// - URL construction from the current base URL
/// - Default headers including User-Agent and Accept
/// - The `Authorization` header, attached verbatim whenever a credential is set
/// - Form (default) or JSON body encoding
/// - Response body parsing
///
/// It does not retry, and it does not interpret status codes beyond
/// separating 2xx from everything else.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The base URL and credential can be changed
/// through `&self`; each request reads both exactly once, when it is
/// dispatched, so in-flight requests keep whatever credential they started with.
///
/// # Example
///
/// ```rust,ignore
/// use pact_api::{PactConfig, BaseUrl};
/// use pact_api::clients::HttpClient;
///
/// let config = PactConfig::builder()
///     .base_url(BaseUrl::new("https://api.pact.example/v1").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// let response = client.get("/products", Vec::new()).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL every request path is appended to.
    base_url: RwLock<BaseUrl>,
    /// Credential attached to outgoing requests, if any.
    access_token: RwLock<Option<AccessToken>>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &PactConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Pact API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: RwLock::new(config.base_url().clone()),
            access_token: RwLock::new(config.access_token().cloned()),
            default_headers,
        }
    }

    /// Returns a snapshot of the current base URL.
    #[must_use]
    pub fn base_url(&self) -> BaseUrl {
        self.base_url
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the base URL used by subsequent requests.
    pub fn set_base_url(&self, base_url: BaseUrl) {
        tracing::debug!(base_url = %base_url, "Pact API base URL changed");
        *self
            .base_url
            .write()
            .unwrap_or_else(PoisonError::into_inner) = base_url;
    }

    /// Returns a snapshot of the current credential.
    #[must_use]
    pub fn access_token(&self) -> Option<AccessToken> {
        self.access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sets or clears the credential used by subsequent requests.
    pub fn set_access_token(&self, token: Option<AccessToken>) {
        tracing::debug!(present = token.is_some(), "Pact API credential changed");
        *self
            .access_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = token;
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query)
            .build()?;
        self.request(request).await
    }

    /// Sends a form-encoded POST request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn post(
        &self,
        path: &str,
        body: Vec<(String, Value)>,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, HttpError> {
        self.send_with_body(HttpMethod::Post, path, body, query)
            .await
    }

    /// Sends a form-encoded PUT request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn put(
        &self,
        path: &str,
        body: Vec<(String, Value)>,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, HttpError> {
        self.send_with_body(HttpMethod::Put, path, body, query)
            .await
    }

    /// Sends a form-encoded PATCH request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn patch(
        &self,
        path: &str,
        body: Vec<(String, Value)>,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, HttpError> {
        self.send_with_body(HttpMethod::Patch, path, body, query)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn delete(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path)
            .query(query)
            .build()?;
        self.request(request).await
    }

    async fn send_with_body(
        &self,
        method: HttpMethod,
        path: &str,
        body: Vec<(String, Value)>,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, HttpError> {
        let request = HttpRequest::builder(method, path)
            .body(body)
            .body_type(DataType::Form)
            .query(query)
            .build()?;
        self.request(request).await
    }

    /// Sends an HTTP request to the Pact API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`), carrying the parsed body
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        // Snapshot shared state once; nothing below observes later changes.
        let url = self.base_url().join(&request.path_and_query());
        let access_token = self.access_token();

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                req_builder = req_builder.header(key, value);
            }
        }
        if let Some(token) = &access_token {
            let credential: &str = token.as_ref();
            req_builder = req_builder.header(AUTHORIZATION, credential);
        }

        if request.body.is_some() {
            req_builder = match request.body_type {
                Some(DataType::Json) => req_builder.json(&request.json_body()),
                _ => req_builder.form(&request.form_fields()),
            };
        }

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            authorized = access_token.is_some(),
            "Dispatching Pact API request"
        );

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let response = HttpResponse::new(code, res_headers, HttpResponse::parse_body(&body_text));

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            method = %request.http_method,
            path = %request.path,
            status = code,
            "Pact API request failed"
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
            body: response.body,
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes the error-bearing fields of a response body to JSON.
    ///
    /// Falls back to the whole body when none of the known fields are present.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["errors", "error", "error_description", "message"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if error_body.is_empty() {
            return response.body.to_string();
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        Value::Object(error_body).to_string()
    }
}
