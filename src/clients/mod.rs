//! HTTP client types for Pact API communication.
//!
//! This module provides the transport layer every API operation goes
//! through, plus the shared [`ApiClient`] handle.
//!
//! # Overview
//!
//! - [`ApiClient`]: Shared handle holding the base URL and credential; exposes `login`/`logout`
//! - [`HttpClient`]: The credentialed transport adapter (GET/POST/PUT/PATCH/DELETE)
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`DataType`]: Content types for request bodies (form by default)
//!
//! # Example
//!
//! ```rust,ignore
//! use pact_api::ApiClient;
//!
//! let api = ApiClient::new("https://api.pact.example/v1", None)?;
//! let session = api.login("a@b.com", "secret").await?;
//! if let Some(token) = session.token() {
//!     api.set_access_token(token)?;
//! }
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Every call suspends once on the network and resolves with
//! either the parsed response or the transport error, unchanged.

mod api_client;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use api_client::ApiClient;
pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{to_param_value, DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
