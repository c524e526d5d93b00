//! # Pact API Rust Client
//!
//! A declarative client for the Pact coffee subscription backend. Endpoints
//! are described as data ([`rest::MethodDescriptor`]) and compiled into named
//! async operations on [`rest::Resource`]s that share one credentialed
//! transport.
//!
//! ## Overview
//!
//! This crate provides:
//! - A shared client handle, [`ApiClient`], holding the base URL and credential
//! - `login` / `logout` against the `/tokens/` endpoints
//! - Validated configuration via [`PactConfig`] and [`PactConfigBuilder`]
//! - Declarative resources with the standard `list`/`retrieve`/`create`/`update`/`del`
//!   operations plus custom ones
//! - The backend's own resources in [`rest::resources`]
//!
//! ## Quick Start
//!
//! ```rust
//! use pact_api::{ApiClient, PactConfig, BaseUrl};
//!
//! let config = PactConfig::builder()
//!     .base_url(BaseUrl::new("https://api.pact.example/v1").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let api = ApiClient::from_config(&config);
//! assert!(api.access_token().is_none());
//! ```
//!
//! ## Logging In
//!
//! Logging in does not authorize the client by itself; set the credential
//! from the response:
//!
//! ```rust,ignore
//! use pact_api::ApiClient;
//!
//! let api = ApiClient::new("https://api.pact.example/v1", None)?;
//! let session = api.login("a@b.com", "secret").await?;
//!
//! if let Some(token) = session.token() {
//!     api.set_access_token(token)?;
//! }
//! ```
//!
//! ## Calling Resources
//!
//! ```rust,ignore
//! use pact_api::rest::resources::{Orders, Users};
//! use pact_api::rest::RequestArguments;
//!
//! let users = Users::new(&api)?;
//! let me = users.retrieve(&RequestArguments::new().with("id", "me")).await?;
//!
//! let orders = Orders::new(&api)?;
//! orders.update_dispatch_date("1234", "2024-03-09").await?;
//! orders.call("skip", &RequestArguments::new().with("id", "1234")).await?;
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`ApiError`]:
//! - [`ApiError::Precondition`]: bad arguments, raised before any request is sent
//! - [`ApiError::Transport`]: the request failed, including non-2xx responses
//!   (the parsed body is kept on [`HttpResponseError`])
//! - [`ApiError::UnexpectedResponse`]: a 2xx response of the wrong shape
//!
//! ## Design Principles
//!
//! - **No global state**: Every resource is bound to an explicit [`ApiClient`]
//! - **Fail-fast validation**: Newtypes validate on construction and descriptors
//!   when a resource is built
//! - **Thread-safe**: All client and resource types are `Send + Sync`
//! - **No retries**: Each call makes exactly one request
//!
//! The library emits [`tracing`] events but never installs a subscriber.

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::LoginResponse;
pub use clients::ApiClient;
pub use config::{AccessToken, BaseUrl, PactConfig, PactConfigBuilder};
pub use error::{ApiError, ConfigError, PreconditionError};

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};

// Re-export resource building blocks
pub use rest::{
    BasicMethod, CompiledOperation, ConstructionError, DescriptorError, MethodDescriptor,
    RequestArguments, Resource, ResourceBuilder,
};
