//! Declarative resources for the Pact API.
//!
//! This module turns tables of [`MethodDescriptor`]s into callable operations:
//!
//! - **[`MethodDescriptor`]**: verb, relative path template, and which
//!   arguments go to the path, the query string, or the body
//! - **[`CompiledOperation`]**: a descriptor bound to a client and base path;
//!   builds requests synchronously and sends them once
//! - **[`Resource`]**: a base path plus a fixed set of named operations,
//!   including any of the standard [`BasicMethod`]s
//! - **[`RequestArguments`]**: the ordered argument map callers pass in
//! - **Path templates**: `{name}` placeholders, see [`PathTemplate`]
//! - **[`ConstructionError`]**: descriptor defects, reported when a resource
//!   is built
//!
//! # Example
//!
//! ```rust,ignore
//! use pact_api::ApiClient;
//! use pact_api::rest::{BasicMethod, MethodDescriptor, RequestArguments, Resource};
//!
//! let api = ApiClient::new("https://api.pact.example/v1", Some("token"))?;
//!
//! let orders = Resource::builder(&api, "/users/me/orders")
//!     .include_basic([BasicMethod::Retrieve])
//!     .method("skip", MethodDescriptor::patch().path("{id}/skip").url_params(["id"]))
//!     .build()?;
//!
//! let order = orders.retrieve(&RequestArguments::new().with("id", "7")).await?;
//! orders.call("skip", &RequestArguments::new().with("id", "7")).await?;
//! ```
//!
//! # Key Types
//!
//! - [`resources`]: The Pact backend's own resources (users, orders, products)

mod arguments;
mod descriptor;
mod errors;
mod operation;
mod path;
mod resource;

pub mod resources;

// Public exports
pub use arguments::RequestArguments;
pub use descriptor::MethodDescriptor;
pub use errors::{ConstructionError, DescriptorError};
pub use operation::CompiledOperation;
pub use path::{join_path, MalformedTemplate, MissingPlaceholder, PathTemplate};
pub use resource::{BasicMethod, Resource, ResourceBuilder, LIST_QUERY_PARAMS};
