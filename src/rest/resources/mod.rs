//! The Pact backend's resources.
//!
//! Each resource is a [`Resource`](crate::rest::Resource) with a fixed
//! operation table, plus typed helpers where the backend expects a specific
//! request shape. They all deref to `Resource`, so every operation can also be
//! called by name.
//!
//! ```text
//! resources/
//!   mod.rs        <- This file
//!   common.rs     <- Shared parameter types
//!   users.rs      <- /users
//!   orders.rs     <- /users/me/orders
//!   products.rs   <- /products
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use pact_api::rest::resources::{ListParams, Orders, Products};
//! use pact_api::rest::RequestArguments;
//!
//! let orders = Orders::new(&api)?;
//! let order = orders.retrieve(&RequestArguments::new().with("id", "7")).await?;
//!
//! let products = Products::new(&api)?;
//! let page = products.list_with(&ListParams { page: Some(2), ..Default::default() }).await?;
//! ```

mod common;
mod orders;
mod products;
mod users;

pub use common::{ListParams, SortOrder};
pub use orders::{OrderItemUpdate, Orders, ORDERS_PATH};
pub use products::{Products, PRODUCTS_PATH};
pub use users::{Users, USERS_PATH};
