//! The `/products` catalogue.

use std::ops::Deref;

use serde_json::Value;

use crate::clients::ApiClient;
use crate::error::ApiError;
use crate::rest::resources::common::ListParams;
use crate::rest::{BasicMethod, ConstructionError, RequestArguments, Resource};

/// Base path of the products resource.
pub const PRODUCTS_PATH: &str = "/products";

/// The product catalogue. Read-only: `list` and `retrieve`.
#[derive(Clone, Debug)]
pub struct Products {
    resource: Resource,
}

impl Products {
    /// Builds the products resource on `client`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if the operation table is inconsistent.
    pub fn new(client: &ApiClient) -> Result<Self, ConstructionError> {
        let resource = Resource::builder(client, PRODUCTS_PATH)
            .include_basic([BasicMethod::List, BasicMethod::Retrieve])
            .build()?;
        Ok(Self { resource })
    }

    /// Lists products using typed parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_with(&self, params: &ListParams) -> Result<Value, ApiError> {
        let args = RequestArguments::from_serialize(params)?;
        self.list(&args).await
    }
}

impl Deref for Products {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        &self.resource
    }
}
