//! The current user's orders, at `/users/me/orders`.
//!
//! # Example
//!
//! ```rust,ignore
//! use pact_api::rest::resources::{ListParams, OrderItemUpdate, Orders};
//!
//! let orders = Orders::new(&api)?;
//!
//! let active = orders
//!     .list_with(&ListParams {
//!         states: Some(vec!["active".to_string()]),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! orders.update_dispatch_date("1234", "2024-03-09").await?;
//!
//! orders
//!     .update_item(&OrderItemUpdate {
//!         order_id: "1234".to_string(),
//!         item_id: "1".to_string(),
//!         product_id: "77".to_string(),
//!         preparation: Some("espresso".to_string()),
//!         coffee_type_id: None,
//!     })
//!     .await?;
//! ```

use std::ops::Deref;

use chrono::NaiveDate;
use serde_json::Value;

use crate::clients::ApiClient;
use crate::error::{ApiError, PreconditionError};
use crate::rest::resources::common::ListParams;
use crate::rest::{
    BasicMethod, ConstructionError, MethodDescriptor, RequestArguments, Resource,
    LIST_QUERY_PARAMS,
};

/// Base path of the orders resource.
pub const ORDERS_PATH: &str = "/users/me/orders";

const DISPATCH_DATE_FIELD: &str = "order[dispatch_date]";
const PRODUCT_ID_FIELD: &str = "item[product_attributes][id]";
const PREPARATION_FIELD: &str = "item[product_attributes][options][preparation]";
const COFFEE_TYPE_FIELD: &str = "item[product_attributes][options][coffee_type_id]";

/// A change to one item of an order.
///
/// Unset options are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderItemUpdate {
    /// The order the item belongs to.
    pub order_id: String,
    /// The item to change.
    pub item_id: String,
    /// The product the item should refer to.
    pub product_id: String,
    /// Grind or brew method, e.g. `"wholebeans"`.
    pub preparation: Option<String>,
    /// The coffee to send.
    pub coffee_type_id: Option<String>,
}

/// The current user's orders.
///
/// Includes the `retrieve`, `create`, `update`, and `del` basics plus:
///
/// | Operation | Request |
/// |---|---|
/// | `list` | `GET /users/me/orders` with the list query parameters |
/// | `skip` | `PATCH /users/me/orders/{id}/skip` |
/// | `house_coffee` | `POST /users/me/orders/house_coffee` |
/// | `update_item` | `PUT /users/me/orders/{id}/items/{item_id}` |
#[derive(Clone, Debug)]
pub struct Orders {
    resource: Resource,
}

impl Orders {
    /// Builds the orders resource on `client`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if the operation table is inconsistent.
    pub fn new(client: &ApiClient) -> Result<Self, ConstructionError> {
        let resource = Resource::builder(client, ORDERS_PATH)
            .include_basic([
                BasicMethod::Retrieve,
                BasicMethod::Create,
                BasicMethod::Update,
                BasicMethod::Del,
            ])
            .method("list", MethodDescriptor::get().query_params(LIST_QUERY_PARAMS))
            .method(
                "skip",
                MethodDescriptor::patch().path("{id}/skip").url_params(["id"]),
            )
            .method("house_coffee", MethodDescriptor::post().path("/house_coffee"))
            .method(
                "update_item",
                MethodDescriptor::put()
                    .path("{id}/items/{item_id}")
                    .url_params(["id", "item_id"])
                    .payload_params([PRODUCT_ID_FIELD, PREPARATION_FIELD, COFFEE_TYPE_FIELD]),
            )
            .build()?;

        Ok(Self { resource })
    }

    /// Lists orders using typed parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_with(&self, params: &ListParams) -> Result<Value, ApiError> {
        let args = RequestArguments::from_serialize(params)?;
        self.list(&args).await
    }

    /// Skips the next delivery of an order.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Precondition`] if `id` is empty and
    /// [`ApiError::Transport`] if the request fails.
    pub async fn skip(&self, id: &str) -> Result<Value, ApiError> {
        self.call("skip", &RequestArguments::new().with("id", id))
            .await
    }

    /// Moves an order's dispatch date.
    ///
    /// `year_month_day` must be a real calendar date written `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Precondition`] before sending anything if `id` is
    /// empty or the date is malformed, and [`ApiError::Transport`] if the
    /// request fails.
    pub async fn update_dispatch_date(
        &self,
        id: &str,
        year_month_day: &str,
    ) -> Result<Value, ApiError> {
        check_dispatch_date(id, year_month_day)?;

        let args = RequestArguments::new()
            .with("id", id)
            .with(DISPATCH_DATE_FIELD, year_month_day);
        self.update(&args).await
    }

    /// Changes the product or options of one order item.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Precondition`] before sending anything if
    /// `order_id` or `item_id` is empty, and [`ApiError::Transport`] if the
    /// request fails.
    pub async fn update_item(&self, update: &OrderItemUpdate) -> Result<Value, ApiError> {
        let mut args = RequestArguments::new()
            .with("id", update.order_id.as_str())
            .with("item_id", update.item_id.as_str())
            .with(PRODUCT_ID_FIELD, update.product_id.as_str());
        if let Some(preparation) = &update.preparation {
            args.insert(PREPARATION_FIELD, preparation.as_str());
        }
        if let Some(coffee_type_id) = &update.coffee_type_id {
            args.insert(COFFEE_TYPE_FIELD, coffee_type_id.as_str());
        }
        self.call("update_item", &args).await
    }
}

impl Deref for Orders {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        &self.resource
    }
}

fn check_dispatch_date(id: &str, year_month_day: &str) -> Result<(), PreconditionError> {
    let operation = || "update_dispatch_date".to_string();

    if id.is_empty() || year_month_day.is_empty() {
        return Err(PreconditionError::InvalidArgument {
            operation: operation(),
            message: format!(
                "You must supply valid arguments. You passed \"{id}\" and \"{year_month_day}\"."
            ),
        });
    }

    let well_formed = year_month_day.split('-').count() == 3
        && NaiveDate::parse_from_str(year_month_day, "%Y-%m-%d").is_ok();
    if !well_formed {
        return Err(PreconditionError::InvalidArgument {
            operation: operation(),
            message: format!(
                "You must supply a date with the signature YYYY-MM-DD. You passed \"{year_month_day}\"."
            ),
        });
    }

    Ok(())
}
