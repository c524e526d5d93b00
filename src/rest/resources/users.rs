//! The `/users` resource.
//!
//! # Example
//!
//! ```rust,ignore
//! use pact_api::rest::resources::Users;
//! use pact_api::rest::RequestArguments;
//!
//! let users = Users::new(&api)?;
//!
//! let me = users.retrieve(&RequestArguments::new().with("id", "me")).await?;
//!
//! users
//!     .call(
//!         "applyVoucher",
//!         &RequestArguments::new()
//!             .with("user_id", "me")
//!             .with("source", "web")
//!             .with("code", "FREECOFFEE"),
//!     )
//!     .await?;
//! ```

use std::ops::Deref;

use serde_json::Value;

use crate::clients::ApiClient;
use crate::error::ApiError;
use crate::rest::resources::common::ListParams;
use crate::rest::{BasicMethod, ConstructionError, MethodDescriptor, RequestArguments, Resource};

/// Base path of the users resource.
pub const USERS_PATH: &str = "/users";

/// Users, their account settings, and their coffee history.
///
/// Includes the `list`, `retrieve`, and `create` basics plus:
///
/// | Operation | Request |
/// |---|---|
/// | `changePassword` | `PATCH /users/{user_id}/password` |
/// | `update` | `PATCH /users/{user_id}` |
/// | `updateEmail` | `PATCH /users/{user_id}/email` |
/// | `updateCard` | `PATCH /users/{user_id}/card` |
/// | `resetDeclinedCard` | `PATCH /users/{user_id}/card/reset` |
/// | `applyVoucher` | `POST /users/{user_id}/vouchers?source=` with body `code` |
/// | `cancel` | `PATCH /users/{user_id}/cancel` |
/// | `reactivate` | `POST /users/me/return` |
/// | `contact` | `POST /users/me/contact` |
/// | `listUniqueCoffees` | `GET /users/me/coffees` with the list query parameters |
/// | `rateCoffee` | `POST /users/me/coffee-ratings` |
/// | `deleteCoffeeRating` | `DELETE /users/me/coffee-ratings/{sku}` |
/// | `emailInvites` | `POST /users/{user_id}/invite` |
/// | `start` | `GET /users/me/start` |
#[derive(Clone, Debug)]
pub struct Users {
    resource: Resource,
}

impl Users {
    /// Builds the users resource on `client`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if the operation table is inconsistent.
    pub fn new(client: &ApiClient) -> Result<Self, ConstructionError> {
        let user_op = |method: MethodDescriptor, path: &str| {
            method.path(path).url_params(["user_id"])
        };

        let resource = Resource::builder(client, USERS_PATH)
            .include_basic([BasicMethod::List, BasicMethod::Retrieve, BasicMethod::Create])
            .method(
                "changePassword",
                user_op(MethodDescriptor::patch(), "{user_id}/password"),
            )
            .method("update", user_op(MethodDescriptor::patch(), "{user_id}"))
            .method(
                "updateEmail",
                user_op(MethodDescriptor::patch(), "{user_id}/email"),
            )
            .method(
                "updateCard",
                user_op(MethodDescriptor::patch(), "{user_id}/card"),
            )
            .method(
                "resetDeclinedCard",
                user_op(MethodDescriptor::patch(), "{user_id}/card/reset"),
            )
            .method(
                "applyVoucher",
                user_op(MethodDescriptor::post(), "{user_id}/vouchers")
                    .query_params(["source"])
                    .payload_params(["code"]),
            )
            .method(
                "cancel",
                user_op(MethodDescriptor::patch(), "{user_id}/cancel"),
            )
            .method("reactivate", MethodDescriptor::post().path("me/return"))
            .method("contact", MethodDescriptor::post().path("me/contact"))
            .method(
                "listUniqueCoffees",
                MethodDescriptor::get()
                    .path("me/coffees")
                    .query_params(crate::rest::LIST_QUERY_PARAMS),
            )
            .method("rateCoffee", MethodDescriptor::post().path("me/coffee-ratings"))
            .method(
                "deleteCoffeeRating",
                MethodDescriptor::delete()
                    .path("me/coffee-ratings/{sku}")
                    .url_params(["sku"]),
            )
            .method(
                "emailInvites",
                user_op(MethodDescriptor::post(), "{user_id}/invite"),
            )
            .method("start", MethodDescriptor::get().path("me/start"))
            .build()?;

        Ok(Self { resource })
    }

    /// Lists the coffees the current user has received, once each.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_unique_coffees(&self, params: &ListParams) -> Result<Value, ApiError> {
        let args = RequestArguments::from_serialize(params)?;
        self.call("listUniqueCoffees", &args).await
    }

    /// Applies a voucher code to a user's account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Precondition`] if `user_id` is empty and
    /// [`ApiError::Transport`] if the request fails.
    pub async fn apply_voucher(
        &self,
        user_id: &str,
        code: &str,
        source: Option<&str>,
    ) -> Result<Value, ApiError> {
        let mut args = RequestArguments::new()
            .with("user_id", user_id)
            .with("code", code);
        if let Some(source) = source {
            args.insert("source", source);
        }
        self.call("applyVoucher", &args).await
    }
}

impl Deref for Users {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        &self.resource
    }
}
