//! Compiled operations.
//!
//! A [`CompiledOperation`] is a [`MethodDescriptor`] bound to a client and a
//! resource base path. It turns caller arguments into an [`HttpRequest`]
//! without touching the network ([`prepare`](CompiledOperation::prepare)) and
//! then dispatches that request once ([`call`](CompiledOperation::call)).

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::{to_param_value, ApiClient, HttpRequest};
use crate::error::{ApiError, PreconditionError};
use crate::rest::arguments::RequestArguments;
use crate::rest::descriptor::MethodDescriptor;
use crate::rest::errors::DescriptorError;
use crate::rest::path::PathTemplate;

/// A ready-to-call operation.
///
/// Compiling the same descriptor twice yields operations that build identical
/// requests for identical arguments; nothing is cached between calls.
///
/// # Example
///
/// ```rust
/// use pact_api::ApiClient;
/// use pact_api::clients::HttpMethod;
/// use pact_api::rest::{CompiledOperation, MethodDescriptor, RequestArguments};
///
/// let api = ApiClient::new("https://api.pact.example", None).unwrap();
/// let operation = CompiledOperation::compile(
///     &api,
///     "retrieve",
///     "/users/me/orders",
///     MethodDescriptor::get().path("{id}").url_params(["id"]),
/// )
/// .unwrap();
///
/// let request = operation.prepare(&RequestArguments::new().with("id", 7)).unwrap();
/// assert_eq!(request.http_method, HttpMethod::Get);
/// assert_eq!(request.path, "/users/me/orders/7");
/// ```
#[derive(Clone, Debug)]
pub struct CompiledOperation {
    client: ApiClient,
    name: String,
    base_path: String,
    descriptor: MethodDescriptor,
    template: PathTemplate,
}

// Verify CompiledOperation is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompiledOperation>();
};

impl CompiledOperation {
    /// Checks `descriptor` against `base_path` and binds it to `client`.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError`] if the descriptor is inconsistent.
    pub fn compile(
        client: &ApiClient,
        name: impl Into<String>,
        base_path: impl Into<String>,
        descriptor: MethodDescriptor,
    ) -> Result<Self, DescriptorError> {
        let base_path = base_path.into();
        let template = descriptor.template_for(&base_path)?;
        Ok(Self {
            client: client.clone(),
            name: name.into(),
            base_path,
            descriptor,
            template,
        })
    }

    /// Returns the operation name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the resource base path this operation was compiled against.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &MethodDescriptor {
        &self.descriptor
    }

    /// Returns the full path template, before substitution.
    #[must_use]
    pub fn path_template(&self) -> &str {
        self.template.as_str()
    }

    /// Builds the request `args` describe, without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`PreconditionError::MissingArgument`] if a URL parameter is
    /// missing, `null`, or empty.
    pub fn prepare(&self, args: &RequestArguments) -> Result<HttpRequest, PreconditionError> {
        let descriptor = &self.descriptor;

        let mut values = HashMap::with_capacity(descriptor.url_param_names().len());
        for name in descriptor.url_param_names() {
            let value = args
                .value(name)
                .and_then(to_param_value)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| self.missing(name))?;
            values.insert(name.as_str(), value);
        }
        let path = self
            .template
            .render(&values)
            .map_err(|error| self.missing(&error.placeholder))?;

        let query: Vec<(String, String)> = descriptor
            .query_param_names()
            .iter()
            .filter_map(|name| {
                args.value(name)
                    .and_then(to_param_value)
                    .map(|value| (name.clone(), value))
            })
            .collect();

        let method = descriptor.http_method();
        let body = method.carries_body().then(|| self.body_fields(args));

        Ok(HttpRequest {
            http_method: method,
            path,
            query,
            body_type: body.as_ref().map(|_| descriptor.data_type()),
            body,
            extra_headers: None,
        })
    }

    /// Prepares the request and sends it.
    ///
    /// Argument checks happen before the first `.await`; a precondition
    /// failure never reaches the network.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Precondition`] for bad arguments and
    /// [`ApiError::Transport`] if the request fails.
    pub async fn call(&self, args: &RequestArguments) -> Result<Value, ApiError> {
        let request = self.prepare(args)?;
        tracing::debug!(
            operation = %self.name,
            method = %request.http_method,
            path = %request.path,
            "Calling Pact API operation"
        );

        let response = self.client.http_client().request(request).await?;
        Ok(response.body)
    }

    fn body_fields(&self, args: &RequestArguments) -> Vec<(String, Value)> {
        let descriptor = &self.descriptor;
        match descriptor.payload_param_names() {
            Some(names) => names
                .iter()
                .filter_map(|name| args.value(name).map(|value| (name.clone(), value.clone())))
                .collect(),
            None => args
                .iter()
                .filter(|(key, value)| {
                    !value.is_null()
                        && !descriptor.url_param_names().iter().any(|n| n == key)
                        && !descriptor.query_param_names().iter().any(|n| n == key)
                })
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
        }
    }

    fn missing(&self, name: &str) -> PreconditionError {
        PreconditionError::MissingArgument {
            operation: self.name.clone(),
            name: name.to_string(),
        }
    }
}
