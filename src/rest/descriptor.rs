//! Declarative method descriptors.
//!
//! A [`MethodDescriptor`] says which verb an operation uses, where its path
//! goes relative to the resource, and which arguments end up in the path, the
//! query string, or the body. Descriptors are plain data; they are checked and
//! compiled into [`CompiledOperation`](crate::rest::CompiledOperation)s when a
//! [`Resource`](crate::rest::Resource) is built.
//!
//! # Example
//!
//! ```rust
//! use pact_api::rest::MethodDescriptor;
//! use pact_api::clients::HttpMethod;
//!
//! let rate = MethodDescriptor::post()
//!     .path("me/coffee-ratings")
//!     .payload_params(["sku", "rating"]);
//!
//! assert_eq!(rate.http_method(), HttpMethod::Post);
//! assert!(rate.validate().is_ok());
//! ```

use std::collections::HashSet;

use crate::clients::{DataType, HttpMethod};
use crate::rest::errors::DescriptorError;
use crate::rest::path::{join_path, PathTemplate};

/// Declarative description of one API operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDescriptor {
    http_method: HttpMethod,
    path: Option<String>,
    url_params: Vec<String>,
    query_params: Vec<String>,
    payload_params: Option<Vec<String>>,
    body_type: DataType,
}

impl MethodDescriptor {
    /// Creates a descriptor for `method` at the resource base path.
    #[must_use]
    pub const fn new(method: HttpMethod) -> Self {
        Self {
            http_method: method,
            path: None,
            url_params: Vec::new(),
            query_params: Vec::new(),
            payload_params: None,
            body_type: DataType::Form,
        }
    }

    /// Shorthand for `MethodDescriptor::new(HttpMethod::Get)`.
    #[must_use]
    pub const fn get() -> Self {
        Self::new(HttpMethod::Get)
    }

    /// Shorthand for `MethodDescriptor::new(HttpMethod::Post)`.
    #[must_use]
    pub const fn post() -> Self {
        Self::new(HttpMethod::Post)
    }

    /// Shorthand for `MethodDescriptor::new(HttpMethod::Put)`.
    #[must_use]
    pub const fn put() -> Self {
        Self::new(HttpMethod::Put)
    }

    /// Shorthand for `MethodDescriptor::new(HttpMethod::Patch)`.
    #[must_use]
    pub const fn patch() -> Self {
        Self::new(HttpMethod::Patch)
    }

    /// Shorthand for `MethodDescriptor::new(HttpMethod::Delete)`.
    #[must_use]
    pub const fn delete() -> Self {
        Self::new(HttpMethod::Delete)
    }

    /// Sets the path template, relative to the resource base path.
    ///
    /// Placeholders are written `{name}`; each must be a URL parameter.
    #[must_use]
    pub fn path(mut self, template: impl Into<String>) -> Self {
        self.path = Some(template.into());
        self
    }

    /// Sets the names substituted into the path. All are required.
    #[must_use]
    pub fn url_params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.url_params = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the names sent in the query string when present.
    #[must_use]
    pub fn query_params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query_params = names.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the names sent in the body when present.
    ///
    /// Without this, body-carrying operations send every argument not used
    /// for the path or query string.
    #[must_use]
    pub fn payload_params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.payload_params = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the body encoding. Defaults to [`DataType::Form`].
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = body_type;
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn http_method(&self) -> HttpMethod {
        self.http_method
    }

    /// Returns the relative path template, if any.
    #[must_use]
    pub fn path_template(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Returns the URL parameter names.
    #[must_use]
    pub fn url_param_names(&self) -> &[String] {
        &self.url_params
    }

    /// Returns the query parameter names.
    #[must_use]
    pub fn query_param_names(&self) -> &[String] {
        &self.query_params
    }

    /// Returns the payload parameter names, or `None` for "all remaining".
    #[must_use]
    pub fn payload_param_names(&self) -> Option<&[String]> {
        self.payload_params.as_deref()
    }

    /// Returns the body encoding.
    #[must_use]
    pub const fn data_type(&self) -> DataType {
        self.body_type
    }

    /// Checks the descriptor on its own, as if mounted at `/`.
    ///
    /// # Errors
    ///
    /// Returns the first [`DescriptorError`] found.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        self.template_for("/").map(|_| ())
    }

    /// Joins the descriptor's path onto `base_path` and checks the result.
    ///
    /// Parameter lists are checked for repeats and overlaps, then every
    /// placeholder must be a URL parameter and every URL parameter must have
    /// a placeholder.
    pub(crate) fn template_for(&self, base_path: &str) -> Result<PathTemplate, DescriptorError> {
        check_unique(&self.url_params, "url")?;
        check_unique(&self.query_params, "query")?;
        let payload = self.payload_params.as_deref().unwrap_or_default();
        check_unique(payload, "payload")?;

        check_disjoint(&self.url_params, "url", &self.query_params, "query")?;
        check_disjoint(&self.url_params, "url", payload, "payload")?;
        check_disjoint(&self.query_params, "query", payload, "payload")?;

        let joined = join_path(base_path, self.path.as_deref().unwrap_or_default());
        let template = PathTemplate::parse(&joined).map_err(DescriptorError::MalformedTemplate)?;

        let placeholders: HashSet<&str> = template.placeholders().collect();
        if let Some(placeholder) = template
            .placeholders()
            .find(|name| !self.url_params.iter().any(|param| param == name))
        {
            return Err(DescriptorError::UnboundPlaceholder {
                placeholder: placeholder.to_string(),
                template: joined,
            });
        }
        if let Some(name) = self
            .url_params
            .iter()
            .find(|param| !placeholders.contains(param.as_str()))
        {
            return Err(DescriptorError::UnusedUrlParam {
                name: name.clone(),
                template: joined,
            });
        }

        Ok(template)
    }
}

fn check_unique(names: &[String], kind: &'static str) -> Result<(), DescriptorError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            return Err(DescriptorError::DuplicateParameter {
                name: name.clone(),
                kind,
            });
        }
    }
    Ok(())
}

fn check_disjoint(
    first: &[String],
    first_kind: &'static str,
    second: &[String],
    second_kind: &'static str,
) -> Result<(), DescriptorError> {
    match first.iter().find(|name| second.contains(name)) {
        Some(name) => Err(DescriptorError::ParameterCollision {
            name: name.clone(),
            first: first_kind,
            second: second_kind,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let descriptor = MethodDescriptor::get();
        assert_eq!(descriptor.http_method(), HttpMethod::Get);
        assert_eq!(descriptor.path_template(), None);
        assert!(descriptor.url_param_names().is_empty());
        assert!(descriptor.payload_param_names().is_none());
        assert_eq!(descriptor.data_type(), DataType::Form);
    }

    #[test]
    fn test_template_for_joins_base_path() {
        let descriptor = MethodDescriptor::put()
            .path("{user_id}/password")
            .url_params(["user_id"])
            .payload_params(["old_password", "new_password"]);

        let template = descriptor.template_for("/users").unwrap();
        assert_eq!(template.as_str(), "/users/{user_id}/password");
    }

    #[test]
    fn test_unbound_placeholder() {
        let result = MethodDescriptor::get().path("{id}").validate();
        assert!(matches!(
            result,
            Err(DescriptorError::UnboundPlaceholder { placeholder, .. }) if placeholder == "id"
        ));
    }

    #[test]
    fn test_url_param_without_placeholder() {
        let result = MethodDescriptor::get()
            .path("me")
            .url_params(["id"])
            .validate();
        assert!(matches!(
            result,
            Err(DescriptorError::UnusedUrlParam { name, .. }) if name == "id"
        ));
    }

    #[test]
    fn test_parameter_collision() {
        let result = MethodDescriptor::get()
            .path("{id}")
            .url_params(["id"])
            .query_params(["id"])
            .validate();
        assert_eq!(
            result,
            Err(DescriptorError::ParameterCollision {
                name: "id".to_string(),
                first: "url",
                second: "query",
            })
        );

        let result = MethodDescriptor::post()
            .query_params(["source"])
            .payload_params(["code", "source"])
            .validate();
        assert!(matches!(
            result,
            Err(DescriptorError::ParameterCollision { first: "query", second: "payload", .. })
        ));
    }

    #[test]
    fn test_duplicate_parameter() {
        let result = MethodDescriptor::get()
            .query_params(["page", "page"])
            .validate();
        assert_eq!(
            result,
            Err(DescriptorError::DuplicateParameter {
                name: "page".to_string(),
                kind: "query",
            })
        );
    }

    #[test]
    fn test_malformed_template() {
        let result = MethodDescriptor::get()
            .path("{id")
            .url_params(["id"])
            .validate();
        assert!(matches!(result, Err(DescriptorError::MalformedTemplate(_))));
    }

    #[test]
    fn test_query_and_payload_on_body_verb() {
        let descriptor = MethodDescriptor::post()
            .path("{user_id}/apply_voucher")
            .url_params(["user_id"])
            .query_params(["source"])
            .payload_params(["code"]);
        assert!(descriptor.validate().is_ok());
    }
}
