//! Error types for the Pact API client.
//!
//! This module contains the configuration, precondition, and top-level
//! operation error types. Transport failures live in
//! [`clients::HttpError`](crate::clients::HttpError) and resource
//! construction failures in [`rest::ConstructionError`](crate::rest::ConstructionError).
//!
//! # Error Handling
//!
//! Configuration constructors return `Result<T, ConfigError>` and every API
//! operation returns `Result<T, ApiError>`. Precondition failures are raised
//! before any request is sent; transport failures are passed through unchanged.
//!
//! # Example
//!
//! ```rust
//! use pact_api::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyBaseUrl)));
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL cannot be empty.
    #[error("Base URL cannot be empty. Please provide the Pact API base URL.")]
    EmptyBaseUrl,

    /// Base URL is malformed.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.pact.example/v1').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Use `clear_access_token` to drop the credential.")]
    EmptyAccessToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// A required argument was missing, empty, or malformed.
///
/// Always raised synchronously, before any network activity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    /// A URL parameter required by the operation was not supplied.
    #[error("{operation}(...): You must supply a value for '{name}'.")]
    MissingArgument {
        /// The operation that was invoked.
        operation: String,
        /// The missing argument name.
        name: String,
    },

    /// An argument was supplied but is not acceptable.
    #[error("{operation}(...): {message}")]
    InvalidArgument {
        /// The operation that was invoked.
        operation: String,
        /// Description naming the argument(s) and the value(s) received.
        message: String,
    },

    /// The resource has no operation with this name.
    #[error("{resource} has no operation named '{name}'.")]
    UnknownOperation {
        /// Base path of the resource.
        resource: String,
        /// The requested operation name.
        name: String,
    },
}

/// Error returned by API operations.
///
/// # Example
///
/// ```rust,ignore
/// use pact_api::{ApiError, HttpError};
///
/// match users.retrieve(args).await {
///     Ok(user) => println!("{user}"),
///     Err(ApiError::Precondition(e)) => println!("bad call: {e}"),
///     Err(ApiError::Transport(HttpError::Response(e))) if e.code == 401 => {
///         // re-authenticate
///     }
///     Err(e) => println!("request failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Argument validation failed before dispatch.
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    /// The underlying HTTP call failed.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The response was successful but did not have the expected shape.
    #[error("Unexpected response from {operation}: {reason}")]
    UnexpectedResponse {
        /// The operation that produced the response.
        operation: &'static str,
        /// What was wrong with the response.
        reason: String,
    },
}

impl ApiError {
    /// Returns the HTTP status code if this is a non-2xx response error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(HttpError::Response(e)) => Some(e.code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_empty_base_url_error_message() {
        let message = ConfigError::EmptyBaseUrl.to_string();
        assert!(message.contains("Base URL cannot be empty"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        let message = error.to_string();
        assert!(message.contains("base_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_missing_argument_names_the_key() {
        let error = PreconditionError::MissingArgument {
            operation: "changePassword".to_string(),
            name: "user_id".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "changePassword(...): You must supply a value for 'user_id'."
        );
    }

    #[test]
    fn test_api_error_status_only_for_response_errors() {
        let error = ApiError::Transport(HttpError::Response(HttpResponseError {
            code: 401,
            message: "{}".to_string(),
            body: serde_json::json!({}),
            error_reference: None,
        }));
        assert_eq!(error.status(), Some(401));

        let error = ApiError::Precondition(PreconditionError::UnknownOperation {
            resource: "/users".to_string(),
            name: "nope".to_string(),
        });
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyBaseUrl;
        let _: &dyn std::error::Error = &error;
        let error = PreconditionError::UnknownOperation {
            resource: "/users".to_string(),
            name: "x".to_string(),
        };
        let _: &dyn std::error::Error = &error;
    }
}
