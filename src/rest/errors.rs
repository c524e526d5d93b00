//! Construction error types for declarative resources.
//!
//! Descriptor defects are caught when a [`Resource`](crate::rest::Resource)
//! is built, never when an operation is called:
//!
//! - [`DescriptorError`]: Something wrong with a single method descriptor
//! - [`ConstructionError`]: Something wrong with the resource as a whole, or
//!   a [`DescriptorError`] tagged with the offending method name
//!
//! # Example
//!
//! ```rust
//! use pact_api::ApiClient;
//! use pact_api::rest::{ConstructionError, DescriptorError, MethodDescriptor, Resource};
//!
//! let api = ApiClient::new("https://api.pact.example", None).unwrap();
//! let result = Resource::builder(&api, "/users")
//!     .method("changePassword", MethodDescriptor::put().path("{user_id}/password"))
//!     .build();
//!
//! assert!(matches!(
//!     result,
//!     Err(ConstructionError::InvalidDescriptor {
//!         source: DescriptorError::UnboundPlaceholder { .. },
//!         ..
//!     })
//! ));
//! ```

use thiserror::Error;

use crate::rest::path::MalformedTemplate;

/// A single method descriptor is inconsistent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    /// The path template has an unterminated or empty placeholder.
    #[error("Malformed path template: {0}")]
    MalformedTemplate(MalformedTemplate),

    /// A `{name}` placeholder has no matching URL parameter.
    #[error("Placeholder '{{{placeholder}}}' in '{template}' is not a declared URL parameter")]
    UnboundPlaceholder {
        /// The placeholder name.
        placeholder: String,
        /// The joined path template.
        template: String,
    },

    /// A URL parameter does not appear in the path template.
    #[error("URL parameter '{name}' has no placeholder in '{template}'")]
    UnusedUrlParam {
        /// The parameter name.
        name: String,
        /// The joined path template.
        template: String,
    },

    /// A name is declared in more than one of the url/query/payload lists.
    #[error("Parameter '{name}' is declared as both a {first} and a {second} parameter")]
    ParameterCollision {
        /// The parameter name.
        name: String,
        /// The first list it appears in.
        first: &'static str,
        /// The second list it appears in.
        second: &'static str,
    },

    /// A name appears twice in the same list.
    #[error("Parameter '{name}' is declared twice as a {kind} parameter")]
    DuplicateParameter {
        /// The parameter name.
        name: String,
        /// The list it is repeated in.
        kind: &'static str,
    },
}

/// A resource could not be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// The resource base path is empty.
    #[error("Resource base path cannot be empty")]
    EmptyBasePath,

    /// Two operations share a name.
    #[error("Operation '{name}' is defined more than once on {base_path}")]
    DuplicateMethod {
        /// The operation name.
        name: String,
        /// Base path of the resource.
        base_path: String,
    },

    /// An operation name is empty.
    #[error("Operation names cannot be empty ({base_path})")]
    EmptyMethodName {
        /// Base path of the resource.
        base_path: String,
    },

    /// A basic method name was not recognized.
    #[error("Unknown basic method '{name}'. Expected one of: list, retrieve, create, update, del")]
    UnknownBasicMethod {
        /// The unrecognized name.
        name: String,
    },

    /// A method descriptor is invalid.
    #[error("Invalid descriptor for '{method}': {source}")]
    InvalidDescriptor {
        /// The operation name.
        method: String,
        /// What is wrong with it.
        #[source]
        source: DescriptorError,
    },
}
