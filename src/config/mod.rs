//! Configuration types for the Pact API client.
//!
//! - [`PactConfig`]: The configuration struct holding client settings
//! - [`PactConfigBuilder`]: A builder for constructing [`PactConfig`] instances
//! - [`BaseUrl`]: A validated API base URL
//! - [`AccessToken`]: A validated credential with masked debug output
//!
//! # Example
//!
//! ```rust
//! use pact_api::{PactConfig, BaseUrl, AccessToken};
//!
//! let config = PactConfig::builder()
//!     .base_url(BaseUrl::new("https://api.pact.example/v1").unwrap())
//!     .access_token(AccessToken::new("token").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{AccessToken, BaseUrl};

use crate::error::ConfigError;

/// Configuration for an [`ApiClient`](crate::ApiClient).
///
/// # Thread Safety
///
/// `PactConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct PactConfig {
    base_url: BaseUrl,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
}

impl PactConfig {
    /// Creates a new builder for constructing a `PactConfig`.
    #[must_use]
    pub fn builder() -> PactConfigBuilder {
        PactConfigBuilder::new()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the initial access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PactConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PactConfig>();
};

/// Builder for constructing [`PactConfig`] instances.
///
/// `base_url` is required; everything else is optional.
#[derive(Debug, Default)]
pub struct PactConfigBuilder {
    base_url: Option<BaseUrl>,
    access_token: Option<AccessToken>,
    user_agent_prefix: Option<String>,
}

impl PactConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the initial access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PactConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` was not set.
    pub fn build(self) -> Result<PactConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(PactConfig {
            base_url,
            access_token: self.access_token,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
