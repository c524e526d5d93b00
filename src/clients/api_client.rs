//! Shared API client handle.
//!
//! This module provides the [`ApiClient`] type: the context every resource
//! is built against, and the home of the hand-built `login`/`logout` calls.

use std::sync::Arc;

use serde_json::Value;

use crate::auth::{check_login_args, check_logout_args, LoginResponse, LOGIN_PATH, LOGOUT_PATH};
use crate::clients::HttpClient;
use crate::config::{AccessToken, BaseUrl, PactConfig};
use crate::error::{ApiError, ConfigError};

/// Handle to one logical backend connection.
///
/// Cloning an `ApiClient` is cheap and every clone shares the same base URL
/// and credential, so a credential set after login is seen by every resource
/// built from any clone.
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use pact_api::ApiClient;
///
/// let api = ApiClient::new("https://api.pact.example/v1", None)?;
///
/// let session = api.login("a@b.com", "secret").await?;
/// assert!(!session.user_id.is_empty());
///
/// api.set_access_token(session.token().unwrap_or_default())?;
/// api.logout("access-code").await?;
/// ```
#[derive(Clone, Debug)]
pub struct ApiClient {
    http_client: Arc<HttpClient>,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a client for `base_url`, optionally pre-authorized.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL is empty or malformed, or if
    /// an empty access token is supplied.
    pub fn new(base_url: &str, access_token: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = PactConfig::builder().base_url(BaseUrl::new(base_url)?);
        if let Some(token) = access_token {
            builder = builder.access_token(AccessToken::new(token)?);
        }
        Ok(Self::from_config(&builder.build()?))
    }

    /// Creates a client from a full configuration.
    #[must_use]
    pub fn from_config(config: &PactConfig) -> Self {
        Self {
            http_client: Arc::new(HttpClient::new(config)),
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the current base URL.
    #[must_use]
    pub fn base_url(&self) -> BaseUrl {
        self.http_client.base_url()
    }

    /// Sets the base URL used by subsequent requests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `base` is empty or malformed.
    pub fn set_base(&self, base: &str) -> Result<(), ConfigError> {
        self.http_client.set_base_url(BaseUrl::new(base)?);
        Ok(())
    }

    /// Returns the current credential, if one is set.
    #[must_use]
    pub fn access_token(&self) -> Option<AccessToken> {
        self.http_client.access_token()
    }

    /// Sets the credential attached to every subsequent request.
    ///
    /// Requests already in flight keep the credential they were sent with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if `token` is empty.
    pub fn set_access_token(&self, token: &str) -> Result<(), ConfigError> {
        self.http_client
            .set_access_token(Some(AccessToken::new(token)?));
        Ok(())
    }

    /// Drops the credential; subsequent requests are sent unauthenticated.
    pub fn clear_access_token(&self) {
        self.http_client.set_access_token(None);
    }

    /// Logs a user in.
    ///
    /// Sends `POST {base}/tokens/` with form body `login`, `password`. The
    /// credential on this client is not changed; call
    /// [`set_access_token`](Self::set_access_token) with the returned token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Precondition`] before sending anything if either
    /// argument is empty, [`ApiError::Transport`] if the request fails, and
    /// [`ApiError::UnexpectedResponse`] if the body is not a JSON object.
    pub async fn login(&self, login: &str, password: &str) -> Result<LoginResponse, ApiError> {
        check_login_args(login, password)?;

        let body = vec![
            ("login".to_string(), Value::from(login)),
            ("password".to_string(), Value::from(password)),
        ];
        let response = self.http_client.post(LOGIN_PATH, body, Vec::new()).await?;

        LoginResponse::from_body(response.body)
    }

    /// Logs a session out.
    ///
    /// Sends `POST {base}/tokens/me` with form body `access_code`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Precondition`] before sending anything if
    /// `access_code` is empty, and [`ApiError::Transport`] if the request fails.
    pub async fn logout(&self, access_code: &str) -> Result<Value, ApiError> {
        check_logout_args(access_code)?;

        let body = vec![("access_code".to_string(), Value::from(access_code))];
        let response = self.http_client.post(LOGOUT_PATH, body, Vec::new()).await?;

        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PreconditionError;

    #[test]
    fn test_new_validates_base_url() {
        assert!(matches!(
            ApiClient::new("", None),
            Err(ConfigError::EmptyBaseUrl)
        ));
        assert!(matches!(
            ApiClient::new("https://api.pact.example", Some("")),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_clones_share_credential_and_base() {
        let api = ApiClient::new("https://api.pact.example", None).unwrap();
        let other = api.clone();

        api.set_access_token("token-1").unwrap();
        assert_eq!(
            other.access_token().as_ref().map(AccessToken::as_ref),
            Some("token-1")
        );

        other.set_base("https://staging.pact.example").unwrap();
        assert_eq!(api.base_url().as_ref(), "https://staging.pact.example");

        api.clear_access_token();
        assert!(other.access_token().is_none());
    }

    #[test]
    fn test_setters_reject_empty_values() {
        let api = ApiClient::new("https://api.pact.example", Some("keep")).unwrap();

        assert_eq!(api.set_base(""), Err(ConfigError::EmptyBaseUrl));
        assert_eq!(api.set_access_token(""), Err(ConfigError::EmptyAccessToken));

        assert_eq!(api.base_url().as_ref(), "https://api.pact.example");
        assert_eq!(
            api.access_token().as_ref().map(AccessToken::as_ref),
            Some("keep")
        );
    }

    #[tokio::test]
    async fn test_login_with_empty_login_fails_before_dispatch() {
        // Unroutable host: reaching the network would surface a transport error instead.
        let api = ApiClient::new("http://pact.invalid", None).unwrap();

        let result = api.login("", "secret").await;
        assert!(matches!(
            result,
            Err(ApiError::Precondition(PreconditionError::InvalidArgument { ref operation, .. }))
                if operation == "login"
        ));
    }

    #[tokio::test]
    async fn test_logout_with_empty_code_fails_before_dispatch() {
        let api = ApiClient::new("http://pact.invalid", None).unwrap();

        let result = api.logout("").await;
        assert!(matches!(
            result,
            Err(ApiError::Precondition(PreconditionError::InvalidArgument { .. }))
        ));
    }
}
