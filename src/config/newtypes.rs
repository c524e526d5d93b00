//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated API base URL.
///
/// The URL must carry a scheme and a host, and no query string or fragment
/// since endpoint paths are appended to it. A trailing `/` is dropped so that
/// endpoint paths (which always start with `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use pact_api::BaseUrl;
///
/// let base = BaseUrl::new("https://api.pact.example/v1/").unwrap();
/// assert_eq!(base.as_ref(), "https://api.pact.example/v1");
/// assert_eq!(base.join("/tokens/"), "https://api.pact.example/v1/tokens/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBaseUrl`] if the URL is blank and
    /// [`ConfigError::InvalidBaseUrl`] if it has no scheme or host, or carries
    /// a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim();
        if url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        let invalid = || ConfigError::InvalidBaseUrl {
            url: url.to_string(),
        };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let remainder = &url[scheme_end + 3..];
        if remainder.contains(['?', '#']) {
            return Err(invalid());
        }
        let host_end = remainder.find([':', '/']).unwrap_or(remainder.len());
        if remainder[..host_end].is_empty() {
            return Err(invalid());
        }

        Ok(Self(url.trim_end_matches('/').to_string()))
    }

    /// Appends a path to this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.0)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated access token.
///
/// The token is sent verbatim as the `Authorization` header value. Its
/// `Debug` output is masked to keep it out of logs.
///
/// # Example
///
/// ```rust
/// use pact_api::AccessToken;
///
/// let token = AccessToken::new("secret-token").unwrap();
/// assert_eq!(token.as_ref(), "secret-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_accepts_scheme_and_host() {
        let base = BaseUrl::new("https://api.pact.example").unwrap();
        assert_eq!(base.as_ref(), "https://api.pact.example");

        let base = BaseUrl::new("http://127.0.0.1:8080/v2").unwrap();
        assert_eq!(base.as_ref(), "http://127.0.0.1:8080/v2");
    }

    #[test]
    fn test_base_url_trims_whitespace_and_trailing_slash() {
        let base = BaseUrl::new("  https://api.pact.example/v1//  ").unwrap();
        assert_eq!(base.as_ref(), "https://api.pact.example/v1");
    }

    #[test]
    fn test_base_url_rejects_empty() {
        assert_eq!(BaseUrl::new(""), Err(ConfigError::EmptyBaseUrl));
        assert_eq!(BaseUrl::new("   "), Err(ConfigError::EmptyBaseUrl));
    }

    #[test]
    fn test_base_url_rejects_missing_scheme_or_host() {
        assert!(matches!(
            BaseUrl::new("api.pact.example"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("https://"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("ht tp://host"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_base_url_rejects_query_and_fragment() {
        for url in [
            "https://api.pact.example/v1?key=1",
            "https://api.pact.example/v1#top",
            "https://api.pact.example?",
        ] {
            assert_eq!(
                BaseUrl::new(url),
                Err(ConfigError::InvalidBaseUrl {
                    url: url.to_string()
                }),
                "{url}"
            );
        }
    }

    #[test]
    fn test_base_url_join() {
        let base = BaseUrl::new("https://api.pact.example/v1").unwrap();
        assert_eq!(base.join("/users/7"), "https://api.pact.example/v1/users/7");
    }

    #[test]
    fn test_access_token_rejects_empty() {
        assert_eq!(AccessToken::new(""), Err(ConfigError::EmptyAccessToken));
    }

    #[test]
    fn test_access_token_debug_is_masked() {
        let token = AccessToken::new("very-secret").unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("very-secret"));
        assert_eq!(debug, "AccessToken(*****)");
    }
}
