//! Session tokens returned by the `/tokens/` endpoints.
//!
//! This module provides the [`LoginResponse`] type and the argument checks
//! shared by [`ApiClient::login`](crate::ApiClient::login) and
//! [`ApiClient::logout`](crate::ApiClient::logout).

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ApiError, PreconditionError};

/// Path of the login endpoint, relative to the base URL.
pub const LOGIN_PATH: &str = "/tokens/";

/// Path of the logout endpoint, relative to the base URL.
pub const LOGOUT_PATH: &str = "/tokens/me";

/// The body of a successful login.
///
/// The backend sends `user_id` either as a number or as a string. It is always
/// exposed as a `String` here: strings are kept, any other value is rendered
/// as JSON text (`true`, `null`), and a missing `user_id` becomes `""`. All
/// other fields are kept untouched in `extra`.
///
/// # Example
///
/// ```rust
/// use pact_api::auth::LoginResponse;
/// use serde_json::json;
///
/// let response = LoginResponse::from_body(json!({"user_id": 123, "token": "t"})).unwrap();
/// assert_eq!(response.user_id, "123");
/// assert_eq!(response.token(), Some("t"));
/// assert_eq!(response.into_value(), json!({"user_id": "123", "token": "t"}));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginResponse {
    /// The logged-in user's id, coerced to a string.
    pub user_id: String,

    /// Every other field of the response body.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LoginResponse {
    /// Builds a `LoginResponse` from a parsed response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedResponse`] if the body is not an object.
    pub fn from_body(body: Value) -> Result<Self, ApiError> {
        let mut extra = match body {
            Value::Object(map) => map,
            other => {
                return Err(ApiError::UnexpectedResponse {
                    operation: "login",
                    reason: format!("expected a JSON object, got {other}"),
                });
            }
        };

        let user_id = match extra.remove("user_id") {
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
            None => String::new(),
        };

        Ok(Self { user_id, extra })
    }

    /// Returns a field of the response other than `user_id`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Returns the session token, looked up under `access_token` then `token`.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        ["access_token", "token"]
            .into_iter()
            .find_map(|key| self.extra.get(key).and_then(Value::as_str))
    }

    /// Returns the response as a JSON object with the coerced `user_id`.
    #[must_use]
    pub fn into_value(self) -> Value {
        let mut map = self.extra;
        map.insert("user_id".to_string(), Value::String(self.user_id));
        Value::Object(map)
    }
}

/// Checks the arguments of a login call.
///
/// The password is never echoed back; only whether it was empty.
pub(crate) fn check_login_args(login: &str, password: &str) -> Result<(), PreconditionError> {
    if login.is_empty() || password.is_empty() {
        let shown_password = if password.is_empty() { "" } else { "*****" };
        return Err(PreconditionError::InvalidArgument {
            operation: "login".to_string(),
            message: format!(
                "You must supply a valid login and password. You passed \"{login}\" and \"{shown_password}\"."
            ),
        });
    }
    Ok(())
}

/// Checks the argument of a logout call.
pub(crate) fn check_logout_args(access_code: &str) -> Result<(), PreconditionError> {
    if access_code.is_empty() {
        return Err(PreconditionError::InvalidArgument {
            operation: "logout".to_string(),
            message: format!(
                "You must supply a valid access code. You passed \"{access_code}\"."
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_user_id_is_coerced_to_string() {
        let response = LoginResponse::from_body(json!({"user_id": 123, "token": "t"})).unwrap();
        assert_eq!(response.user_id, "123");
        assert_eq!(response.get("token"), Some(&json!("t")));
    }

    #[test]
    fn test_string_user_id_is_kept() {
        let response = LoginResponse::from_body(json!({"user_id": "u-9"})).unwrap();
        assert_eq!(response.user_id, "u-9");
        assert!(response.extra.is_empty());
    }

    #[test]
    fn test_any_user_id_shape_is_coerced() {
        let cases = [
            (json!({"user_id": null}), "null"),
            (json!({"user_id": true}), "true"),
            (json!({"user_id": 1.5}), "1.5"),
            (json!({"user_id": [1]}), "[1]"),
        ];
        for (body, expected) in cases {
            let response = LoginResponse::from_body(body).unwrap();
            assert_eq!(response.user_id, expected);
        }
    }

    #[test]
    fn test_missing_user_id_is_empty() {
        let response = LoginResponse::from_body(json!({"token": "t"})).unwrap();
        assert_eq!(response.user_id, "");
        assert_eq!(response.token(), Some("t"));
    }

    #[test]
    fn test_non_object_body_is_unexpected() {
        let result = LoginResponse::from_body(json!(["user_id", 1]));
        assert!(matches!(result, Err(ApiError::UnexpectedResponse { .. })));
    }

    #[test]
    fn test_token_prefers_access_token() {
        let response = LoginResponse::from_body(
            json!({"user_id": 1, "access_token": "a", "token": "b"}),
        )
        .unwrap();
        assert_eq!(response.token(), Some("a"));
    }

    #[test]
    fn test_serializes_with_string_user_id() {
        let response = LoginResponse::from_body(json!({"user_id": 7, "name": "Ada"})).unwrap();
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"user_id": "7", "name": "Ada"}));
    }

    #[test]
    fn test_check_login_args_masks_password() {
        let error = check_login_args("", "secret").unwrap_err();
        let message = error.to_string();
        assert!(message.contains("login(...)"));
        assert!(message.contains("You passed \"\" and \"*****\""));
        assert!(!message.contains("secret"));

        assert!(check_login_args("a@b.com", "").is_err());
        assert!(check_login_args("a@b.com", "secret").is_ok());
    }

    #[test]
    fn test_check_logout_args() {
        let error = check_logout_args("").unwrap_err();
        assert!(error.to_string().contains("valid access code"));
        assert!(check_logout_args("code").is_ok());
    }
}
