//! Integration tests for the API client and its transport.
//!
//! These tests run the client against a local mock server and check what
//! actually goes over the wire: paths, form bodies, the `Authorization`
//! header, and how responses are surfaced.

use pact_api::{ApiClient, ApiError, HttpError, PreconditionError};
use serde_json::json;
use wiremock::matchers::{body_string, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, token: Option<&str>) -> ApiClient {
    ApiClient::new(&server.uri(), token).unwrap()
}

// ============================================================================
// Login / Logout
// ============================================================================

#[tokio::test]
async fn test_login_posts_form_and_coerces_user_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tokens/"))
        .and(body_string("login=a%40b.com&password=p"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user_id": 123,
            "token": "t"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server, None);
    let session = api.login("a@b.com", "p").await.unwrap();

    assert_eq!(session.user_id, "123");
    assert_eq!(session.token(), Some("t"));
    assert_eq!(session.into_value(), json!({"user_id": "123", "token": "t"}));

    // Logging in does not authorize the client.
    assert!(api.access_token().is_none());
}

#[tokio::test]
async fn test_login_with_empty_login_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user_id": 1})))
        .expect(0)
        .mount(&server)
        .await;

    let api = client_for(&server, None);
    let error = api.login("", "p").await.unwrap_err();

    match error {
        ApiError::Precondition(PreconditionError::InvalidArgument { operation, message }) => {
            assert_eq!(operation, "login");
            assert!(message.contains("You passed \"\" and \"*****\""));
        }
        other => panic!("expected a precondition error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_coerces_any_user_id_shape() {
    let cases = [
        (json!({"user_id": null, "token": "t"}), "null"),
        (json!({"user_id": true, "token": "t"}), "true"),
        (json!({"token": "t"}), ""),
    ];

    for (body, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tokens/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let api = client_for(&server, None);
        let session = api.login("a@b.com", "p").await.unwrap();

        assert_eq!(session.user_id, expected);
        assert_eq!(session.token(), Some("t"));
    }
}

#[tokio::test]
async fn test_login_with_non_object_body_is_unexpected_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tokens/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2])))
        .mount(&server)
        .await;

    let api = client_for(&server, None);
    let result = api.login("a@b.com", "p").await;

    assert!(matches!(
        result,
        Err(ApiError::UnexpectedResponse { operation: "login", .. })
    ));
}

#[tokio::test]
async fn test_logout_posts_access_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tokens/me"))
        .and(body_string("access_code=code-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server, Some("tok"));
    let body = api.logout("code-1").await.unwrap();

    assert_eq!(body, json!({"ok": true}));
}

// ============================================================================
// Credential handling
// ============================================================================

#[tokio::test]
async fn test_authorization_header_is_sent_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tokens/me"))
        .and(header("Authorization", "tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server, Some("tok-1"));
    api.logout("code").await.unwrap();
}

#[tokio::test]
async fn test_no_authorization_header_without_credential() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tokens/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server, None);
    api.logout("code").await.unwrap();
}

#[tokio::test]
async fn test_credential_change_applies_to_subsequent_requests() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("Authorization", "first"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"as": "first"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(header("Authorization", "second"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"as": "second"})))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server, Some("first"));
    let shared = api.clone();

    assert_eq!(api.logout("c").await.unwrap(), json!({"as": "first"}));

    shared.set_access_token("second").unwrap();
    assert_eq!(api.logout("c").await.unwrap(), json!({"as": "second"}));
}

#[tokio::test]
async fn test_set_base_redirects_subsequent_requests() {
    let old = MockServer::start().await;
    let new = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&old)
        .await;
    Mock::given(method("POST"))
        .and(path("/tokens/me"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&new)
        .await;

    let api = client_for(&old, None);
    api.set_base(&new.uri()).unwrap();

    // Empty body parses as an empty object.
    assert_eq!(api.logout("c").await.unwrap(), json!({}));
}

// ============================================================================
// Response handling
// ============================================================================

#[tokio::test]
async fn test_non_success_response_carries_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tokens/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "invalid credentials"})),
        )
        .mount(&server)
        .await;

    let api = client_for(&server, None);
    let error = api.login("a@b.com", "wrong").await.unwrap_err();

    assert_eq!(error.status(), Some(401));
    match error {
        ApiError::Transport(HttpError::Response(response)) => {
            assert_eq!(response.code, 401);
            assert_eq!(response.body, json!({"error": "invalid credentials"}));
            assert!(response.message.contains("invalid credentials"));
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_body_is_kept_raw() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tokens/me"))
        .respond_with(ResponseTemplate::new(200).set_body_string("bye"))
        .mount(&server)
        .await;

    let api = client_for(&server, None);
    assert_eq!(api.logout("c").await.unwrap(), json!({"raw_body": "bye"}));
}

#[tokio::test]
async fn test_network_failure_is_transport_error() {
    // Nothing listens on port 1.
    let api = ApiClient::new("http://127.0.0.1:1", None).unwrap();
    let result = api.logout("c").await;

    assert!(matches!(
        result,
        Err(ApiError::Transport(HttpError::Network(_)))
    ));
}
