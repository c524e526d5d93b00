//! Integration tests for the HTTP client functionality.
//!
//! These tests verify the client configuration, request building, and how
//! each verb is encoded on the wire.

use pact_api::clients::{DataType, HttpClient, HttpMethod, HttpRequest};
use pact_api::{AccessToken, BaseUrl, InvalidHttpRequestError, PactConfig};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client for the given base URL and optional token.
fn create_test_client(base_url: &str, token: Option<&str>) -> HttpClient {
    let mut builder = PactConfig::builder().base_url(BaseUrl::new(base_url).unwrap());
    if let Some(token) = token {
        builder = builder.access_token(AccessToken::new(token).unwrap());
    }
    HttpClient::new(&builder.build().unwrap())
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_client_default_headers() {
    let client = create_test_client("https://api.pact.example/v1/", Some("tok"));

    assert_eq!(client.base_url().as_ref(), "https://api.pact.example/v1");
    assert_eq!(
        client.default_headers().get("Accept"),
        Some(&"application/json".to_string())
    );
    assert!(client.default_headers().contains_key("User-Agent"));

    // The credential is attached per request, not stored as a default header.
    assert!(!client.default_headers().contains_key("Authorization"));
}

#[test]
fn test_invalid_request_produces_correct_error() {
    let request = HttpRequest {
        http_method: HttpMethod::Delete,
        path: "/users/me/orders/1".to_string(),
        query: Vec::new(),
        body: Some(vec![("reason".to_string(), json!("moving"))]),
        body_type: Some(DataType::Form),
        extra_headers: None,
    };

    assert!(matches!(
        request.verify(),
        Err(InvalidHttpRequestError::BodyNotAllowed { .. })
    ));
}

// ============================================================================
// Wire encoding
// ============================================================================

#[tokio::test]
async fn test_get_with_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/me/coffees"))
        .and(query_param("page", "2"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri(), None);
    let response = client
        .get(
            "/users/me/coffees",
            vec![("page".to_string(), "2".to_string())],
        )
        .await
        .unwrap();

    assert_eq!(response.code, 200);
    assert_eq!(response.body, json!([1, 2]));
}

#[tokio::test]
async fn test_put_and_patch_are_form_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/7"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(body_string("first_name=Ada&opt_in=true"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/users/7/email"))
        .and(body_string("email=ada%40example.com"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri(), Some("tok"));
    client
        .put(
            "/users/7",
            vec![
                ("first_name".to_string(), json!("Ada")),
                ("opt_in".to_string(), json!(true)),
            ],
            Vec::new(),
        )
        .await
        .unwrap();
    client
        .patch(
            "/users/7/email",
            vec![("email".to_string(), json!("ada@example.com"))],
            Vec::new(),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_json_body_when_requested() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/users/me/contact"))
        .and(body_json(json!({"subject": "Hi", "tags": ["a", "b"]})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri(), None);
    let request = HttpRequest::builder(HttpMethod::Post, "/users/me/contact")
        .body_param("subject", "Hi")
        .body_param("tags", json!(["a", "b"]))
        .body_type(DataType::Json)
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 201);
}

#[tokio::test]
async fn test_delete_with_extra_header() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/me/coffee-ratings/ETH-01"))
        .and(header("X-Request-Source", "tests"))
        .respond_with(ResponseTemplate::new(204).insert_header("X-Request-Id", "req-1"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri(), None);
    let request = HttpRequest::builder(HttpMethod::Delete, "/users/me/coffee-ratings/ETH-01")
        .header("X-Request-Source", "tests")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 204);
    assert_eq!(response.request_id(), Some("req-1"));
    assert_eq!(response.body, json!({}));
}
