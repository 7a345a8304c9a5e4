//! Tests for the HTTP transport module

use super::*;
use crate::error::Error;
use crate::types::{Method, ParameterEncoding};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn url(server: &MockServer, p: &str) -> Url {
    Url::parse(&format!("{}{p}", server.uri())).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("soundcloud-sdk/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(5))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_builder_uses_method_encoding() {
    let base = Url::parse("https://api.example.com/tracks").unwrap();

    let get = HttpRequest::new(Method::GET, base.clone()).param("q", "x");
    assert_eq!(get.encoding, ParameterEncoding::Query);
    assert_eq!(get.parameters.get("q"), Some(&"x".to_string()));

    let post = HttpRequest::new(Method::POST, base.clone());
    assert_eq!(post.encoding, ParameterEncoding::Form);

    let overridden = HttpRequest::new(Method::POST, base).encoding(ParameterEncoding::Query);
    assert_eq!(overridden.encoding, ParameterEncoding::Query);
}

#[test]
fn test_response_is_success() {
    assert!(HttpResponse::new(200, "").is_success());
    assert!(HttpResponse::new(201, "").is_success());
    assert!(!HttpResponse::new(401, "").is_success());
    assert!(!HttpResponse::new(500, "").is_success());
}

#[tokio::test]
async fn test_get_sends_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tracks"))
        .and(query_param("client_id", "abc"))
        .and(query_param("ids", "1,2"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let request = HttpRequest::new(Method::GET, url(&mock_server, "/tracks"))
        .param("client_id", "abc")
        .param("ids", "1,2");
    let response = client.send(&request).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "[]");
}

#[tokio::test]
async fn test_post_sends_form_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tracks/1/comments.json"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("oauth_token=tok"))
        .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let request = HttpRequest::new(Method::POST, url(&mock_server, "/tracks/1/comments.json"))
        .param("oauth_token", "tok");
    let response = client.send(&request).await.unwrap();

    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_put_sends_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/7/favorites/1.json"))
        .and(query_param("oauth_token", "tok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let request = HttpRequest::new(Method::PUT, url(&mock_server, "/users/7/favorites/1.json"))
        .param("oauth_token", "tok");
    let response = client.send(&request).await.unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .and(header("X-Api-Version", "2"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().header("X-Api-Version", "2").build();
    let client = HttpClient::with_config(config).unwrap();
    let response = client
        .send(&HttpRequest::new(Method::GET, url(&mock_server, "/me")))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_error_status_is_a_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/me"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().unwrap();
    let response = client
        .send(&HttpRequest::new(Method::GET, url(&mock_server, "/me")))
        .await
        .unwrap();

    assert_eq!(response, HttpResponse::new(401, "unauthorized"));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let client = HttpClient::new().unwrap();
    let request = HttpRequest::new(Method::GET, Url::parse("http://127.0.0.1:1/").unwrap());

    let err = client.send(&request).await.unwrap_err();
    assert!(matches!(err, Error::Network { .. }));
}
