//! Tests for the resources module

use super::*;
use crate::auth::Session;
use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind};
use crate::types::StringMap;
use crate::Client;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::time::Duration;
use test_case::test_case;
use url::Url;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user(id: u64) -> Value {
    json!({"id": id, "username": format!("user{id}")})
}

fn track(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Track {id}"),
        "created_at": "2015/04/25 10:00:00 +0000",
        "duration": 180_000,
        "user": user(1),
        "genre": "Electronic",
        "streamable": true
    })
}

fn client(server: &MockServer) -> Client {
    let config = ClientConfig::new("cid")
        .with_api_url(Url::parse(&server.uri()).unwrap())
        .with_token_url(Url::parse(&format!("{}/oauth2/token", server.uri())).unwrap())
        .with_client_secret("secret");
    Client::new(config).unwrap()
}

// ============================================================================
// SearchQuery Tests
// ============================================================================

#[test_case(SearchQuery::Query("deep house".into()), &[("q", "deep house")] ; "free text")]
#[test_case(SearchQuery::Tags(vec!["a".into(), "b".into()]), &[("tags", "a,b")] ; "tags")]
#[test_case(SearchQuery::Genres(vec!["rock".into()]), &[("genres", "rock")] ; "genres")]
#[test_case(SearchQuery::License("cc-by".into()), &[("license", "cc-by")] ; "license")]
#[test_case(SearchQuery::Bpm { from: Some(120), to: Some(130) }, &[("bpm[from]", "120"), ("bpm[to]", "130")] ; "bpm range")]
#[test_case(SearchQuery::Duration { from: None, to: Some(60_000) }, &[("duration[to]", "60000")] ; "open duration range")]
#[test_case(SearchQuery::Ids(vec![1, 2, 3]), &[("ids", "1,2,3")] ; "ids")]
fn test_search_query_parameters(query: SearchQuery, expected: &[(&str, &str)]) {
    let mut parameters = StringMap::new();
    query.apply(&mut parameters);

    let expected: StringMap = expected
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    assert_eq!(parameters, expected);
}

// ============================================================================
// Model Tests
// ============================================================================

#[test]
fn test_track_model_defaults() {
    let track: Track = serde_json::from_value(json!({
        "id": 5,
        "title": "t",
        "created_at": "now",
        "duration": 1,
        "user": user(2)
    }))
    .unwrap();

    assert!(!track.streamable);
    assert_eq!(track.genre, None);
    assert_eq!(track.user.username, "user2");
}

#[test]
fn test_comment_model_requires_user() {
    let result: Result<Comment, _> = serde_json::from_value(json!({
        "id": 1,
        "body": "nice",
        "created_at": "now",
        "track_id": 5
    }));
    assert!(result.is_err());
}

// ============================================================================
// Read operations
// ============================================================================

#[tokio::test]
async fn test_track_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks/42.json"))
        .and(query_param("client_id", "cid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(track(42)))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server).track(42).await;
    let track = response.into_result().unwrap();
    assert_eq!(track.id, 42);
    assert_eq!(track.title, "Track 42");
    assert_eq!(track.genre.as_deref(), Some("Electronic"));
}

#[tokio::test]
async fn test_track_missing_required_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks/42.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42})))
        .mount(&server)
        .await;

    let err = client(&server).track(42).await.into_result().unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert_eq!(err.kind(), ErrorKind::Generic);
}

#[tokio::test]
async fn test_tracks_by_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .and(query_param("ids", "1,2"))
        .and(query_param("client_id", "cid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([track(1), track(2)])))
        .mount(&server)
        .await;

    let tracks = client(&server).tracks(&[1, 2]).await.into_result().unwrap();
    let ids: Vec<u64> = tracks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_tracks_one_bad_item_fails_all() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([track(1), {"id": 2}, track(3)])),
        )
        .mount(&server)
        .await;

    let err = client(&server).tracks(&[1, 2, 3]).await.into_result().unwrap_err();
    assert!(err.to_string().contains("item 1"));
}

#[tokio::test]
async fn test_search_tracks_sends_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks"))
        .and(query_param("q", "ambient"))
        .and(query_param("genres", "chill,lofi"))
        .and(query_param("linked_partitioning", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collection": [track(7)],
            "next_href": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .search_tracks(&[
            SearchQuery::Query("ambient".into()),
            SearchQuery::Genres(vec!["chill".into(), "lofi".into()]),
        ])
        .await;

    assert!(!response.has_next_page());
    assert_eq!(response.into_page().unwrap()[0].id, 7);
}

#[tokio::test]
async fn test_comments_follow_next_href() {
    let server = MockServer::start().await;
    let comment = |id: u64| {
        json!({"id": id, "body": "hi", "created_at": "now", "track_id": 9, "user": user(3), "timestamp": 1500})
    };

    Mock::given(method("GET"))
        .and(path("/tracks/9/comments.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collection": [comment(1)],
            "next_href": format!("{}/tracks/9/comments.json/page2", server.uri())
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tracks/9/comments.json/page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collection": [comment(2)]
        })))
        .mount(&server)
        .await;

    let first = client(&server).comments(9).await;
    assert!(first.has_next_page());
    assert_eq!(first.page().as_ref().unwrap()[0].timestamp, Some(1500));

    let second = first.advance().await.unwrap();
    assert_eq!(second.page().as_ref().unwrap()[0].id, 2);
    assert!(!second.has_next_page());
    assert!(matches!(second.advance().await, Err(Error::NoMorePages)));
}

#[tokio::test]
async fn test_favoriters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tracks/9/favoriters.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collection": [user(4), user(5)],
            "next_href": ""
        })))
        .mount(&server)
        .await;

    let response = client(&server).favoriters(9).await;
    assert!(!response.has_next_page());
    let names: Vec<String> = response.into_page().unwrap().into_iter().map(|u| u.username).collect();
    assert_eq!(names, vec!["user4".to_string(), "user5".to_string()]);
}

// ============================================================================
// Authorized operations
// ============================================================================

#[tokio::test]
async fn test_comment_without_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server)
        .comment(9, "hi", Duration::from_secs(2))
        .await
        .into_result()
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoSession);
}

#[tokio::test]
async fn test_comment_posts_form_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tracks/9/comments.json"))
        .and(body_string_contains("comment%5Bbody%5D=great+drop"))
        .and(body_string_contains("comment%5Btimestamp%5D=2500"))
        .and(body_string_contains("oauth_token=tok"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 77,
            "body": "great drop",
            "created_at": "now",
            "track_id": 9,
            "timestamp": 2500,
            "user": user(1)
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.login(Session::new("tok")).await;

    let comment = client
        .comment(9, "great drop", Duration::from_millis(2500))
        .await
        .into_result()
        .unwrap();
    assert_eq!(comment.id, 77);
}

#[test_case("200 - OK" ; "ok")]
#[test_case("201 - Created" ; "created")]
#[tokio::test]
async fn test_favorite_success(status: &str) {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/users/3/favorites/9.json"))
        .and(query_param("oauth_token", "tok"))
        .and(query_param("client_id", "cid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": status})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.login(Session::new("tok")).await;

    assert!(client.favorite(3, 9).await.into_result().unwrap());
}

#[tokio::test]
async fn test_favorite_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "422 - Unprocessable"})))
        .mount(&server)
        .await;

    let client = client(&server);
    client.login(Session::new("tok")).await;

    let err = client.favorite(3, 9).await.into_result().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Generic);
}

#[tokio::test]
async fn test_favorite_refreshes_expired_token() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(query_param("oauth_token", "old"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(body_string_contains("refresh_token=r1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "fresh",
            "refresh_token": "r2"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(query_param("oauth_token", "fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "200 - OK"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client
        .login(Session::new("old").with_refresh_token("r1"))
        .await;

    assert!(client.favorite(3, 9).await.into_result().unwrap());

    let session = client.session().current().await.unwrap();
    assert_eq!(session.access_token, "fresh");
    assert_eq!(session.refresh_token.as_deref(), Some("r2"));
}
