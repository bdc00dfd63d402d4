//! oEmbed title lookup tests against a mock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ytt_api::services::{title_or_id, OembedTitleLookup, TitleError, TitleLookup};
use ytt_models::VideoId;

async fn lookup_for(server: &MockServer) -> OembedTitleLookup {
    OembedTitleLookup::new(format!("{}/oembed", server.uri()), Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn test_fetch_title() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .and(query_param("url", "http://www.youtube.com/watch?v=abc123"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title": "Rick Astley - Never Gonna Give You Up",
            "author_name": "Rick Astley",
            "type": "video"
        })))
        .mount(&server)
        .await;

    let lookup = lookup_for(&server).await;
    let title = lookup.fetch_title(&VideoId::from("abc123")).await.unwrap();
    assert_eq!(title, "Rick Astley - Never Gonna Give You Up");
}

#[tokio::test]
async fn test_not_found_falls_back_to_video_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let lookup = lookup_for(&server).await;
    let video_id = VideoId::from("missing1");

    assert!(matches!(
        lookup.fetch_title(&video_id).await,
        Err(TitleError::Http(_))
    ));
    assert_eq!(title_or_id(&lookup, &video_id).await, "missing1");
}

#[tokio::test]
async fn test_missing_title_field_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "author_name": "someone" })))
        .mount(&server)
        .await;

    let lookup = lookup_for(&server).await;
    let video_id = VideoId::from("abc123");

    assert!(matches!(
        lookup.fetch_title(&video_id).await,
        Err(TitleError::MissingTitle)
    ));
    assert_eq!(title_or_id(&lookup, &video_id).await, "abc123");
}

#[tokio::test]
async fn test_invalid_json_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let lookup = lookup_for(&server).await;
    assert_eq!(title_or_id(&lookup, &VideoId::from("abc123")).await, "abc123");
}

#[tokio::test]
async fn test_slow_endpoint_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "title": "late" }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let lookup = OembedTitleLookup::new(format!("{}/oembed", server.uri()), Duration::from_millis(200)).unwrap();
    assert_eq!(title_or_id(&lookup, &VideoId::from("abc123")).await, "abc123");
}
