mod common;

use httpmock::Method::HEAD;
use httpmock::prelude::*;
use link_relay::application::services::unshorten_service::{DEMO_NOTE, MOCK_ORIGINAL_URLS};
use serde_json::json;

#[tokio::test]
async fn test_unshorten_reads_location_from_head() {
    let upstream = MockServer::start_async().await;
    let head = upstream
        .mock_async(|when, then| {
            when.method(HEAD).path("/s/abc");
            then.status(301)
                .header("Location", "https://www.example.com/landing");
        })
        .await;
    let get = upstream
        .mock_async(|when, then| {
            when.method(GET).path("/s/abc");
            then.status(200);
        })
        .await;
    let api = upstream
        .mock_async(|when, then| {
            when.path_contains("/json/");
            then.status(200)
                .json_body(json!({ "resolved_url": "https://wrong.example" }));
        })
        .await;

    let server = common::create_test_server(&upstream);
    let short_url = upstream.url("/s/abc");

    let response = server
        .post("/api/unshorten")
        .json(&json!({ "url": short_url }))
        .await;

    response.assert_status_ok();
    head.assert_hits_async(1).await;
    get.assert_hits_async(0).await;
    api.assert_hits_async(0).await;

    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({
            "originalUrl": "https://www.example.com/landing",
            "shortenedUrl": short_url
        })
    );
}

#[tokio::test]
async fn test_unshorten_joins_relative_location() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(HEAD).path("/s/rel");
            then.status(302).header("Location", "/target?id=7");
        })
        .await;

    let server = common::create_test_server(&upstream);

    let response = server
        .post("/api/unshorten")
        .json(&json!({ "url": upstream.url("/s/rel") }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["originalUrl"],
        upstream.url("/target?id=7")
    );
}

#[tokio::test]
async fn test_unshorten_follows_get_redirects() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(HEAD).path("/s/js");
            then.status(200);
        })
        .await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/s/js");
            then.status(302).header("Location", "/final");
        })
        .await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/final");
            then.status(200).body("<html></html>");
        })
        .await;

    let server = common::create_test_server(&upstream);

    let response = server
        .post("/api/unshorten")
        .json(&json!({ "url": upstream.url("/s/js") }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["originalUrl"], upstream.url("/final"));
    assert!(json.get("note").is_none());
}

#[tokio::test]
async fn test_unshorten_head_redirect_without_location_falls_through_to_get() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(HEAD).path("/s/noloc");
            then.status(301);
        })
        .await;
    let get = upstream
        .mock_async(|when, then| {
            when.method(GET).path("/s/noloc");
            then.status(302).header("Location", "/dest");
        })
        .await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/dest");
            then.status(200);
        })
        .await;

    let server = common::create_test_server(&upstream);

    let response = server
        .post("/api/unshorten")
        .json(&json!({ "url": upstream.url("/s/noloc") }))
        .await;

    response.assert_status_ok();
    get.assert_hits_async(1).await;
    assert_eq!(
        response.json::<serde_json::Value>()["originalUrl"],
        upstream.url("/dest")
    );
}

#[tokio::test]
async fn test_unshorten_uses_resolver_api_last() {
    let upstream = MockServer::start_async().await;
    let api = upstream
        .mock_async(|when, then| {
            when.method(GET).path_contains("/json/");
            then.status(200).json_body(json!({
                "requested_url": "https://sho.rt/x",
                "success": true,
                "resolved_url": "https://www.example.com/from-api"
            }));
        })
        .await;

    let server = common::create_test_server(&upstream);

    // HEAD and GET both answer 404 without moving
    let response = server
        .post("/api/unshorten")
        .json(&json!({ "url": upstream.url("/s/api") }))
        .await;

    response.assert_status_ok();
    api.assert_hits_async(1).await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["originalUrl"], "https://www.example.com/from-api");
    assert!(json.get("note").is_none());
}

#[tokio::test]
async fn test_unshorten_failure_returns_mock_url() {
    let upstream = MockServer::start_async().await;
    let server = common::create_test_server(&upstream);
    let short_url = upstream.url("/s/dead");

    let response = server
        .post("/api/unshorten")
        .json(&json!({ "url": short_url }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shortenedUrl"], short_url);
    assert_eq!(json["note"], DEMO_NOTE);
    assert!(MOCK_ORIGINAL_URLS.contains(&json["originalUrl"].as_str().unwrap()));
}

#[tokio::test]
async fn test_unshorten_missing_url() {
    let upstream = MockServer::start_async().await;
    let server = common::create_test_server(&upstream);

    for body in [json!({}), json!({ "url": "" })] {
        let response = server.post("/api/unshorten").json(&body).await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>(),
            json!({ "error": "URL is required" })
        );
    }
}

#[tokio::test]
async fn test_unshorten_unreadable_body() {
    let upstream = MockServer::start_async().await;
    let server = common::create_test_server(&upstream);

    let response = server
        .post("/api/unshorten")
        .json(&json!({ "url": 42 }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Invalid request body"
    );
}
