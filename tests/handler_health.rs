mod common;

use httpmock::MockServer;
use link_relay::domain::providers::SELECTABLE_PROVIDERS;

#[tokio::test]
async fn test_health_endpoint_success() {
    let upstream = MockServer::start_async().await;
    let server = common::create_test_server(&upstream);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["providers"]["status"], "ok");
    assert_eq!(
        json["checks"]["providers"]["message"],
        "14 providers registered"
    );
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let upstream = MockServer::start_async().await;
    let server = common::create_test_server(&upstream);

    let json = server.get("/health").await.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
}

#[tokio::test]
async fn test_providers_endpoint_lists_selectable_services() {
    let upstream = MockServer::start_async().await;
    let server = common::create_test_server(&upstream);

    let response = server.get("/api/providers").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let providers = json["providers"].as_array().unwrap();
    assert_eq!(providers.len(), SELECTABLE_PROVIDERS.len());

    assert_eq!(providers[0]["id"], "is.gd");
    assert_eq!(providers[0]["recommended"], true);
    assert_eq!(providers[1]["name"], "TinyURL");
    assert!(providers.iter().all(|p| p["description"].is_string()));
}
