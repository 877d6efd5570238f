#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use httpmock::MockServer;
use link_relay::api::handlers::health_handler;
use link_relay::api::routes::api_routes;
use link_relay::config::Config;
use link_relay::state::AppState;

/// Config with every upstream routed to `upstream` and fast timeouts.
pub fn test_config(upstream: &MockServer) -> Config {
    Config {
        upstream_timeout_ms: 500,
        upstream_retries: 1,
        upstream_retry_delay_ms: 10,
        unshorten_api_url: upstream.url("/json"),
        upstream_base_url: Some(upstream.base_url()),
        ..Config::default()
    }
}

pub fn create_test_state(upstream: &MockServer) -> AppState {
    AppState::from_config(&test_config(upstream)).unwrap()
}

pub fn create_test_app(upstream: &MockServer) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .with_state(create_test_state(upstream))
}

pub fn create_test_server(upstream: &MockServer) -> TestServer {
    TestServer::new(create_test_app(upstream)).unwrap()
}
