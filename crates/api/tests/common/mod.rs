//! Common test utilities for integration tests.
//!
//! Tests drive the router in-process with `tower::ServiceExt::oneshot`
//! against fresh in-memory stores.

// Not every helper is used by every integration test binary.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use call_analytics_api::{
    app::create_app,
    config::{Config, DataConfig, LoggingConfig, SecurityConfig, ServerConfig},
};
use fake::{faker::name::en::Name, Fake};
use persistence::store::{create_stores, Stores};

/// Test configuration with demo data seeded and no simulated latency.
pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            request_timeout_secs: 30,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
            format: "pretty".to_string(),
        },
        security: SecurityConfig::default(),
        data: DataConfig {
            seed_demo_data: true,
            simulated_latency_ms: 0,
        },
    }
}

/// Create stores for the given configuration.
pub async fn create_test_stores(config: &Config) -> Stores {
    create_stores(&config.data.store_config())
        .await
        .expect("Failed to create test stores")
}

/// Create a test application router.
pub fn create_test_app(config: Config, stores: Stores) -> Router {
    create_app(config, stores)
}

/// Create a router over freshly seeded stores, returning the stores too.
pub async fn seeded_app() -> (Router, Stores) {
    let config = test_config();
    let stores = create_test_stores(&config).await;
    (create_test_app(config, stores.clone()), stores)
}

/// Create a router over empty stores.
pub async fn empty_app() -> (Router, Stores) {
    let mut config = test_config();
    config.data.seed_demo_data = false;
    let stores = create_test_stores(&config).await;
    (create_test_app(config, stores.clone()), stores)
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}

/// A random agent name for generated call records.
pub fn fake_agent() -> String {
    Name().fake()
}

/// Generate a unique campaign id for testing.
pub fn unique_campaign_id() -> String {
    format!("test-{}", uuid::Uuid::new_v4().simple())
}
