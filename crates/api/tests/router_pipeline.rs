//! End-to-end checks of the rewrite pipeline against the real route table.
//!
//! These run without a database: the pool is created lazily and only
//! handlers that never touch it are exercised.

#![allow(clippy::unwrap_used)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    middleware::map_request_with_state,
};
use sqlx::postgres::PgPoolOptions;
use tower::{Layer, ServiceExt};

use inkwell_api::{routes, routing::rewrite_request, AppState, Config, Environment};

fn test_state() -> AppState {
    let config = Config {
        bind_address: "127.0.0.1:0".to_string(),
        public_url: "https://example.com".to_string(),
        base_domain: "example.com".to_string(),
        dev_host: "localhost:3000".to_string(),
        environment: Environment::Production,
        database_url: "postgres://localhost/inkwell_test".to_string(),
        database_max_connections: 1,
    };
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/inkwell_test")
        .unwrap();
    AppState::new(config, pool)
}

async fn send(host: &str, path: &str) -> (StatusCode, String) {
    let state = test_state();
    let router = routes::create_router(state.clone());
    let app = map_request_with_state(state, rewrite_request).layer(router);

    let request = Request::builder()
        .uri(path)
        .header("host", host)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn root_on_main_domain_serves_landing() {
    let (status, body) = send("example.com", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Inkwell"));
}

#[tokio::test]
async fn www_alias_serves_landing() {
    let (status, body) = send("www.example.com", "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Inkwell"));
}

#[tokio::test]
async fn landing_also_reachable_at_home() {
    let (status, _) = send("example.com", "/home").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn liveness_served_as_is_on_any_host() {
    for host in ["example.com", "tenant1.example.com", "unrelated-host.com"] {
        let (status, _) = send(host, "/health/live").await;
        assert_eq!(status, StatusCode::OK, "liveness failed for host {host}");
    }
}

#[tokio::test]
async fn unknown_host_passes_through_to_fallback() {
    let (status, body) = send("unrelated-host.com", "/x").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("NOT_FOUND"));
}

#[tokio::test]
async fn app_subdomain_passes_through_to_fallback() {
    let (status, body) = send("app.example.com", "/anything").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("NOT_FOUND"));
}

#[tokio::test]
async fn static_file_request_skips_the_rewrite() {
    // On a tenant host this would otherwise become /site/tenant1/favicon.ico
    // and hit the site resolver; excluded paths never get that far.
    let (status, body) = send("tenant1.example.com", "/favicon.ico").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("NOT_FOUND"));
    assert!(!body.contains("SITE_NOT_FOUND"));
}

#[tokio::test]
async fn unmatched_main_domain_path_keeps_its_target() {
    let (status, body) = send("example.com", "/no-such-page").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("NOT_FOUND"));
}
