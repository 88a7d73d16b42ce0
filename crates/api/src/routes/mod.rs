//! API routes
//!
//! Health probes, the main-domain namespace, the admin surface, and the
//! tenant site namespace the host router rewrites into.

pub mod admin;
pub mod health;
pub mod home;
pub mod sites;

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{error::ApiError, state::AppState};

/// Create the route table.
///
/// Note that the rewrite layer is NOT applied here: it has to wrap the
/// router from outside, because `Router::layer` middleware runs after path
/// matching and a URI rewritten there would never be re-matched. `main` (and
/// the integration tests) wrap this router with
/// `map_request_with_state(state, rewrite_request)`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Infrastructure probes; the exclusion predicate keeps these out of
        // the rewrite pipeline on any hostname.
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        // Main-domain namespace
        .route("/home", get(home::home))
        // Admin namespace; reached directly or via the /dashboard rewrite
        .route("/admin/dashboard", get(admin::dashboard))
        // Tenant namespace, populated by tenant-site rewrites
        .route("/site/:subdomain", get(sites::site_index))
        .route("/site/:subdomain/posts", get(sites::list_posts))
        .route("/site/:subdomain/posts/:slug", get(sites::get_post))
        // Unmatched paths, including pass-through requests, end here
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
