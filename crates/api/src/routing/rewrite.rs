//! Rewrite middleware.
//!
//! Applies the host router's decision to the request URI before route
//! matching. The layer must wrap the router from outside (see
//! [`crate::routes::create_router`]): axum matches the path before
//! route-level middleware runs, which would be too late to change the
//! dispatch target.

use axum::{
    extract::{Request, State},
    http::{header::HOST, uri::Uri},
};
use tracing::debug;

use super::{host_router, matcher};
use crate::state::AppState;

/// Map a request onto its internal dispatch target.
///
/// Requests for reserved namespaces and pass-through decisions come back
/// untouched; everything else gets its URI path swapped for the router's
/// rewrite target. Logging here is diagnostic only.
pub async fn rewrite_request(State(state): State<AppState>, mut request: Request) -> Request {
    let path = request.uri().path().to_string();

    // Reserved namespaces are served as addressed; the router never runs.
    if matcher::is_excluded_path(&path) {
        return request;
    }

    let hostname = host_header(&request);
    let decision = host_router::route(&hostname, &path, &state.router);

    debug!(
        hostname = %hostname,
        path = %path,
        base_domain = %state.router.base_domain,
        environment = ?state.router.environment,
        decision = ?decision,
        "classified request"
    );

    if let Some(target) = decision.rewritten_path() {
        if let Some(uri) = replace_path(request.uri(), &target) {
            *request.uri_mut() = uri;
        }
    }

    request
}

/// Normalized Host header: lowercased, surrounding whitespace removed. Ports
/// are kept; the development alias includes one.
fn host_header(request: &Request) -> String {
    request
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_default()
}

/// Swap the path of `uri`, keeping the query string. Returns `None` when the
/// target does not form a valid URI, in which case the request proceeds
/// unrewritten.
fn replace_path(uri: &Uri, new_path: &str) -> Option<Uri> {
    // A tenant root rewrite ends in "/"; dispatch on the canonical form.
    let new_path = match new_path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => new_path,
    };

    let path_and_query = match uri.query() {
        Some(query) => format!("{new_path}?{query}"),
        None => new_path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse().ok()?);
    Uri::from_parts(parts).ok()
}
