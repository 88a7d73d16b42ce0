//! Exclusion predicate for the rewrite pipeline.
//!
//! Requests for reserved namespaces are served exactly as addressed; the
//! host router never sees them. The whole policy lives in one predicate so
//! it can be evaluated once per request and tested on its own.

/// Path prefixes served directly: the JSON API, infrastructure probes, and
/// the bundled static/asset namespaces.
const EXCLUDED_PREFIXES: &[&str] = &["/api", "/health", "/_static", "/_assets"];

/// Bare utility paths belonging to the shared auth/error surface.
const EXCLUDED_PATHS: &[&str] = &["/signin", "/signout", "/error", "/verify-request"];

/// The admin surface is addressed directly and carries its own access
/// control; it must not be reachable through a rewrite.
const ADMIN_PREFIX: &str = "/admin";

/// True when `path` must bypass the host router entirely.
pub fn is_excluded_path(path: &str) -> bool {
    if EXCLUDED_PATHS.contains(&path) {
        return true;
    }

    if starts_with_segment(path, ADMIN_PREFIX) {
        return true;
    }

    if EXCLUDED_PREFIXES
        .iter()
        .any(|prefix| starts_with_segment(path, prefix))
    {
        return true;
    }

    // A final segment with a literal dot is a static file request.
    final_segment_has_dot(path)
}

/// Prefix match on whole path segments: "/api" covers "/api" and "/api/v1"
/// but not "/apichat".
fn starts_with_segment(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn final_segment_has_dot(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'))
}
