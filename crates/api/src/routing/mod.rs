//! Host-based request routing
//!
//! Every request that survives the exclusion predicate is classified by
//! hostname and path into one of three decisions: rewrite to a main-domain
//! handler, rewrite into a tenant site's namespace, or pass through
//! untouched. The classification is a pure function of
//! `(hostname, path, config)`; the rewrite itself is applied by a middleware
//! layer wrapped around the whole route table, so the client-visible URL
//! never changes.

mod host_router;
mod matcher;
mod rewrite;

pub use host_router::{route, RouteDecision, RouterConfig, APP_SUBDOMAIN};
pub use matcher::is_excluded_path;
pub use rewrite::rewrite_request;
