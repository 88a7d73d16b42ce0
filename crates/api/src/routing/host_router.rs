//! Hostname classification and rewrite decisions.
//!
//! # Responsibilities
//! - Decide, per request, whether the hostname is the main domain, a tenant
//!   subdomain, or something the platform does not recognize
//! - Map main-domain entry paths onto their internal handlers
//! - Derive the tenant label for subdomain hosts
//!
//! # Design Decisions
//! - Main-domain detection is an exact string match against the known
//!   aliases; no wildcard or suffix matching
//! - Tenant derivation is true suffix removal: a hostname that merely
//!   contains the base domain somewhere is not ours
//! - Classification is total: unknown hosts degrade to `PassThrough`
//!   instead of erroring, so unexpected Host headers fail open

use crate::config::Environment;

/// Subdomain reserved for the shared application; requests for it are never
/// rewritten to a tenant site.
pub const APP_SUBDOMAIN: &str = "app";

/// Internal namespace prefix for tenant sites
const SITE_PREFIX: &str = "/site";

/// Read-only snapshot of the configuration the router consults.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Canonical base domain, e.g. "inkwell.blog"
    pub base_domain: String,
    /// Loopback alias (including port) standing in for the base domain in
    /// development, e.g. "localhost:3000"
    pub dev_host: String,
    pub environment: Environment,
}

impl RouterConfig {
    /// True for the bare base domain, its www alias, and the development
    /// loopback alias. Exact matches only.
    fn is_main_domain(&self, hostname: &str) -> bool {
        hostname == self.base_domain
            || hostname == format!("www.{}", self.base_domain)
            || hostname == self.dev_host
    }

    /// The suffix stripped from a hostname to derive its tenant label.
    fn tenant_suffix(&self) -> String {
        match self.environment {
            Environment::Production => format!(".{}", self.base_domain),
            Environment::Development => format!(".{}", self.dev_host),
        }
    }
}

/// Routing decision for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Serve through a main-domain handler at `path`.
    Main { path: String },
    /// Serve the tenant site identified by `subdomain` at `path`.
    TenantSite { subdomain: String, path: String },
    /// Forward the request unmodified.
    PassThrough,
}

impl RouteDecision {
    /// The internal path this decision dispatches to, or `None` for
    /// pass-through.
    pub fn rewritten_path(&self) -> Option<String> {
        match self {
            RouteDecision::Main { path } => Some(path.clone()),
            RouteDecision::TenantSite { subdomain, path } => {
                Some(format!("{SITE_PREFIX}/{subdomain}{path}"))
            }
            RouteDecision::PassThrough => None,
        }
    }
}

/// Classify a request by hostname and path.
///
/// Total over its inputs: every `(hostname, path)` pair yields exactly one
/// decision. Hostnames that belong to no known domain come back as
/// [`RouteDecision::PassThrough`] so they proceed unrewritten.
pub fn route(hostname: &str, path: &str, config: &RouterConfig) -> RouteDecision {
    if config.is_main_domain(hostname) {
        // Canonical landing page
        if path.is_empty() || path == "/" {
            return RouteDecision::Main {
                path: "/home".to_string(),
            };
        }

        // The admin surface lives under its own internal namespace so access
        // control can be layered on it downstream.
        if path == "/dashboard" {
            return RouteDecision::Main {
                path: "/admin/dashboard".to_string(),
            };
        }

        // Everything else on the main domain keeps its path.
        return RouteDecision::Main {
            path: path.to_string(),
        };
    }

    // Subdomain case: the tenant label is the hostname minus the
    // environment-appropriate suffix. The reserved app subdomain and hosts
    // the suffix does not apply to are not ours to rewrite. An empty label
    // (hostname was exactly ".<suffix>") is never handed downstream.
    let suffix = config.tenant_suffix();
    match hostname.strip_suffix(suffix.as_str()) {
        Some(subdomain) if subdomain != APP_SUBDOMAIN && !subdomain.is_empty() => {
            RouteDecision::TenantSite {
                subdomain: subdomain.to_string(),
                path: path.to_string(),
            }
        }
        _ => RouteDecision::PassThrough,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::routing::matcher::is_excluded_path;

    fn prod_config() -> RouterConfig {
        RouterConfig {
            base_domain: "example.com".to_string(),
            dev_host: "localhost:3000".to_string(),
            environment: Environment::Production,
        }
    }

    fn dev_config() -> RouterConfig {
        RouterConfig {
            environment: Environment::Development,
            ..prod_config()
        }
    }

    fn main_rewrite(path: &str) -> RouteDecision {
        RouteDecision::Main {
            path: path.to_string(),
        }
    }

    #[test]
    fn test_root_rewrites_to_home() {
        let cfg = prod_config();
        assert_eq!(route("example.com", "/", &cfg), main_rewrite("/home"));
        assert_eq!(route("example.com", "", &cfg), main_rewrite("/home"));
    }

    #[test]
    fn test_www_alias_behaves_like_bare_domain() {
        let cfg = prod_config();
        assert_eq!(route("www.example.com", "/", &cfg), main_rewrite("/home"));
        assert_eq!(
            route("www.example.com", "/dashboard", &cfg),
            main_rewrite("/admin/dashboard")
        );
    }

    #[test]
    fn test_dev_alias_is_main_domain() {
        let cfg = dev_config();
        assert_eq!(route("localhost:3000", "/", &cfg), main_rewrite("/home"));
    }

    #[test]
    fn test_dashboard_rewrites_to_admin_namespace() {
        let cfg = prod_config();
        assert_eq!(
            route("example.com", "/dashboard", &cfg),
            main_rewrite("/admin/dashboard")
        );
    }

    #[test]
    fn test_other_main_domain_paths_unchanged() {
        let cfg = prod_config();
        assert_eq!(route("example.com", "/about", &cfg), main_rewrite("/about"));
        assert_eq!(
            route("example.com", "/dashboard/settings", &cfg),
            main_rewrite("/dashboard/settings")
        );
    }

    #[test]
    fn test_tenant_subdomain_rewrite() {
        let cfg = prod_config();
        let decision = route("tenant1.example.com", "/posts/1", &cfg);
        assert_eq!(
            decision,
            RouteDecision::TenantSite {
                subdomain: "tenant1".to_string(),
                path: "/posts/1".to_string(),
            }
        );
        assert_eq!(
            decision.rewritten_path().unwrap(),
            "/site/tenant1/posts/1"
        );
    }

    #[test]
    fn test_tenant_subdomain_in_development() {
        let cfg = dev_config();
        let decision = route("tenant1.localhost:3000", "/posts/1", &cfg);
        assert_eq!(
            decision,
            RouteDecision::TenantSite {
                subdomain: "tenant1".to_string(),
                path: "/posts/1".to_string(),
            }
        );
        // The production suffix does not apply in development
        assert_eq!(
            route("tenant1.example.com", "/posts/1", &cfg),
            RouteDecision::PassThrough
        );
    }

    #[test]
    fn test_app_subdomain_passes_through() {
        let cfg = prod_config();
        assert_eq!(
            route("app.example.com", "/anything", &cfg),
            RouteDecision::PassThrough
        );
    }

    #[test]
    fn test_unrelated_host_passes_through() {
        let cfg = prod_config();
        assert_eq!(
            route("unrelated-host.com", "/x", &cfg),
            RouteDecision::PassThrough
        );
        // Containing the base domain is not the same as being under it
        assert_eq!(
            route("notexample.com", "/x", &cfg),
            RouteDecision::PassThrough
        );
        assert_eq!(route("", "/x", &cfg), RouteDecision::PassThrough);
    }

    #[test]
    fn test_empty_tenant_label_passes_through() {
        let cfg = prod_config();
        assert_eq!(route(".example.com", "/", &cfg), RouteDecision::PassThrough);
    }

    #[test]
    fn test_tenant_label_is_never_empty() {
        // The downstream lookup contract requires a non-empty label.
        let cfg = prod_config();
        for host in ["a.example.com", "foo.bar.example.com", ".example.com"] {
            if let RouteDecision::TenantSite { subdomain, .. } = route(host, "/", &cfg) {
                assert!(!subdomain.is_empty());
            }
        }
    }

    #[test]
    fn test_route_is_deterministic() {
        let cfg = prod_config();
        for (host, path) in [
            ("example.com", "/"),
            ("tenant1.example.com", "/posts/1"),
            ("app.example.com", "/x"),
            ("unrelated-host.com", "/x"),
        ] {
            assert_eq!(route(host, path, &cfg), route(host, path, &cfg));
        }
    }

    #[test]
    fn test_rewritten_paths_never_rewrite_again() {
        // Feeding a decision's internal path back through the exclusion
        // predicate and the router must not produce a second rewrite: the
        // path is either excluded outright or maps to itself.
        let cfg = prod_config();
        let inputs = [
            ("example.com", "/"),
            ("example.com", "/dashboard"),
            ("example.com", "/about"),
            ("tenant1.example.com", "/posts/1"),
            ("tenant1.example.com", "/"),
        ];

        for (host, path) in inputs {
            let Some(target) = route(host, path, &cfg).rewritten_path() else {
                continue;
            };
            if is_excluded_path(&target) {
                continue;
            }
            // Internal dispatch happens on the main application, so the
            // re-entry hostname is the main domain.
            assert_eq!(
                route("example.com", &target, &cfg),
                RouteDecision::Main {
                    path: target.clone()
                },
                "path {target} must be a fixed point"
            );
        }
    }
}
