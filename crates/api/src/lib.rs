//! Inkwell API Library
//!
//! This crate contains the server components for Inkwell: the host-based
//! request router that dispatches each request to the main application, the
//! admin dashboard, or a tenant's subdomain site, plus the handlers behind
//! those internal namespaces.

pub mod config;
pub mod error;
pub mod routes;
pub mod routing;
pub mod sites;
pub mod state;

pub use config::{Config, Environment};
pub use error::{ApiError, ApiResult};
pub use routing::{route, RouteDecision, RouterConfig};
pub use sites::{SiteCache, SiteStore};
pub use state::AppState;
