//! Tenant site lookup
//!
//! The downstream collaborator of the host router: given a tenant subdomain,
//! resolve the site metadata backing it. Lookups are cached with a short TTL
//! (positive and negative) so a burst of requests for one site does not turn
//! into a burst of identical queries.

mod cache;
mod store;

pub use cache::{SiteCache, SiteCacheStats};
pub use store::SiteStore;
