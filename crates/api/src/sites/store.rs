//! Site metadata lookup by subdomain

use std::sync::Arc;

use sqlx::PgPool;

use inkwell_shared::{is_reserved_subdomain, validate_subdomain, PlatformError, Site};

use super::cache::SiteCache;

/// Subdomain-keyed site lookup with caching.
#[derive(Clone)]
pub struct SiteStore {
    pool: PgPool,
    cache: Arc<SiteCache>,
}

impl SiteStore {
    /// Create a new store with the default cache
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            cache: Arc::new(SiteCache::new()),
        }
    }

    /// Create a new store with a custom cache
    pub fn with_cache(pool: PgPool, cache: Arc<SiteCache>) -> Self {
        Self { pool, cache }
    }

    /// Resolve a tenant subdomain to its site.
    ///
    /// Returns `Ok(None)` for labels that are malformed, reserved, or simply
    /// unknown; the caller decides how to present the miss. The host router
    /// hands over whatever label it derived, so malformed input here is
    /// expected traffic, not an error.
    pub async fn lookup_by_subdomain(&self, subdomain: &str) -> Result<Option<Site>, PlatformError> {
        // Malformed and reserved labels can never name a site; skip the query.
        if validate_subdomain(subdomain).is_err() || is_reserved_subdomain(subdomain) {
            return Ok(None);
        }

        if let Some(cached) = self.cache.get(subdomain) {
            return Ok(cached);
        }

        let site: Option<Site> = sqlx::query_as(
            "SELECT id, subdomain, name, description, created_at, updated_at
             FROM sites
             WHERE subdomain = $1",
        )
        .bind(subdomain)
        .fetch_optional(&self.pool)
        .await?;

        self.cache.set(subdomain, site.clone());
        Ok(site)
    }

    /// Drop any cached entry for a subdomain (call after site settings change)
    pub fn invalidate(&self, subdomain: &str) {
        self.cache.invalidate(subdomain);
    }

    /// Access the cache for statistics/management
    pub fn cache(&self) -> &SiteCache {
        &self.cache
    }
}
