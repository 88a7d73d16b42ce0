//! In-memory subdomain cache with TTL
//!
//! Caches subdomain-to-site lookups, including misses, to keep repeated
//! requests for one site from hammering the database.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use inkwell_shared::Site;

/// Default cache TTL (1 minute)
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

/// Cache entry with expiration
#[derive(Clone)]
struct CacheEntry {
    /// `None` means the subdomain is known not to resolve to a site
    site: Option<Site>,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(site: Option<Site>, ttl: Duration) -> Self {
        Self {
            site,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// Thread-safe in-memory site cache keyed by subdomain
pub struct SiteCache {
    cache: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl Default for SiteCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteCache {
    /// Create a new cache with default TTL
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_CACHE_TTL)
    }

    /// Create a new cache with custom TTL
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Get the cached lookup result for a subdomain.
    /// Returns `Some(Some(site))` for a cached hit, `Some(None)` for a
    /// cached miss, and `None` when nothing valid is cached.
    pub fn get(&self, subdomain: &str) -> Option<Option<Site>> {
        let cache = self.cache.read().ok()?;
        let entry = cache.get(subdomain)?;

        if entry.is_expired() {
            None
        } else {
            Some(entry.site.clone())
        }
    }

    /// Cache a lookup result, positive or negative
    pub fn set(&self, subdomain: &str, site: Option<Site>) {
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(subdomain.to_string(), CacheEntry::new(site, self.ttl));
        }
    }

    /// Invalidate a specific subdomain (call after site settings change)
    pub fn invalidate(&self, subdomain: &str) {
        if let Ok(mut cache) = self.cache.write() {
            cache.remove(subdomain);
        }
    }

    /// Clear expired entries (call periodically for memory management)
    pub fn cleanup(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.retain(|_, entry| !entry.is_expired());
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> SiteCacheStats {
        if let Ok(cache) = self.cache.read() {
            let total = cache.len();
            let expired = cache.values().filter(|e| e.is_expired()).count();
            SiteCacheStats {
                total_entries: total,
                expired_entries: expired,
                active_entries: total - expired,
            }
        } else {
            SiteCacheStats::default()
        }
    }
}

/// Cache statistics
#[derive(Default, Debug)]
pub struct SiteCacheStats {
    pub total_entries: usize,
    pub expired_entries: usize,
    pub active_entries: usize,
}
