//! Platform admin surface
//!
//! Served under the reserved /admin namespace; the main domain's /dashboard
//! path rewrites here. Access control for this surface is layered in front
//! of the service in deployment and is not part of these handlers.

use axum::{extract::State, Json};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{error::ApiResult, state::AppState};

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_sites: i64,
    pub published_posts: i64,
    pub recent_sites: Vec<RecentSite>,
    pub lookup_cache: CacheSnapshot,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct RecentSite {
    pub id: Uuid,
    pub subdomain: String,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct CacheSnapshot {
    pub active_entries: usize,
    pub expired_entries: usize,
}

/// Admin dashboard: platform-wide counts and the newest sites.
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Json<DashboardResponse>> {
    let (total_sites,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sites")
        .fetch_one(&state.pool)
        .await?;

    let (published_posts,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts WHERE published")
        .fetch_one(&state.pool)
        .await?;

    let recent_sites: Vec<RecentSite> = sqlx::query_as(
        "SELECT id, subdomain, name, created_at
         FROM sites
         ORDER BY created_at DESC
         LIMIT 5",
    )
    .fetch_all(&state.pool)
    .await?;

    let cache_stats = state.sites.cache().stats();

    Ok(Json(DashboardResponse {
        total_sites,
        published_posts,
        recent_sites,
        lookup_cache: CacheSnapshot {
            active_entries: cache_stats.active_entries,
            expired_entries: cache_stats.expired_entries,
        },
    }))
}
