//! Tenant site surface
//!
//! Handlers behind the `/site/{subdomain}` namespace the host router
//! rewrites tenant requests into. Each handler resolves the site by
//! subdomain first; an unknown tenant is a clean 404, never a routing error.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use inkwell_shared::{Post, Site};

use crate::{
    error::{ApiError, ApiResult},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct SiteResponse {
    /// Page metadata the tenant layout renders from
    pub title: String,
    pub description: Option<String>,
    pub site: Site,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct PostSummary {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
}

/// Tenant landing: the site metadata behind this subdomain.
pub async fn site_index(
    State(state): State<AppState>,
    Path(subdomain): Path<String>,
) -> ApiResult<Json<SiteResponse>> {
    let site = resolve_site(&state, &subdomain).await?;

    Ok(Json(SiteResponse {
        title: site.name.clone(),
        description: site.description.clone(),
        site,
    }))
}

/// Published posts for a site, newest first.
pub async fn list_posts(
    State(state): State<AppState>,
    Path(subdomain): Path<String>,
) -> ApiResult<Json<Vec<PostSummary>>> {
    let site = resolve_site(&state, &subdomain).await?;

    let posts: Vec<PostSummary> = sqlx::query_as(
        "SELECT id, slug, title, excerpt, published_at
         FROM posts
         WHERE site_id = $1 AND published
         ORDER BY published_at DESC",
    )
    .bind(site.id)
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(posts))
}

/// A single published post by slug.
pub async fn get_post(
    State(state): State<AppState>,
    Path((subdomain, slug)): Path<(String, String)>,
) -> ApiResult<Json<Post>> {
    let site = resolve_site(&state, &subdomain).await?;

    let post: Option<Post> = sqlx::query_as(
        "SELECT id, site_id, slug, title, excerpt, content, published,
                published_at, created_at, updated_at
         FROM posts
         WHERE site_id = $1 AND slug = $2 AND published",
    )
    .bind(site.id)
    .bind(&slug)
    .fetch_optional(&state.pool)
    .await?;

    post.map(Json).ok_or(ApiError::NotFound)
}

async fn resolve_site(state: &AppState, subdomain: &str) -> Result<Site, ApiError> {
    state
        .sites
        .lookup_by_subdomain(subdomain)
        .await?
        .ok_or(ApiError::SiteNotFound)
}
