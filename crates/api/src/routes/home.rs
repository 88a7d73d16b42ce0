//! Main-domain landing handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LandingResponse {
    pub platform: &'static str,
    pub tagline: &'static str,
    pub public_url: String,
    pub version: &'static str,
}

/// Canonical landing page; the router rewrites `/` on the main domain here.
pub async fn home(State(state): State<AppState>) -> Json<LandingResponse> {
    Json(LandingResponse {
        platform: "Inkwell",
        tagline: "Publish on your own subdomain",
        public_url: state.config.public_url.clone(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
