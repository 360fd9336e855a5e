//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "ok" when the database answers, "degraded" otherwise
    pub status: String,
    /// Module name ("fyyur-web")
    pub module: String,
    /// Crate version from Cargo.toml
    pub version: String,
    /// Seconds since service started
    pub uptime_seconds: u64,
    /// Where the running binary came from
    pub build: BuildInfo,
}

/// Build stamp written by build.rs
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    /// `git describe` output, or "untracked" outside a checkout
    pub commit: &'static str,
    /// UTC build time
    pub built_at: &'static str,
    /// Cargo profile ("debug" or "release")
    pub profile: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            commit: env!("FYYUR_COMMIT"),
            built_at: env!("FYYUR_BUILT_AT"),
            profile: env!("FYYUR_PROFILE"),
        }
    }
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = Utc::now().signed_duration_since(state.startup_time);
    let uptime_seconds = uptime.num_seconds().max(0) as u64;

    let status = match sqlx::query("SELECT 1").execute(&state.db).await {
        Ok(_) => "ok",
        Err(e) => {
            warn!("Health check could not reach database: {}", e);
            "degraded"
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        module: "fyyur-web".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds,
        build: BuildInfo::current(),
    })
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
