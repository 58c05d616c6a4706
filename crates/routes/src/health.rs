use axum::{response::Json, routing::get, Router};
use serde_json::Value;

use crate::state::AppState;

/// Create health router.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version_info))
}

/// Health check endpoint.
pub async fn health_check() -> Json<Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Version info endpoint.
pub async fn version_info() -> Json<Value> {
    Json(serde_json::json!({
        "user_stats": {
            "cargo_version": env!("CARGO_PKG_VERSION"),
            "git_commit": option_env!("GIT_COMMIT").unwrap_or("unknown"),
        }
    }))
}
