use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod health;
pub mod state;
pub mod stats;

pub use state::*;

/// Create the main API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(stats::create_router())
        .merge(health::create_router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::current_user_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
