use axum::{
    extract::{Extension, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use user_stats_block::{is_visible, render, BlockContext};
use user_stats_models::{CurrentUser, ErrorResponse, StatsError};

use crate::state::AppState;

/// Create the statistics block router.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/user-stats", get(current_user_stats))
        .route("/user-stats/:user", get(user_stats))
}

/// Statistics for the current viewer.
pub async fn current_user_stats(
    State(state): State<AppState>,
    Extension(viewer): Extension<CurrentUser>,
) -> Result<Response, ApiError> {
    render_block(&state, None, viewer).await
}

/// Statistics for the route-named user.
///
/// The path segment is taken as an arbitrary string; validation happens
/// inside the block's target resolver.
pub async fn user_stats(
    State(state): State<AppState>,
    Path(user): Path<String>,
    Extension(viewer): Extension<CurrentUser>,
) -> Result<Response, ApiError> {
    render_block(&state, Some(user), viewer).await
}

async fn render_block(
    state: &AppState,
    route_user: Option<String>,
    viewer: CurrentUser,
) -> Result<Response, ApiError> {
    // Access check first: anonymous viewers are refused before any
    // query executes.
    if !is_visible(&viewer) {
        return Err(StatsError::Forbidden.into());
    }

    let ctx = BlockContext {
        route_user,
        current_user: viewer,
    };
    let stats = render(state.store.as_ref(), &ctx).await?;

    // The block is never cacheable; every render re-queries the store.
    Ok(([(header::CACHE_CONTROL, "max-age=0")], Json(stats)).into_response())
}

/// Wire form of a failed render.
pub struct ApiError(StatsError);

impl From<StatsError> for ApiError {
    fn from(err: StatsError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            tracing::error!("stats render failed: {}", self.0);
        }
        (status, Json(ErrorResponse::from(&self.0))).into_response()
    }
}
