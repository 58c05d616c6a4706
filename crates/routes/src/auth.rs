use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use user_stats_models::CurrentUser;

use crate::state::AppState;

/// JWT claims carried by the host system's session tokens.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // user id
    pub exp: usize,
    pub iat: usize,
}

/// Resolve the current viewer from the Authorization header.
///
/// Unlike a gatekeeping auth layer this middleware never rejects: a
/// missing, malformed or expired token degrades to the anonymous viewer
/// and the block's own access predicate decides what anonymous viewers
/// may see. Handlers read the viewer from request extensions.
pub async fn current_user_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let current = viewer_from_bearer(&state, &req);
    req.extensions_mut().insert(current);
    next.run(req).await
}

fn viewer_from_bearer(state: &AppState, req: &Request) -> CurrentUser {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let token = match auth_header {
        Some(auth) if auth.starts_with("Bearer ") => &auth[7..],
        _ => return CurrentUser::anonymous(),
    };

    let decoding_key = DecodingKey::from_secret(state.config.jwt_secret.as_bytes());
    let validation = Validation::new(Algorithm::HS256);

    match decode::<Claims>(token, &decoding_key, &validation) {
        Ok(token_data) => match token_data.claims.sub.parse::<i64>() {
            Ok(id) => CurrentUser::authenticated(id),
            Err(_) => {
                tracing::warn!("JWT subject is not a user id, treating as anonymous");
                CurrentUser::anonymous()
            }
        },
        Err(e) => {
            tracing::debug!("JWT validation failed: {}", e);
            CurrentUser::anonymous()
        }
    }
}
