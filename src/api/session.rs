//! Admin session endpoints.

use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};

use super::{ApiResponse, ApiResult};
use crate::auth;
use crate::errors::AppError;
use crate::AppState;

/// Request body for the admin login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A freshly minted session token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionToken {
    pub token: String,
}

/// POST /api/admin/login - Exchange the shared admin credentials for a session token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<SessionToken> {
    if !auth::verify_credentials(&state.config, &request.email, &request.password) {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = state.sessions.issue();
    tracing::info!("Admin session opened for {}", request.email);
    Ok(ApiResponse::new(SessionToken { token }))
}

/// POST /api/admin/logout - Invalidate the presented session token.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<()> {
    if let Some(token) = auth::session_token(&headers) {
        state.sessions.revoke(&token);
    }
    Ok(ApiResponse::new(()))
}
