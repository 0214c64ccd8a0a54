//! Public content endpoints (guest spots, global info).

use axum::extract::State;

use super::{ApiResponse, ApiResult};
use crate::content::{GlobalInfo, GuestSpot};
use crate::AppState;

/// GET /api/guests - List announced guest spots.
pub async fn list_guest_spots(State(state): State<AppState>) -> ApiResult<Vec<GuestSpot>> {
    Ok(ApiResponse::new(state.content.guest_spots().to_vec()))
}

/// GET /api/info - The global info singleton.
pub async fn get_global_info(State(state): State<AppState>) -> ApiResult<GlobalInfo> {
    Ok(ApiResponse::new(state.content.global_info().clone()))
}
