//! Dashboard stats endpoint.

use axum::extract::State;

use super::{ApiResponse, ApiResult};
use crate::models::DashboardStats;
use crate::AppState;

/// GET /api/admin/stats - Summary counts for the dashboard tiles.
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<DashboardStats> {
    let pending_bookings = state.repo.count_new_bookings().await?;
    let published_tattoos = state.repo.count_tattoos().await?;

    Ok(ApiResponse::new(DashboardStats {
        pending_bookings,
        published_tattoos,
    }))
}
