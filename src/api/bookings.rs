//! Admin booking management endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{ApiResponse, ApiResult};
use crate::models::{Booking, UpdateBookingStatusRequest};
use crate::AppState;

/// GET /api/admin/bookings - List all bookings, newest first.
///
/// Status filtering stays client-side; the full list is always returned.
pub async fn list_bookings(State(state): State<AppState>) -> ApiResult<Vec<Booking>> {
    let bookings = state.repo.list_bookings().await?;
    Ok(ApiResponse::new(bookings))
}

/// PUT /api/admin/bookings/:id/status - Set a booking's status.
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> ApiResult<Booking> {
    let booking = state
        .repo
        .update_booking_status(&id, request.status)
        .await?;
    tracing::info!(
        "Booking {} status set to {}",
        booking.id,
        booking.status.as_str()
    );
    Ok(ApiResponse::new(booking))
}
