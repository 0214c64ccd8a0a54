//! REST API module.
//!
//! Contains all API routes and handlers. Admin endpoints answer with the
//! `{success, data}` envelope; the public booking intake keeps the flat
//! `{message, bookingId?}` shape the site form expects.

mod booking;
mod bookings;
mod content;
mod session;
mod stats;
mod tattoos;

pub use booking::*;
pub use bookings::*;
pub use content::*;
pub use session::*;
pub use stats::*;
pub use tattoos::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppError>;
