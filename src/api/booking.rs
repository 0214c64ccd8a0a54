//! Public booking intake endpoint.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{BookingConfirmation, BookingIntake};
use crate::AppState;

/// POST /api/booking - Accept a booking request from the public site form.
///
/// Multipart form fields: name, email, project (required); budget,
/// placement, availability (optional). Writes one row with status "new".
pub async fn submit_booking(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut name = None;
    let mut email = None;
    let mut project = None;
    let mut budget = None;
    let mut placement = None;
    let mut availability = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return intake_error(
                    StatusCode::BAD_REQUEST,
                    format!("Malformed form submission: {}", e),
                );
            }
        };

        let field_name = field.name().unwrap_or_default().to_string();
        let value = match field.text().await {
            Ok(value) => value,
            Err(e) => {
                return intake_error(
                    StatusCode::BAD_REQUEST,
                    format!("Malformed form submission: {}", e),
                );
            }
        };

        match field_name.as_str() {
            "name" => name = Some(value),
            "email" => email = Some(value),
            "project" => project = Some(value),
            "budget" => budget = non_empty(value),
            "placement" => placement = non_empty(value),
            "availability" => availability = non_empty(value),
            _ => {}
        }
    }

    // Required-field validation; nothing is written on failure
    let (name, email, project) = match (
        name.filter(|v| !v.trim().is_empty()),
        email.filter(|v| !v.trim().is_empty()),
        project.filter(|v| !v.trim().is_empty()),
    ) {
        (Some(name), Some(email), Some(project)) => (name, email, project),
        _ => {
            return intake_error(
                StatusCode::BAD_REQUEST,
                "Missing required fields: name, email and project".to_string(),
            );
        }
    };

    let intake = BookingIntake {
        name,
        email,
        project,
        budget,
        placement,
        availability,
    };

    match state.repo.create_booking(&intake).await {
        Ok(booking) => {
            // Owner notification is a log line only; no real delivery
            tracing::info!(
                "[email simulation] New booking request from {} <{}>",
                booking.client_name,
                booking.email
            );

            let body = BookingConfirmation {
                message: "Booking request sent! I will get back to you shortly.".to_string(),
                booking_id: Some(booking.id),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        // The raw error text is surfaced on purpose
        Err(e) => intake_error(StatusCode::INTERNAL_SERVER_ERROR, e.message()),
    }
}

fn intake_error(status: StatusCode, message: String) -> Response {
    let body = BookingConfirmation {
        message,
        booking_id: None,
    };
    (status, Json(body)).into_response()
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
