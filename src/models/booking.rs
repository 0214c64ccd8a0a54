//! Booking model: a client project inquiry tracked through a manual status progression.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a booking.
///
/// The progression is manual; no transition table is enforced and the admin
/// may set any status at any time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    New,
    Deposit,
    Booked,
    Done,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::New => "new",
            BookingStatus::Deposit => "deposit",
            BookingStatus::Booked => "booked",
            BookingStatus::Done => "done",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "new" => Some(BookingStatus::New),
            "deposit" => Some(BookingStatus::Deposit),
            "booked" => Some(BookingStatus::Booked),
            "done" => Some(BookingStatus::Done),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

/// A client-submitted booking request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub client_name: String,
    pub email: String,
    pub project_desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: String,
}

/// Validated fields collected from the public booking form.
#[derive(Debug, Clone)]
pub struct BookingIntake {
    pub name: String,
    pub email: String,
    pub project: String,
    pub budget: Option<String>,
    pub placement: Option<String>,
    pub availability: Option<String>,
}

/// Request body for changing a booking's status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

/// Flat response body returned by the public intake endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            BookingStatus::New,
            BookingStatus::Deposit,
            BookingStatus::Booked,
            BookingStatus::Done,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::from_str("archived"), None);
    }

    #[test]
    fn test_status_serde_is_lowercase() {
        let json = serde_json::to_string(&BookingStatus::Deposit).unwrap();
        assert_eq!(json, "\"deposit\"");
        let parsed: BookingStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, BookingStatus::Cancelled);
    }
}
