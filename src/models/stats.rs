//! Dashboard summary counts.

use serde::{Deserialize, Serialize};

/// The two summary tiles on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Bookings still in the "new" status
    pub pending_bookings: i64,
    /// Total portfolio entries
    pub published_tattoos: i64,
}
