//! Database repository for booking and portfolio CRUD operations.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Booking, BookingIntake, BookingStatus, NewTattoo, Tattoo, TattooStatus,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== BOOKING OPERATIONS ====================

    /// Insert a new booking from the public intake form. Status is always "new".
    pub async fn create_booking(&self, intake: &BookingIntake) -> Result<Booking, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        // The form may leave availability empty; fall back to today's date
        let availability = intake
            .availability
            .clone()
            .unwrap_or_else(|| Utc::now().date_naive().to_string());
        let notes = "Submitted from the website".to_string();

        sqlx::query(
            "INSERT INTO bookings (id, client_name, email, project_desc, budget, placement, availability, notes, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&intake.name)
        .bind(&intake.email)
        .bind(&intake.project)
        .bind(&intake.budget)
        .bind(&intake.placement)
        .bind(&availability)
        .bind(&notes)
        .bind(BookingStatus::New.as_str())
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Booking {
            id,
            client_name: intake.name.clone(),
            email: intake.email.clone(),
            project_desc: intake.project.clone(),
            budget: intake.budget.clone(),
            placement: intake.placement.clone(),
            availability: Some(availability),
            notes: Some(notes),
            status: BookingStatus::New,
            created_at: now,
        })
    }

    /// List all bookings, newest first.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>, AppError> {
        let rows = sqlx::query(
            "SELECT id, client_name, email, project_desc, budget, placement, availability, notes, status, created_at FROM bookings ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(booking_from_row).collect())
    }

    /// Get a booking by ID.
    pub async fn get_booking(&self, id: &str) -> Result<Option<Booking>, AppError> {
        let row = sqlx::query(
            "SELECT id, client_name, email, project_desc, budget, placement, availability, notes, status, created_at FROM bookings WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(booking_from_row))
    }

    /// Set a booking's status. Idempotent; all other fields are untouched.
    pub async fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> Result<Booking, AppError> {
        let result = sqlx::query("UPDATE bookings SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Booking {} not found", id)));
        }

        self.get_booking(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Count bookings still in the "new" status.
    pub async fn count_new_bookings(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM bookings WHERE status = ?")
            .bind(BookingStatus::New.as_str())
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("n"))
    }

    // ==================== TATTOO OPERATIONS ====================

    /// Insert a new portfolio entry. The image must already be stored.
    pub async fn create_tattoo(&self, new: &NewTattoo) -> Result<Tattoo, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let tags_json = serde_json::to_string(&new.tags).unwrap_or_default();

        sqlx::query(
            "INSERT INTO tattoos (id, title, image_url, tags, status, published_date) VALUES (?, ?, ?, ?, ?, ?)"
        )
        .bind(&id)
        .bind(&new.title)
        .bind(&new.image_url)
        .bind(&tags_json)
        .bind(new.status.as_str())
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Tattoo {
            id,
            title: new.title.clone(),
            image_url: new.image_url.clone(),
            tags: new.tags.clone(),
            status: new.status,
            published_date: now,
        })
    }

    /// List all portfolio entries, newest first.
    pub async fn list_tattoos(&self) -> Result<Vec<Tattoo>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, image_url, tags, status, published_date FROM tattoos ORDER BY published_date DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(tattoo_from_row).collect())
    }

    /// Delete a portfolio entry. Removes the row only; the stored image is
    /// intentionally left in place.
    pub async fn delete_tattoo(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tattoos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Tattoo {} not found", id)));
        }

        Ok(())
    }

    /// Count all portfolio entries.
    pub async fn count_tattoos(&self) -> Result<i64, AppError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM tattoos")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get("n"))
    }
}

// Helper functions for row conversion

fn booking_from_row(row: &sqlx::sqlite::SqliteRow) -> Booking {
    let status: String = row.get("status");
    Booking {
        id: row.get("id"),
        client_name: row.get("client_name"),
        email: row.get("email"),
        project_desc: row.get("project_desc"),
        budget: row.get("budget"),
        placement: row.get("placement"),
        availability: row.get("availability"),
        notes: row.get("notes"),
        status: BookingStatus::from_str(&status).unwrap_or(BookingStatus::New),
        created_at: row.get("created_at"),
    }
}

fn tattoo_from_row(row: &sqlx::sqlite::SqliteRow) -> Tattoo {
    let status: String = row.get("status");
    let tags_str: Option<String> = row.get("tags");
    Tattoo {
        id: row.get("id"),
        title: row.get("title"),
        image_url: row.get("image_url"),
        tags: tags_str.map(|s| parse_json_array(&s)).unwrap_or_default(),
        status: TattooStatus::from_str(&status).unwrap_or(TattooStatus::Done),
        published_date: row.get("published_date"),
    }
}

fn parse_json_array(s: &str) -> Vec<String> {
    serde_json::from_str(s).unwrap_or_default()
}
