//! Portfolio management endpoints.

use axum::extract::{Multipart, Path, State};

use super::{ApiResponse, ApiResult};
use crate::errors::AppError;
use crate::models::{parse_tags, NewTattoo, Tattoo, TattooStatus};
use crate::AppState;

/// GET /api/portfolio - Public portfolio listing, newest first.
pub async fn list_portfolio(State(state): State<AppState>) -> ApiResult<Vec<Tattoo>> {
    let tattoos = state.repo.list_tattoos().await?;
    Ok(ApiResponse::new(tattoos))
}

/// GET /api/admin/tattoos - List all portfolio entries, newest first.
pub async fn list_tattoos(State(state): State<AppState>) -> ApiResult<Vec<Tattoo>> {
    let tattoos = state.repo.list_tattoos().await?;
    Ok(ApiResponse::new(tattoos))
}

/// POST /api/admin/tattoos - Add a portfolio entry.
///
/// Multipart form: title (required), image file (required), tags
/// (comma-separated, optional), status (optional, defaults to done).
/// Two-phase: the image blob is written first, then the row; if the insert
/// fails the blob is removed again.
pub async fn create_tattoo(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Tattoo> {
    let mut title = None;
    let mut tags = Vec::new();
    let mut status = TattooStatus::Done;
    let mut image: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed form submission: {}", e)))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "title" => {
                title = Some(read_text(field).await?);
            }
            "tags" => {
                tags = parse_tags(&read_text(field).await?);
            }
            "status" => {
                let value = read_text(field).await?;
                status = TattooStatus::from_str(&value).ok_or_else(|| {
                    AppError::Validation(format!("Unknown tattoo status: {}", value))
                })?;
            }
            "image" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Upload failed: {}", e)))?;
                image = Some((file_name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let title = title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Title is required".to_string()))?;
    let (file_name, bytes) =
        image.ok_or_else(|| AppError::Validation("An image file is required".to_string()))?;

    // Phase one: store the blob
    let stored = state.storage.store(&file_name, &bytes).await?;

    let new = NewTattoo {
        title,
        image_url: stored.public_url.clone(),
        tags,
        status,
    };

    // Phase two: insert the row, rolling back the blob on failure
    match state.repo.create_tattoo(&new).await {
        Ok(tattoo) => Ok(ApiResponse::new(tattoo)),
        Err(e) => {
            if let Err(cleanup) = state.storage.remove(&stored.file_name).await {
                tracing::error!(
                    "Failed to clean up {} after insert failure: {}",
                    stored.file_name,
                    cleanup
                );
            }
            Err(e)
        }
    }
}

/// DELETE /api/admin/tattoos/:id - Delete a portfolio entry.
///
/// Removes the row only. The stored image stays behind; cleaning it up
/// would require mapping the public URL back to a storage path.
/// TODO: delete the media file alongside the row.
pub async fn delete_tattoo(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete_tattoo(&id).await?;
    tracing::info!("Deleted tattoo {} (media file left in place)", id);
    Ok(ApiResponse::new(()))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed form submission: {}", e)))
}
