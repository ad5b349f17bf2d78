//! Stored photo serving.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::web::error::ApiError;

use super::AppState;

/// GET /files/{name} - Serve a stored image.
pub async fn serve_file(
    State(state): State<Arc<AppState>>,
    Path(stored_name): Path<String>,
) -> Result<Response, ApiError> {
    // Stored names are UUID.ext; anything with a path separator is not ours
    if stored_name.contains('/') || stored_name.contains("..") {
        return Err(ApiError::not_found("file not found"));
    }

    let content = state.storage.load(&stored_name)?;

    let mime = mime_guess::from_path(&stored_name).first_or_octet_stream();

    Ok(([(header::CONTENT_TYPE, mime.to_string())], content).into_response())
}
