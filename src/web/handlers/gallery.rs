//! Gallery handlers.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Multipart, Path, Query, State};
use axum::Json;

use crate::gallery::{Category, GalleryService, Photo, UploadPhotoRequest};
use crate::web::dto::{ActingUserQuery, ApiResponse, PhotoListQuery};
use crate::web::error::ApiError;

use super::{acting_identity, AppState};

/// GET /api/photos - List photos, newest first, optionally by category.
pub async fn list_photos(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PhotoListQuery>,
) -> Result<Json<ApiResponse<Vec<Photo>>>, ApiError> {
    let service = GalleryService::new(&state.db, &state.storage);

    let photos = match query.category.as_deref() {
        None | Some("todos") => service.list().await?,
        Some(raw) => {
            let category = Category::from_str(raw)
                .map_err(|e| ApiError::bad_request(e))?;
            service.list_by_category(category).await?
        }
    };

    Ok(Json(ApiResponse::new(photos)))
}

/// POST /api/photos - Upload a photo (multipart form).
///
/// Fields: `user_id`, `caption`, `category`, `file`.
pub async fn upload_photo(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<Photo>>, ApiError> {
    let mut user_id: Option<i64> = None;
    let mut caption = String::new();
    let mut category = Category::default();
    let mut filename = String::new();
    let mut content: Vec<u8> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("user_id") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(e.to_string()))?;
                user_id = Some(
                    text.parse()
                        .map_err(|_| ApiError::bad_request("user_id must be a number"))?,
                );
            }
            Some("caption") => {
                caption = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(e.to_string()))?;
            }
            Some("category") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(e.to_string()))?;
                category = Category::from_str(&text).map_err(|e| ApiError::bad_request(e))?;
            }
            Some("file") => {
                filename = field.file_name().unwrap_or("photo.bin").to_string();
                content = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(e.to_string()))?
                    .to_vec();
            }
            _ => {}
        }
    }

    let user_id = user_id.ok_or_else(|| ApiError::bad_request("user_id is required"))?;
    let identity = acting_identity(&state, user_id).await?;

    let service = GalleryService::new(&state.db, &state.storage)
        .with_max_upload_size(state.max_upload_size);
    let request = UploadPhotoRequest::new(filename, content, caption).with_category(category);
    let photo = service.upload(&request, &identity).await?;

    Ok(Json(ApiResponse::new(photo)))
}

/// DELETE /api/photos/{id} - Delete a photo (owner only).
pub async fn delete_photo(
    State(state): State<Arc<AppState>>,
    Path(photo_id): Path<i64>,
    Query(query): Query<ActingUserQuery>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let identity = acting_identity(&state, query.user_id).await?;

    let service = GalleryService::new(&state.db, &state.storage);
    service.delete(photo_id, &identity).await?;

    Ok(Json(ApiResponse::new(())))
}
