//! Valentine message handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::valentine::ValentineService;
use crate::web::dto::{ApiResponse, ValentineStatusResponse, ValentineUpdateBody};
use crate::web::error::ApiError;

use super::AppState;

/// GET /api/valentine - The message and its active flag.
pub async fn valentine_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<ValentineStatusResponse>>, ApiError> {
    let service = ValentineService::new(&state.db);
    let status = service.status().await?;

    Ok(Json(ApiResponse::new(ValentineStatusResponse {
        message: status.message,
        is_active: status.is_active,
    })))
}

/// PUT /api/valentine - Toggle the popup and/or replace the message.
pub async fn update_valentine(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ValentineUpdateBody>,
) -> Result<Json<ApiResponse<ValentineStatusResponse>>, ApiError> {
    if body.is_active.is_none() && body.message.is_none() {
        return Err(ApiError::bad_request("Nothing to update"));
    }

    let service = ValentineService::new(&state.db);

    if let Some(message) = body.message.as_deref() {
        service.update_message(message).await?;
    }

    let status = match body.is_active {
        Some(is_active) => service.set_active(is_active).await?,
        None => service.status().await?,
    };

    Ok(Json(ApiResponse::new(ValentineStatusResponse {
        message: status.message,
        is_active: status.is_active,
    })))
}
