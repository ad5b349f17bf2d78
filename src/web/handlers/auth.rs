//! Authentication handlers.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::auth::{self, Identity};
use crate::db::UserRepository;
use crate::web::dto::{ApiResponse, LoginRequest, RegisterRequest};
use crate::web::error::ApiError;

use super::AppState;

/// POST /api/auth/register - Create an account.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<Identity>>, ApiError> {
    // Presence check only; everything else is forwarded as-is
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let repo = UserRepository::new(state.db.pool());
    let identity = auth::register(&repo, &req.email, &req.password).await?;

    Ok(Json(ApiResponse::new(identity)))
}

/// POST /api/auth/login - Log in.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<Identity>>, ApiError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let repo = UserRepository::new(state.db.pool());
    let identity = auth::login(&repo, &req.email, &req.password).await?;

    Ok(Json(ApiResponse::new(identity)))
}
