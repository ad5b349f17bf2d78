//! Router configuration for the web API.

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    add_event, delete_event, delete_photo, list_events, list_photos, login, register, serve_file,
    upcoming_events, update_valentine, upload_photo, valentine_status, AppState,
};

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let auth_routes = Router::new()
        .route("/login", post(login))
        .route("/register", post(register));

    let photo_routes = Router::new()
        .route("/", get(list_photos).post(upload_photo))
        .route("/:id", delete(delete_photo));

    let event_routes = Router::new()
        .route("/", get(list_events).post(add_event))
        .route("/upcoming", get(upcoming_events))
        .route("/:id", delete(delete_event));

    let valentine_routes = Router::new().route("/", get(valentine_status).put(update_valentine));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/photos", photo_routes)
        .nest("/events", event_routes)
        .nest("/valentine", valentine_routes);

    Router::new()
        .nest("/api", api_routes)
        .route("/files/:name", get(serve_file))
        .route("/health", get(health_check))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
