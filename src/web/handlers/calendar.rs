//! Calendar handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;

use crate::calendar::{AddEventRequest, CalendarService, Event};
use crate::web::dto::{ActingUserQuery, AddEventBody, ApiResponse, EventListQuery};
use crate::web::error::ApiError;

use super::{acting_identity, AppState};

/// GET /api/events - List events, optionally on one date.
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EventListQuery>,
) -> Result<Json<ApiResponse<Vec<Event>>>, ApiError> {
    let service = CalendarService::new(&state.db);

    let events = match query.date {
        Some(date) => service.events_on(date).await?,
        None => service.list().await?,
    };

    Ok(Json(ApiResponse::new(events)))
}

/// GET /api/events/upcoming - Events dated today or later, soonest first.
pub async fn upcoming_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<Event>>>, ApiError> {
    let service = CalendarService::new(&state.db);
    let today = Utc::now().date_naive();
    let events = service.upcoming(today).await?;

    Ok(Json(ApiResponse::new(events)))
}

/// POST /api/events - Create an event.
pub async fn add_event(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddEventBody>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    if body.title.is_empty() {
        return Err(ApiError::bad_request("Title and date are required"));
    }

    let identity = acting_identity(&state, body.user_id).await?;

    let mut request = AddEventRequest::new(body.title, body.date).with_description(body.description);
    if let Some(time) = body.time {
        request = request.with_time(time);
    }

    let service = CalendarService::new(&state.db);
    let event = service.add(&request, &identity).await?;

    Ok(Json(ApiResponse::new(event)))
}

/// DELETE /api/events/{id} - Delete an event (owner only).
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<i64>,
    Query(query): Query<ActingUserQuery>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let identity = acting_identity(&state, query.user_id).await?;

    let service = CalendarService::new(&state.db);
    service.delete(event_id, &identity).await?;

    Ok(Json(ApiResponse::new(())))
}
