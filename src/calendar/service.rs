//! Calendar service for recuerdos.
//!
//! High-level event operations: creation, per-date and upcoming queries,
//! and owner-gated deletion.

use chrono::NaiveDate;
use tracing::info;

use crate::auth::Identity;
use crate::db::Database;
use crate::{RecuerdosError, Result};

use super::event::{Event, NewEvent};
use super::repository::EventRepository;

/// How many upcoming events the dashboard shows.
pub const UPCOMING_LIMIT: i64 = 6;

/// Request data for creating an event.
#[derive(Debug, Clone)]
pub struct AddEventRequest {
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Optional "HH:MM" time.
    pub time: Option<String>,
}

impl AddEventRequest {
    /// Create a request with the required fields.
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            date,
            time: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the time.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }
}

/// Service for calendar operations.
pub struct CalendarService<'a> {
    db: &'a Database,
}

impl<'a> CalendarService<'a> {
    /// Create a new CalendarService.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Create an event on behalf of `identity`.
    ///
    /// Presence check only: the title must be non-empty. An empty time
    /// string is normalized to no time, matching the original form.
    pub async fn add(&self, request: &AddEventRequest, identity: &Identity) -> Result<Event> {
        if request.title.trim().is_empty() {
            return Err(RecuerdosError::Validation(
                "el evento necesita un título".to_string(),
            ));
        }

        let mut new_event = NewEvent::new(identity.id, request.title.clone(), request.date)
            .with_description(request.description.clone());

        if let Some(time) = request.time.as_deref() {
            if !time.is_empty() {
                new_event = new_event.with_time(time);
            }
        }

        let event = EventRepository::new(self.db.pool()).create(&new_event).await?;

        info!(
            event_id = event.id,
            user_id = identity.id,
            date = %event.date,
            "Event created"
        );

        Ok(event)
    }

    /// List all events, earliest date first.
    pub async fn list(&self) -> Result<Vec<Event>> {
        EventRepository::new(self.db.pool()).list_all().await
    }

    /// List events on a specific date.
    pub async fn events_on(&self, date: NaiveDate) -> Result<Vec<Event>> {
        EventRepository::new(self.db.pool()).list_on(date).await
    }

    /// List events dated `today` or later, soonest first.
    pub async fn upcoming(&self, today: NaiveDate) -> Result<Vec<Event>> {
        EventRepository::new(self.db.pool())
            .list_upcoming(today, UPCOMING_LIMIT)
            .await
    }

    /// Delete an event. Only the creating user may delete it.
    pub async fn delete(&self, event_id: i64, identity: &Identity) -> Result<()> {
        let repo = EventRepository::new(self.db.pool());

        let event = repo
            .get_by_id(event_id)
            .await?
            .ok_or_else(|| RecuerdosError::NotFound("event".to_string()))?;

        if event.user_id != identity.id {
            return Err(RecuerdosError::Permission(
                "solo quien creó el evento puede eliminarlo".to_string(),
            ));
        }

        repo.delete(event_id).await?;

        info!(event_id, user_id = identity.id, "Event deleted");
        Ok(())
    }
}
