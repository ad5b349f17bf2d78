//! Event repository for the shared calendar.

use chrono::NaiveDate;
use sqlx::SqlitePool;

use super::event::{Event, NewEvent};
use crate::{RecuerdosError, Result};

/// Repository for event records.
pub struct EventRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EventRepository<'a> {
    /// Create a new EventRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new event.
    ///
    /// Returns the created event with the assigned ID.
    pub async fn create(&self, new_event: &NewEvent) -> Result<Event> {
        let result = sqlx::query(
            "INSERT INTO events (user_id, title, description, date, time) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(new_event.user_id)
        .bind(&new_event.title)
        .bind(&new_event.description)
        .bind(new_event.date)
        .bind(&new_event.time)
        .execute(self.pool)
        .await
        .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| RecuerdosError::NotFound("event".to_string()))
    }

    /// Get an event by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Event>> {
        let result = sqlx::query_as::<_, Event>(
            "SELECT id, user_id, title, description, date, time, created_at
             FROM events WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List all events, earliest date first.
    pub async fn list_all(&self) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, user_id, title, description, date, time, created_at
             FROM events ORDER BY date ASC, id ASC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        Ok(events)
    }

    /// List events on a specific date.
    pub async fn list_on(&self, date: NaiveDate) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, user_id, title, description, date, time, created_at
             FROM events WHERE date = ? ORDER BY id ASC",
        )
        .bind(date)
        .fetch_all(self.pool)
        .await
        .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        Ok(events)
    }

    /// List events dated `from` or later, soonest first, up to `limit`.
    pub async fn list_upcoming(&self, from: NaiveDate, limit: i64) -> Result<Vec<Event>> {
        let events = sqlx::query_as::<_, Event>(
            "SELECT id, user_id, title, description, date, time, created_at
             FROM events WHERE date >= ? ORDER BY date ASC, id ASC LIMIT ?",
        )
        .bind(from)
        .bind(limit)
        .fetch_all(self.pool)
        .await
        .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        Ok(events)
    }

    /// Delete an event by ID.
    ///
    /// Returns true if an event was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
