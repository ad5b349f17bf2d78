//! Event model for the shared calendar.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// Event entity: one calendar entry.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    /// Unique event ID.
    pub id: i64,
    /// User who created the event.
    pub user_id: i64,
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Optional time, kept as the "HH:MM" string the user entered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

impl FromRow<'_, SqliteRow> for Event {
    fn from_row(row: &SqliteRow) -> std::result::Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            date: row.try_get("date")?,
            time: row.try_get("time")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Data for creating a new event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    /// Creating user.
    pub user_id: i64,
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Optional "HH:MM" time.
    pub time: Option<String>,
}

impl NewEvent {
    /// Create a new event with the required fields.
    pub fn new(user_id: i64, title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            user_id,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_event_builder() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
        let event = NewEvent::new(1, "Aniversario", date)
            .with_description("Cena especial")
            .with_time("20:30");

        assert_eq!(event.user_id, 1);
        assert_eq!(event.title, "Aniversario");
        assert_eq!(event.description, "Cena especial");
        assert_eq!(event.date, date);
        assert_eq!(event.time.as_deref(), Some("20:30"));
    }

    #[test]
    fn test_event_serializes_date_iso() {
        let event = Event {
            id: 1,
            user_id: 1,
            title: "Cita".to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2026, 2, 14).unwrap(),
            time: None,
            created_at: "2026-01-01 00:00:00".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"2026-02-14\""));
        // Absent time is omitted entirely
        assert!(!json.contains("\"time\""));
    }
}
