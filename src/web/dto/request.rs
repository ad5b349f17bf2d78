//! Request DTOs for the web API.

use chrono::NaiveDate;
use serde::Deserialize;

/// Registration request.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Login email.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Password.
    pub password: String,
}

/// Event creation request.
#[derive(Debug, Deserialize)]
pub struct AddEventBody {
    /// Acting user (client-asserted identity).
    pub user_id: i64,
    /// Event title.
    pub title: String,
    /// Event description.
    #[serde(default)]
    pub description: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Optional "HH:MM" time.
    #[serde(default)]
    pub time: Option<String>,
}

/// Valentine message update request. Either field may be sent alone.
#[derive(Debug, Deserialize)]
pub struct ValentineUpdateBody {
    /// New active flag.
    #[serde(default)]
    pub is_active: Option<bool>,
    /// New message text.
    #[serde(default)]
    pub message: Option<String>,
}

/// Query parameter carrying the client-asserted identity on deletes.
#[derive(Debug, Deserialize)]
pub struct ActingUserQuery {
    /// Acting user ID.
    pub user_id: i64,
}

/// Query parameter filtering photos by category.
#[derive(Debug, Deserialize)]
pub struct PhotoListQuery {
    /// Category storage id, e.g. `viajes`. Absent means all.
    #[serde(default)]
    pub category: Option<String>,
}

/// Query parameter filtering events by date.
#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    /// ISO date; absent means all events.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}
