//! Togglable valentine message for recuerdos.
//!
//! A single database row holds the message and its active flag. While
//! active, every page load surfaces the message as a popup; the toggle
//! flips it without touching the text.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};
use tracing::info;

use crate::db::Database;
use crate::{RecuerdosError, Result};

/// The valentine message row.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ValentineMessage {
    /// Row ID.
    pub id: i64,
    /// The message text.
    pub message: String,
    /// Whether the popup is currently shown.
    pub is_active: bool,
    /// Last change timestamp.
    pub updated_at: String,
}

impl FromRow<'_, SqliteRow> for ValentineMessage {
    fn from_row(row: &SqliteRow) -> std::result::Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            message: row.try_get("message")?,
            is_active: row.try_get("is_active")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// Repository for the valentine message row.
pub struct ValentineRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ValentineRepository<'a> {
    /// Create a new ValentineRepository with the given pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch the message row. The first migration seeds it, so a missing
    /// row means the database was tampered with.
    pub async fn get(&self) -> Result<ValentineMessage> {
        sqlx::query_as::<_, ValentineMessage>(
            "SELECT id, message, is_active, updated_at FROM valentine_message ORDER BY id LIMIT 1",
        )
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RecuerdosError::Database(e.to_string()))?
        .ok_or_else(|| RecuerdosError::NotFound("valentine message".to_string()))
    }

    /// Set the active flag.
    pub async fn set_active(&self, id: i64, is_active: bool) -> Result<()> {
        sqlx::query(
            "UPDATE valentine_message SET is_active = ?, updated_at = datetime('now') WHERE id = ?",
        )
        .bind(is_active)
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        Ok(())
    }

    /// Replace the message text.
    pub async fn set_message(&self, id: i64, message: &str) -> Result<()> {
        sqlx::query(
            "UPDATE valentine_message SET message = ?, updated_at = datetime('now') WHERE id = ?",
        )
        .bind(message)
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        Ok(())
    }
}

/// Service for the valentine message.
pub struct ValentineService<'a> {
    db: &'a Database,
}

impl<'a> ValentineService<'a> {
    /// Create a new ValentineService.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// The current message and its active flag.
    pub async fn status(&self) -> Result<ValentineMessage> {
        ValentineRepository::new(self.db.pool()).get().await
    }

    /// The message to pop up, or `None` while the toggle is off.
    pub async fn announcement(&self) -> Result<Option<String>> {
        let status = self.status().await?;
        Ok(status.is_active.then_some(status.message))
    }

    /// Set the active flag and return the updated row.
    pub async fn set_active(&self, is_active: bool) -> Result<ValentineMessage> {
        let repo = ValentineRepository::new(self.db.pool());
        let current = repo.get().await?;
        repo.set_active(current.id, is_active).await?;

        info!(is_active, "Valentine message toggled");
        repo.get().await
    }

    /// Flip the active flag and return the updated row.
    pub async fn toggle(&self) -> Result<ValentineMessage> {
        let current = self.status().await?;
        self.set_active(!current.is_active).await
    }

    /// Replace the message text and return the updated row.
    pub async fn update_message(&self, message: &str) -> Result<ValentineMessage> {
        if message.trim().is_empty() {
            return Err(RecuerdosError::Validation(
                "el mensaje no puede estar vacío".to_string(),
            ));
        }

        let repo = ValentineRepository::new(self.db.pool());
        let current = repo.get().await?;
        repo.set_message(current.id, message).await?;

        info!("Valentine message updated");
        repo.get().await
    }
}
