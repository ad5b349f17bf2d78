//! Photo repository for the shared gallery.

use sqlx::SqlitePool;

use super::photo::{Category, NewPhoto, Photo};
use crate::{RecuerdosError, Result};

/// Repository for photo records.
pub struct PhotoRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PhotoRepository<'a> {
    /// Create a new PhotoRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new photo record.
    ///
    /// Returns the created photo with the assigned ID.
    pub async fn create(&self, new_photo: &NewPhoto) -> Result<Photo> {
        let result = sqlx::query(
            "INSERT INTO photos (user_id, image_url, caption, category) VALUES (?, ?, ?, ?)",
        )
        .bind(new_photo.user_id)
        .bind(&new_photo.image_url)
        .bind(&new_photo.caption)
        .bind(new_photo.category.as_str())
        .execute(self.pool)
        .await
        .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| RecuerdosError::NotFound("photo".to_string()))
    }

    /// Get a photo by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Photo>> {
        let result = sqlx::query_as::<_, Photo>(
            "SELECT id, user_id, image_url, caption, category, created_at
             FROM photos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        Ok(result)
    }

    /// List all photos, newest first.
    pub async fn list_all(&self) -> Result<Vec<Photo>> {
        let photos = sqlx::query_as::<_, Photo>(
            "SELECT id, user_id, image_url, caption, category, created_at
             FROM photos ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        Ok(photos)
    }

    /// List photos in one category, newest first.
    pub async fn list_by_category(&self, category: Category) -> Result<Vec<Photo>> {
        let photos = sqlx::query_as::<_, Photo>(
            "SELECT id, user_id, image_url, caption, category, created_at
             FROM photos WHERE category = ? ORDER BY created_at DESC, id DESC",
        )
        .bind(category.as_str())
        .fetch_all(self.pool)
        .await
        .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        Ok(photos)
    }

    /// Delete a photo by ID.
    ///
    /// Returns true if a photo was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM photos WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count all photos.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM photos")
            .fetch_one(self.pool)
            .await
            .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        Ok(count)
    }
}
