//! User repository for recuerdos.
//!
//! CRUD operations for the credential records backing registration and
//! login.

use sqlx::SqlitePool;

use super::user::{NewUser, User};
use crate::{RecuerdosError, Result};

/// Repository for user records.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user in the database.
    ///
    /// Returns the created user with the assigned ID. A violation of the
    /// email uniqueness constraint surfaces as
    /// [`RecuerdosError::Conflict`], distinct from other database
    /// failures, so callers can treat it as "email already registered".
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let result = sqlx::query("INSERT INTO users (email, password) VALUES (?, ?)")
            .bind(&new_user.email)
            .bind(&new_user.password)
            .execute(self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    RecuerdosError::Conflict("email".to_string())
                }
                _ => RecuerdosError::Database(e.to_string()),
            })?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| RecuerdosError::NotFound("user".to_string()))
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(
            "SELECT id, email, password, created_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Get a user by email.
    ///
    /// The comparison is SQLite's `=` on TEXT: exact, case-sensitive.
    /// `A@x.com` and `a@x.com` are distinct accounts.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let result = sqlx::query_as::<_, User>(
            "SELECT id, email, password, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        Ok(result)
    }

    /// Count all users.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await
            .map_err(|e| RecuerdosError::Database(e.to_string()))?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[tokio::test]
    async fn test_create_and_get() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());

        let user = repo.create(&NewUser::new("a@x.com", "hash")).await.unwrap();
        assert!(user.id > 0);
        assert_eq!(user.email, "a@x.com");

        let fetched = repo.get_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(fetched.email, "a@x.com");
        assert_eq!(fetched.password, "hash");
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("a@x.com", "hash")).await.unwrap();

        let found = repo.find_by_email("a@x.com").await.unwrap();
        assert!(found.is_some());

        let missing = repo.find_by_email("b@x.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_find_by_email_is_case_sensitive() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("a@x.com", "hash")).await.unwrap();

        let other_case = repo.find_by_email("A@X.COM").await.unwrap();
        assert!(other_case.is_none());
    }

    #[tokio::test]
    async fn test_create_duplicate_email_is_conflict() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());

        repo.create(&NewUser::new("a@x.com", "hash1")).await.unwrap();
        let result = repo.create(&NewUser::new("a@x.com", "hash2")).await;

        assert!(matches!(result, Err(RecuerdosError::Conflict(_))));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_count() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());

        assert_eq!(repo.count().await.unwrap(), 0);
        repo.create(&NewUser::new("a@x.com", "h")).await.unwrap();
        repo.create(&NewUser::new("b@x.com", "h")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
    }
}
