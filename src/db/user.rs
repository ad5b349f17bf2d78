//! User model for recuerdos.
//!
//! A user row is the stored credential record: email plus password hash.
//! The hash never leaves this module's consumers except through
//! [`crate::auth::Identity`], which carries only id and email.

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

/// User entity representing a registered user.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: i64,
    /// Login email (unique, matched byte-for-byte).
    pub email: String,
    /// Password hash (Argon2). Never logged, never serialized.
    pub password: String,
    /// Account creation timestamp.
    pub created_at: String,
}

impl FromRow<'_, SqliteRow> for User {
    fn from_row(row: &SqliteRow) -> std::result::Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            email: row.try_get("email")?,
            password: row.try_get("password")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login email.
    pub email: String,
    /// Password hash (must be pre-hashed with Argon2).
    pub password: String,
}

impl NewUser {
    /// Create a new user record from an email and a password hash.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = NewUser::new("a@x.com", "$argon2id$hash");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.password, "$argon2id$hash");
    }

    #[test]
    fn test_user_debug_is_derivable() {
        let user = User {
            id: 1,
            email: "a@x.com".to_string(),
            password: "hash".to_string(),
            created_at: "2024-01-01 00:00:00".to_string(),
        };
        assert!(format!("{user:?}").contains("a@x.com"));
    }
}
