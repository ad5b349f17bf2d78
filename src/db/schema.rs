//! Database schema and migrations for recuerdos.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - users table.
    // The UNIQUE constraint on email is the authoritative uniqueness check
    // for registration; the application-level lookup is advisory only.
    r#"
-- Users table for authentication
CREATE TABLE users (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    email       TEXT NOT NULL UNIQUE,
    password    TEXT NOT NULL,           -- Argon2 hash
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_users_email ON users(email);
"#,
    // v2: Photos table for the shared gallery
    r#"
-- Photos table for the shared gallery
CREATE TABLE photos (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id     INTEGER NOT NULL REFERENCES users(id),
    image_url   TEXT NOT NULL,
    caption     TEXT NOT NULL,
    category    TEXT NOT NULL DEFAULT 'momentos_especiales',
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_photos_user_id ON photos(user_id);
CREATE INDEX idx_photos_category ON photos(category);
CREATE INDEX idx_photos_created_at ON photos(created_at);
"#,
    // v3: Events table for the shared calendar
    r#"
-- Events table for the shared calendar
CREATE TABLE events (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id     INTEGER NOT NULL REFERENCES users(id),
    title       TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    date        TEXT NOT NULL,           -- ISO date (YYYY-MM-DD)
    time        TEXT,                    -- optional HH:MM as entered
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_events_user_id ON events(user_id);
CREATE INDEX idx_events_date ON events(date);
"#,
    // v4: Valentine message table, seeded with a single inactive row
    r#"
-- Single-row table holding the togglable valentine message
CREATE TABLE valentine_message (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    message     TEXT NOT NULL,
    is_active   INTEGER NOT NULL DEFAULT 0,
    updated_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

INSERT INTO valentine_message (message, is_active)
VALUES ('Feliz San Valentín', 0);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert!(!MIGRATIONS.is_empty());
    }

    #[test]
    fn test_migrations_contain_tables() {
        let all: String = MIGRATIONS.concat();
        assert!(all.contains("CREATE TABLE users"));
        assert!(all.contains("CREATE TABLE photos"));
        assert!(all.contains("CREATE TABLE events"));
        assert!(all.contains("CREATE TABLE valentine_message"));
    }

    #[test]
    fn test_email_is_unique() {
        assert!(MIGRATIONS[0].contains("email       TEXT NOT NULL UNIQUE"));
    }
}
