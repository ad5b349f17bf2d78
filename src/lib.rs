//! Recuerdos - a shared memories application.
//!
//! An authenticated photo gallery with categories, an event calendar, and
//! a togglable valentine message, backed by SQLite and local file storage.

pub mod auth;
pub mod calendar;
pub mod config;
pub mod db;
pub mod error;
pub mod file;
pub mod gallery;
pub mod logging;
pub mod valentine;
pub mod web;

pub use auth::{
    hash_password, login, register, verify_password, AuthError, FileSessionStore, Identity,
    MemorySessionStore, PasswordError, SessionHolder, SessionStore,
};
pub use calendar::{AddEventRequest, CalendarService, Event, EventRepository, NewEvent};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository};
pub use error::{RecuerdosError, Result};
pub use file::FileStorage;
pub use gallery::{Category, GalleryService, NewPhoto, Photo, PhotoRepository, UploadPhotoRequest};
pub use valentine::{ValentineMessage, ValentineRepository, ValentineService};
pub use web::WebServer;
