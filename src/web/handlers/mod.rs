//! Web API handlers for recuerdos.

mod auth;
mod calendar;
mod files;
mod gallery;
mod valentine;

pub use auth::{login, register};
pub use calendar::{add_event, delete_event, list_events, upcoming_events};
pub use files::serve_file;
pub use gallery::{delete_photo, list_photos, upload_photo};
pub use valentine::{update_valentine, valentine_status};

use std::sync::Arc;

use crate::auth::Identity;
use crate::db::{Database, UserRepository};
use crate::file::FileStorage;
use crate::gallery::DEFAULT_MAX_UPLOAD_SIZE;

use super::error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Database,
    /// Photo blob storage.
    pub storage: FileStorage,
    /// Maximum photo upload size in bytes.
    pub max_upload_size: u64,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, storage: FileStorage) -> Self {
        Self {
            db,
            storage,
            max_upload_size: DEFAULT_MAX_UPLOAD_SIZE,
        }
    }

    /// Set the maximum upload size in megabytes.
    pub fn with_max_upload_size_mb(mut self, max_mb: u64) -> Self {
        self.max_upload_size = max_mb * 1024 * 1024;
        self
    }
}

/// Resolve the client-asserted `user_id` to an [`Identity`].
///
/// The id is trusted the same way the original trusts its locally stored
/// identity; the lookup only attributes ownership and rejects ids that
/// never existed.
pub(crate) async fn acting_identity(
    state: &Arc<AppState>,
    user_id: i64,
) -> Result<Identity, ApiError> {
    let repo = UserRepository::new(state.db.pool());
    let user = repo
        .get_by_id(user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::unauthorized("unknown user"))?;

    Ok(Identity::from(&user))
}
