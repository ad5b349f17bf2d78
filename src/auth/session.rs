//! Client-side session state for recuerdos.
//!
//! The session is a single slot holding at most one [`Identity`]: set
//! after a successful register or login, read by every protected view,
//! cleared on logout. The identity is neither signed nor time-bounded;
//! it is a client-trusted cache of "who last successfully authenticated",
//! not a security boundary. Known limitation, kept on purpose.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::auth::Identity;
use crate::{RecuerdosError, Result};

/// Backend storage for the session slot.
///
/// Implementations decide where the identity lives: in memory for tests,
/// on disk for the real application (so it survives restarts, like the
/// durable local storage it replaces).
pub trait SessionStore {
    /// Read the stored identity, if any.
    fn load(&self) -> Result<Option<Identity>>;

    /// Store an identity, overwriting any previous one unconditionally.
    fn save(&self, identity: &Identity) -> Result<()>;

    /// Remove the stored identity. Clearing an empty store is a no-op.
    fn clear(&self) -> Result<()>;
}

/// The session slot, generic over its storage backend.
pub struct SessionHolder<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionHolder<S> {
    /// Create a session holder over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record a successful authentication.
    pub fn set(&self, identity: Identity) -> Result<()> {
        debug!(user_id = identity.id, "Session set");
        self.store.save(&identity)
    }

    /// The current identity; `None` means "not authenticated".
    pub fn get(&self) -> Result<Option<Identity>> {
        self.store.load()
    }

    /// Log out.
    pub fn clear(&self) -> Result<()> {
        debug!("Session cleared");
        self.store.clear()
    }
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<Identity>>,
}

impl MemorySessionStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<Identity>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| RecuerdosError::Session("poisoned session slot".to_string()))?;
        Ok(slot.clone())
    }

    fn save(&self, identity: &Identity) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| RecuerdosError::Session("poisoned session slot".to_string()))?;
        *slot = Some(identity.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| RecuerdosError::Session("poisoned session slot".to_string()))?;
        *slot = None;
        Ok(())
    }
}

/// Durable session store backed by a JSON file.
///
/// The identity persists across application restarts until explicitly
/// cleared. An unreadable or corrupt file is treated as an empty slot.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store persisting to the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Identity>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&content) {
            Ok(identity) => Ok(Some(identity)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Discarding corrupt session file");
                Ok(None)
            }
        }
    }

    fn save(&self, identity: &Identity) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(identity)
            .map_err(|e| RecuerdosError::Session(e.to_string()))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
