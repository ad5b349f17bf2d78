//! Web server for recuerdos.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::{FilesConfig, ServerConfig};
use crate::file::FileStorage;
use crate::{Database, RecuerdosError, Result};

use super::handlers::AppState;
use super::router::create_router;

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &ServerConfig, files: &FilesConfig, db: Database) -> Result<Self> {
        let addr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|_| RecuerdosError::Config("invalid web server address".to_string()))?;

        let storage = FileStorage::new(&files.storage_path)?;
        info!("Photo storage initialized at: {}", files.storage_path);

        let app_state =
            AppState::new(db, storage).with_max_upload_size_mb(files.max_upload_size_mb);

        Ok(Self {
            addr,
            app_state: Arc::new(app_state),
        })
    }

    /// Run the server until the process is stopped.
    pub async fn run(self) -> Result<()> {
        let router = create_router(self.app_state);

        let listener = TcpListener::bind(self.addr).await?;
        info!("Web server listening on {}", self.addr);

        axum::serve(listener, router)
            .await
            .map_err(|e| RecuerdosError::Config(e.to_string()))?;

        Ok(())
    }
}
