//! Test helpers for web API tests.
//!
//! Provides a TestServer over an in-memory database and temporary photo
//! storage, plus register/login helpers.

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;

use recuerdos::web::handlers::AppState;
use recuerdos::web::router::create_router;
use recuerdos::{Database, FileStorage};

/// A running test server plus the resources backing it.
pub struct TestApp {
    pub server: TestServer,
    pub db: Database,
    // Held so the storage directory outlives the test
    _storage_dir: TempDir,
}

/// Create a test server with an in-memory database and temp storage.
pub async fn create_test_app() -> TestApp {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");

    let storage_dir = tempfile::tempdir().expect("Failed to create storage dir");
    let storage = FileStorage::new(storage_dir.path()).expect("Failed to create storage");

    let app_state = Arc::new(AppState::new(db.clone(), storage));
    let router = create_router(app_state);
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        db,
        _storage_dir: storage_dir,
    }
}

/// Register a user and return the response body.
pub async fn register_user(server: &TestServer, email: &str, password: &str) -> Value {
    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "email": email,
            "password": password
        }))
        .await;

    response.json::<Value>()
}

/// Log in and return the response body.
pub async fn login_user(server: &TestServer, email: &str, password: &str) -> Value {
    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": email,
            "password": password
        }))
        .await;

    response.json::<Value>()
}

/// Register a user and return just the assigned id.
pub async fn register_user_id(server: &TestServer, email: &str, password: &str) -> i64 {
    let body = register_user(server, email, password).await;
    body["data"]["id"].as_i64().expect("registration returned no id")
}
