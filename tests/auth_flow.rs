//! Authentication core flow tests.
//!
//! Exercises register and login directly against the library, without the
//! web layer in between.

use recuerdos::{login, register, AuthError, Database, UserRepository};
use recuerdos::{FileSessionStore, MemorySessionStore, SessionHolder};

async fn open_db() -> Database {
    Database::open_in_memory().await.unwrap()
}

#[tokio::test]
async fn register_then_login_returns_same_identity() {
    let db = open_db().await;
    let repo = UserRepository::new(db.pool());

    let registered = register(&repo, "pareja@x.com", "nuestra-clave").await.unwrap();
    let logged_in = login(&repo, "pareja@x.com", "nuestra-clave").await.unwrap();

    assert_eq!(registered.id, logged_in.id);
    assert_eq!(logged_in.email, "pareja@x.com");
}

#[tokio::test]
async fn duplicate_registration_is_rejected_and_first_account_survives() {
    let db = open_db().await;
    let repo = UserRepository::new(db.pool());

    register(&repo, "a@x.com", "p1").await.unwrap();

    let second = register(&repo, "a@x.com", "p2").await;
    assert!(matches!(second, Err(AuthError::EmailAlreadyRegistered)));

    // Exactly one credential record exists
    assert_eq!(repo.count().await.unwrap(), 1);

    // The original password still works; the rejected one never took
    assert!(login(&repo, "a@x.com", "p1").await.is_ok());
    assert!(matches!(
        login(&repo, "a@x.com", "p2").await,
        Err(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let db = open_db().await;
    let repo = UserRepository::new(db.pool());

    register(&repo, "a@x.com", "secret1").await.unwrap();

    let unknown_email = login(&repo, "b@x.com", "secret1").await.unwrap_err();
    let wrong_password = login(&repo, "a@x.com", "secret2").await.unwrap_err();

    assert!(matches!(unknown_email, AuthError::InvalidCredentials));
    assert!(matches!(wrong_password, AuthError::InvalidCredentials));
    assert_eq!(unknown_email.to_string(), wrong_password.to_string());
}

#[tokio::test]
async fn emails_are_matched_exactly() {
    let db = open_db().await;
    let repo = UserRepository::new(db.pool());

    register(&repo, "a@x.com", "secret1").await.unwrap();

    // A different casing is a different (unknown) account
    let result = login(&repo, "A@x.com", "secret1").await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn identity_never_carries_the_hash() {
    let db = open_db().await;
    let repo = UserRepository::new(db.pool());

    let registered = register(&repo, "a@x.com", "secret1").await.unwrap();
    let logged_in = login(&repo, "a@x.com", "secret1").await.unwrap();

    for identity in [registered, logged_in] {
        let json = serde_json::to_value(&identity).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("id"));
        assert!(object.contains_key("email"));
    }
}

#[tokio::test]
async fn session_holder_tracks_authentication() {
    let db = open_db().await;
    let repo = UserRepository::new(db.pool());
    let session = SessionHolder::new(MemorySessionStore::new());

    // Not authenticated yet
    assert!(session.get().unwrap().is_none());

    let identity = register(&repo, "a@x.com", "secret1").await.unwrap();
    session.set(identity.clone()).unwrap();

    // Protected views read the slot
    assert_eq!(session.get().unwrap(), Some(identity));

    // Logout
    session.clear().unwrap();
    assert!(session.get().unwrap().is_none());
}

#[tokio::test]
async fn file_session_survives_restart_until_logout() {
    let db = open_db().await;
    let repo = UserRepository::new(db.pool());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let identity = register(&repo, "a@x.com", "secret1").await.unwrap();

    {
        let session = SessionHolder::new(FileSessionStore::new(&path));
        session.set(identity.clone()).unwrap();
    }

    // "Restart": a fresh holder over the same path still sees the identity
    let session = SessionHolder::new(FileSessionStore::new(&path));
    assert_eq!(session.get().unwrap(), Some(identity));

    // Explicit logout is the only thing that clears it
    session.clear().unwrap();
    let session = SessionHolder::new(FileSessionStore::new(&path));
    assert!(session.get().unwrap().is_none());
}
