//! Account registration and login for recuerdos.
//!
//! Both operations return a closed, tagged result: an [`Identity`] on
//! success or an [`AuthError`] reason on failure. No other error type
//! crosses this boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::auth::hash_password;
use crate::db::{NewUser, UserRepository};
use crate::RecuerdosError;

/// Authentication failure reasons.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The email is already taken by an existing account.
    #[error("email already registered")]
    EmailAlreadyRegistered,

    /// Unknown email or wrong password.
    ///
    /// Deliberately covers both cases with one reason so callers cannot
    /// enumerate accounts.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The storage collaborator failed.
    #[error("storage error: {0}")]
    Storage(String),
}

/// The public-safe projection of a credential record: id and email only.
///
/// Constructed from a stored user; the password hash is stripped here and
/// cannot reappear downstream because the type has no field for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User ID.
    pub id: i64,
    /// Login email.
    pub email: String,
}

impl From<&crate::db::User> for Identity {
    fn from(user: &crate::db::User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

/// Register a new account.
///
/// This function:
/// 1. Looks up the email (exact match) to report duplicates early
/// 2. Hashes the password
/// 3. Inserts the credential record
///
/// The `users.email` UNIQUE constraint is the authoritative duplicate
/// check: a storage-level uniqueness violation on insert maps to
/// [`AuthError::EmailAlreadyRegistered`] even when the preceding lookup
/// raced with a concurrent registration and saw nothing.
///
/// Email and password are forwarded as-is; empty strings are legal input
/// here, presence checks belong to the calling view.
pub async fn register(
    repo: &UserRepository<'_>,
    email: &str,
    password: &str,
) -> std::result::Result<Identity, AuthError> {
    // 1. Advisory duplicate check
    match repo.find_by_email(email).await {
        Ok(Some(_)) => return Err(AuthError::EmailAlreadyRegistered),
        Ok(None) => {}
        Err(e) => return Err(AuthError::Storage(e.to_string())),
    }

    // 2. Hash the password
    let password_hash = hash_password(password).map_err(|e| AuthError::Storage(e.to_string()))?;

    // 3. Insert; the UNIQUE constraint settles concurrent duplicates
    let user = match repo.create(&NewUser::new(email, password_hash)).await {
        Ok(user) => user,
        Err(RecuerdosError::Conflict(_)) => return Err(AuthError::EmailAlreadyRegistered),
        Err(e) => return Err(AuthError::Storage(e.to_string())),
    };

    info!(email = %user.email, user_id = user.id, "New account registered");

    Ok(Identity::from(&user))
}

/// Log in to an existing account.
///
/// Unknown email, wrong password and lookup failures all return
/// [`AuthError::InvalidCredentials`]; a lookup failure is additionally
/// recorded at error level so operators can tell it apart from a plain
/// bad login.
pub async fn login(
    repo: &UserRepository<'_>,
    email: &str,
    password: &str,
) -> std::result::Result<Identity, AuthError> {
    let user = match repo.find_by_email(email).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            warn!(email = %email, "Login failed: unknown email");
            return Err(AuthError::InvalidCredentials);
        }
        Err(e) => {
            error!(email = %email, error = %e, "Login lookup failed");
            return Err(AuthError::InvalidCredentials);
        }
    };

    // A malformed stored hash is a verification failure, not a crash
    if crate::auth::verify_password(password, &user.password).is_err() {
        warn!(email = %email, "Login failed: wrong password");
        return Err(AuthError::InvalidCredentials);
    }

    info!(email = %user.email, user_id = user.id, "Login successful");

    Ok(Identity::from(&user))
}
