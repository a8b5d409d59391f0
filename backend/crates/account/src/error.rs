//! Account Error Types
//!
//! Unexpected collaborator failures. Expected negative outcomes (unknown
//! email, wrong password) are `Ok(None)` and never reach this type.

use kernel::error::kind::ErrorKind;
use platform::password::PasswordHashError;
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// PostgreSQL unique_violation
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum AccountError {
    /// Password hashing or verification failed
    #[error("Password hashing failed")]
    Hashing(#[from] PasswordHashError),

    /// Database error
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Classification used when the failure is reported.
    ///
    /// Controllers answer every `AccountError` with a 500; the kind only
    /// sharpens what gets logged.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)) => {
                ErrorKind::ServiceUnavailable
            }
            AccountError::Database(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                ErrorKind::Conflict
            }
            _ => ErrorKind::InternalServerError,
        }
    }
}

impl From<tokio::task::JoinError> for AccountError {
    fn from(err: tokio::task::JoinError) -> Self {
        AccountError::Internal(format!("Blocking task failed: {}", err))
    }
}
