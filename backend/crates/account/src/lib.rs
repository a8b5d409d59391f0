//! Account (Registration and Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, capability traits
//! - `application/` - Use cases and configuration
//! - `infra/` - Database and cryptography implementations
//! - `presentation/` - Controllers, validation, error logging decorator, router
//!
//! ## Features
//! - Sign up with name + email + password, answered with an access token
//! - Login with email + password
//! - Every 500 response is persisted to the error log
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optionally peppered
//! - Access tokens are HMAC-SHA256 signed and unique per issuance
//! - Unknown email and wrong password are indistinguishable to the client (401)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
pub(crate) mod test_support;


// Re-exports for convenience
pub use application::{AccountConfig, AddAccountUseCase, AuthenticationUseCase};
pub use error::{AccountError, AccountResult};
pub use infra::{Argon2Adapter, HmacEncrypter, PgAccountRepository, PgLogErrorRepository};
pub use presentation::router::account_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
