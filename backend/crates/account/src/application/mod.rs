//! Application Layer
//!
//! Use cases and application configuration.

pub mod add_account;
pub mod authentication;
pub mod config;

// Re-exports
pub use add_account::AddAccountUseCase;
pub use authentication::AuthenticationUseCase;
pub use config::AccountConfig;
