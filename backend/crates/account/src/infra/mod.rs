//! Infrastructure Layer
//!
//! Database and cryptography implementations of the domain ports.

pub mod crypto;
pub mod postgres;

pub use crypto::{Argon2Adapter, HmacEncrypter};
pub use postgres::{PgAccountRepository, PgLogErrorRepository};
