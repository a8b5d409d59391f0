//! Cryptography Traits
//!
//! The use cases only know these shapes; algorithms are chosen by the
//! infrastructure adapters.

use crate::domain::value_object::{AccountId, access_token::AccessToken};
use crate::error::AccountResult;

/// One-way password hashing
#[trait_variant::make(Hasher: Send)]
pub trait LocalHasher {
    async fn hash(&self, plaintext: &str) -> AccountResult<String>;
}

/// Checks a clear-text password against a stored hash
#[trait_variant::make(HashComparer: Send)]
pub trait LocalHashComparer {
    /// `Ok(false)` on mismatch; `Err` only when comparison itself failed
    async fn compare(&self, plaintext: &str, hash: &str) -> AccountResult<bool>;
}

/// Derives a bearer token from an account id
#[trait_variant::make(Encrypter: Send)]
pub trait LocalEncrypter {
    async fn encrypt(&self, id: &AccountId) -> AccountResult<AccessToken>;
}
