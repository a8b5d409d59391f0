//! Cryptography Adapters
//!
//! - `Argon2Adapter`: password hashing over `platform::password`
//! - `HmacEncrypter`: signed, opaque access tokens

use platform::crypto::{hmac_sha256, random_bytes, to_base64_url};
use platform::password::{ClearTextPassword, HashedPassword};

use crate::application::config::AccountConfig;
use crate::domain::cryptography::{Encrypter, HashComparer, Hasher};
use crate::domain::value_object::{AccountId, access_token::AccessToken};
use crate::error::AccountResult;

/// Random bytes mixed into every token
const TOKEN_NONCE_LEN: usize = 16;

// ============================================================================
// Argon2
// ============================================================================

/// Argon2id hasher and comparer
///
/// Both operations are CPU-bound and run on the blocking pool.
#[derive(Clone, Default)]
pub struct Argon2Adapter {
    pepper: Option<Vec<u8>>,
}

impl Argon2Adapter {
    pub fn new(pepper: Option<Vec<u8>>) -> Self {
        Self { pepper }
    }

    pub fn from_config(config: &AccountConfig) -> Self {
        Self::new(config.password_pepper.clone())
    }
}

impl Hasher for Argon2Adapter {
    async fn hash(&self, plaintext: &str) -> AccountResult<String> {
        let password = ClearTextPassword::new(plaintext);
        let pepper = self.pepper.clone();

        let hashed =
            tokio::task::spawn_blocking(move || password.hash(pepper.as_deref())).await??;

        Ok(hashed.into_phc_string())
    }
}

impl HashComparer for Argon2Adapter {
    async fn compare(&self, plaintext: &str, hash: &str) -> AccountResult<bool> {
        // A stored value that is not a PHC string is corrupt data, not a wrong password.
        let hashed = HashedPassword::from_phc_string(hash)?;
        let password = ClearTextPassword::new(plaintext);
        let pepper = self.pepper.clone();

        let matches =
            tokio::task::spawn_blocking(move || hashed.verify(&password, pepper.as_deref()))
                .await?;

        Ok(matches)
    }
}

// ============================================================================
// HMAC access tokens
// ============================================================================

/// HMAC-SHA256 token issuer
///
/// Token format: `b64url("{account_id}:{b64url(nonce)}") "." b64url(hmac)`
#[derive(Clone)]
pub struct HmacEncrypter {
    secret: [u8; 32],
}

impl HmacEncrypter {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    pub fn from_config(config: &AccountConfig) -> Self {
        Self::new(config.token_secret)
    }
}

impl Encrypter for HmacEncrypter {
    async fn encrypt(&self, id: &AccountId) -> AccountResult<AccessToken> {
        let nonce = random_bytes(TOKEN_NONCE_LEN);
        let payload = format!("{}:{}", id, to_base64_url(&nonce));
        let signature = hmac_sha256(&self.secret, payload.as_bytes());

        Ok(AccessToken::new(format!(
            "{}.{}",
            to_base64_url(payload.as_bytes()),
            to_base64_url(&signature)
        )))
    }
}
