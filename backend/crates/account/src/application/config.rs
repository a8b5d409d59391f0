//! Application Configuration
//!
//! Secrets the account adapters are built from.

use platform::crypto::random_bytes;

/// Account application configuration
#[derive(Clone)]
pub struct AccountConfig {
    /// HMAC key for access tokens (32 bytes)
    pub token_secret: [u8; 32],
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AccountConfig {
    pub fn new(token_secret: [u8; 32], password_pepper: Option<Vec<u8>>) -> Self {
        Self {
            token_secret,
            password_pepper,
        }
    }

    /// Create config with a random token secret (for development)
    ///
    /// Tokens issued before a restart are signed with a secret nobody holds anymore.
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&random_bytes(32));
        Self::new(secret, None)
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("token_secret", &"[REDACTED]")
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_differs() {
        let a = AccountConfig::with_random_secret();
        let b = AccountConfig::with_random_secret();
        assert_ne!(a.token_secret, b.token_secret);
        assert!(a.pepper().is_none());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AccountConfig::new([1u8; 32], Some(b"pepper".to_vec()));
        let debug_output = format!("{:?}", config);
        assert_eq!(debug_output.matches("[REDACTED]").count(), 2);
        assert_eq!(config.pepper(), Some(&b"pepper"[..]));
    }
}
