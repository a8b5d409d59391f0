//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations, free of any domain vocabulary:
//! - Password hashing (Argon2id, optional pepper, zeroized clear text)
//! - Cryptographic utilities (HMAC-SHA256, secure random bytes, Base64)

pub mod crypto;
pub mod password;
