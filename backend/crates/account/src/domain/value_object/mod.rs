//! Value Object Module

pub mod access_token;
pub mod email;

pub use kernel::id::AccountId;
