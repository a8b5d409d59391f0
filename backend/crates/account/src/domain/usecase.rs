//! Use Case Ports
//!
//! What the controllers call. `application/` provides the implementations.

use crate::domain::entity::account::Account;
use crate::domain::value_object::{access_token::AccessToken, email::Email};
use crate::error::AccountResult;

/// Sign-up data after validation
#[derive(Clone)]
pub struct AddAccountParams {
    pub name: String,
    pub email: Email,
    pub password: String,
}

/// Credentials; never persisted
#[derive(Clone)]
pub struct AuthenticationParams {
    pub email: Email,
    pub password: String,
}

#[trait_variant::make(AddAccount: Send)]
pub trait LocalAddAccount {
    async fn add(&self, params: AddAccountParams) -> AccountResult<Account>;
}

#[trait_variant::make(Authentication: Send)]
pub trait LocalAuthentication {
    /// `Ok(None)` for unknown email or wrong password
    async fn auth(&self, params: AuthenticationParams) -> AccountResult<Option<AccessToken>>;
}
