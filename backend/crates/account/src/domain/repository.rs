//! Repository Traits
//!
//! Storage capabilities consumed by the use cases and the logging decorator.
//! Implementations live in the infrastructure layer.

use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::value_object::{AccountId, access_token::AccessToken, email::Email};
use crate::error::AccountResult;

/// Persists a new account
#[trait_variant::make(AddAccountRepository: Send)]
pub trait LocalAddAccountRepository {
    /// Insert the account; the repository assigns the id
    async fn add(&self, account: &NewAccount) -> AccountResult<Account>;
}

/// Looks an account up by email
#[trait_variant::make(LoadAccountByEmailRepository: Send)]
pub trait LocalLoadAccountByEmailRepository {
    /// `None` when no account owns the email
    async fn load_by_email(&self, email: &Email) -> AccountResult<Option<Account>>;
}

/// Attaches an access token to an account
#[trait_variant::make(UpdateAccessTokenRepository: Send)]
pub trait LocalUpdateAccessTokenRepository {
    async fn update_access_token(&self, id: &AccountId, token: &AccessToken) -> AccountResult<()>;
}

/// Persists the stack of a failed request
#[trait_variant::make(LogErrorRepository: Send)]
pub trait LocalLogErrorRepository {
    async fn log_error(&self, stack: &str) -> AccountResult<()>;
}
