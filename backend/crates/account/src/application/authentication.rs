//! Authentication Use Case
//!
//! Verifies credentials and issues an access token.

use std::sync::Arc;

use crate::domain::cryptography::{Encrypter, HashComparer};
use crate::domain::repository::{LoadAccountByEmailRepository, UpdateAccessTokenRepository};
use crate::domain::usecase::{Authentication, AuthenticationParams};
use crate::domain::value_object::access_token::AccessToken;
use crate::error::AccountResult;

/// Authentication use case
///
/// Unknown email and wrong password both resolve to `Ok(None)`. The token is
/// persisted before it is returned, so no caller ever holds a token storage
/// does not know about.
pub struct AuthenticationUseCase<L, C, E, U>
where
    L: LoadAccountByEmailRepository,
    C: HashComparer,
    E: Encrypter,
    U: UpdateAccessTokenRepository,
{
    load_account_repo: Arc<L>,
    hash_comparer: Arc<C>,
    encrypter: Arc<E>,
    update_token_repo: Arc<U>,
}

impl<L, C, E, U> AuthenticationUseCase<L, C, E, U>
where
    L: LoadAccountByEmailRepository,
    C: HashComparer,
    E: Encrypter,
    U: UpdateAccessTokenRepository,
{
    pub fn new(
        load_account_repo: Arc<L>,
        hash_comparer: Arc<C>,
        encrypter: Arc<E>,
        update_token_repo: Arc<U>,
    ) -> Self {
        Self {
            load_account_repo,
            hash_comparer,
            encrypter,
            update_token_repo,
        }
    }
}

impl<L, C, E, U> Authentication for AuthenticationUseCase<L, C, E, U>
where
    L: LoadAccountByEmailRepository + Sync,
    C: HashComparer + Sync,
    E: Encrypter + Sync,
    U: UpdateAccessTokenRepository + Sync,
{
    async fn auth(&self, params: AuthenticationParams) -> AccountResult<Option<AccessToken>> {
        let Some(account) = self.load_account_repo.load_by_email(&params.email).await? else {
            tracing::debug!("Authentication rejected: unknown email");
            return Ok(None);
        };

        let password_valid = self
            .hash_comparer
            .compare(&params.password, &account.password_hash)
            .await?;

        if !password_valid {
            tracing::debug!(account_id = %account.id, "Authentication rejected: password mismatch");
            return Ok(None);
        }

        let access_token = self.encrypter.encrypt(&account.id).await?;

        self.update_token_repo
            .update_access_token(&account.id, &access_token)
            .await?;

        tracing::info!(account_id = %account.id, "Account authenticated");

        Ok(Some(access_token))
    }
}
