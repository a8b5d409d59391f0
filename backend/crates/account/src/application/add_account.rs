//! Add Account Use Case
//!
//! Hashes the password and persists a new account.

use std::sync::Arc;

use crate::domain::cryptography::Hasher;
use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::AddAccountRepository;
use crate::domain::usecase::{AddAccount, AddAccountParams};
use crate::error::AccountResult;

/// Add account use case
///
/// Errors from either collaborator propagate unchanged.
pub struct AddAccountUseCase<H, R>
where
    H: Hasher,
    R: AddAccountRepository,
{
    hasher: Arc<H>,
    add_account_repo: Arc<R>,
}

impl<H, R> AddAccountUseCase<H, R>
where
    H: Hasher,
    R: AddAccountRepository,
{
    pub fn new(hasher: Arc<H>, add_account_repo: Arc<R>) -> Self {
        Self {
            hasher,
            add_account_repo,
        }
    }
}

impl<H, R> AddAccount for AddAccountUseCase<H, R>
where
    H: Hasher + Sync,
    R: AddAccountRepository + Sync,
{
    async fn add(&self, params: AddAccountParams) -> AccountResult<Account> {
        let password_hash = self.hasher.hash(&params.password).await?;

        let account = self
            .add_account_repo
            .add(&NewAccount {
                name: params.name,
                email: params.email,
                password_hash,
            })
            .await?;

        tracing::info!(account_id = %account.id, "Account created");

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn params() -> AddAccountParams {
        AddAccountParams {
            name: "valid_name".to_string(),
            email: any_email(),
            password: "valid_password".to_string(),
        }
    }

    fn sut(
        hasher: HasherSpy,
        repo: AccountRepositorySpy,
    ) -> (
        AddAccountUseCase<HasherSpy, AccountRepositorySpy>,
        Arc<HasherSpy>,
        Arc<AccountRepositorySpy>,
    ) {
        let hasher = Arc::new(hasher);
        let repo = Arc::new(repo);
        (
            AddAccountUseCase::new(hasher.clone(), repo.clone()),
            hasher,
            repo,
        )
    }

    #[tokio::test]
    async fn test_calls_hasher_with_password() {
        let (sut, hasher, _) = sut(HasherSpy::default(), AccountRepositorySpy::default());

        sut.add(params()).await.unwrap();

        assert_eq!(*hasher.calls.lock().unwrap(), vec!["valid_password".to_string()]);
    }

    #[tokio::test]
    async fn test_persists_hash_instead_of_plaintext() {
        let (sut, _, repo) = sut(HasherSpy::default(), AccountRepositorySpy::default());

        sut.add(params()).await.unwrap();

        let added = repo.added.lock().unwrap();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].name, "valid_name");
        assert_eq!(added[0].email, any_email());
        assert_eq!(added[0].password_hash, "hashed_password");
    }

    #[tokio::test]
    async fn test_hasher_failure_propagates_without_persisting() {
        let (sut, _, repo) = sut(HasherSpy::failing(), AccountRepositorySpy::default());

        let result = sut.add(params()).await;

        assert!(matches!(result, Err(crate::error::AccountError::Internal(_))));
        assert!(repo.added.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let repo = AccountRepositorySpy {
            fail_add: true,
            ..Default::default()
        };
        let (sut, _, _) = sut(HasherSpy::default(), repo);

        assert!(sut.add(params()).await.is_err());
    }

    #[tokio::test]
    async fn test_returns_persisted_account() {
        let (sut, _, _) = sut(HasherSpy::default(), AccountRepositorySpy::default());

        let account = sut.add(params()).await.unwrap();

        assert_eq!(account.id, any_id());
        assert_eq!(account.name, "valid_name");
        assert_eq!(account.password_hash, "hashed_password");
        assert!(account.access_token.is_none());
    }
}
