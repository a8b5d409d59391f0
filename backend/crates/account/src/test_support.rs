//! Test doubles
//!
//! Alternate implementations of the capability traits that record their
//! calls and answer with canned values.

use std::sync::Mutex;

use uuid::Uuid;

use crate::domain::cryptography::{Encrypter, HashComparer, Hasher};
use crate::domain::entity::account::{Account, NewAccount};
use crate::domain::repository::{
    AddAccountRepository, LoadAccountByEmailRepository, LogErrorRepository,
    UpdateAccessTokenRepository,
};
use crate::domain::usecase::{AddAccount, AddAccountParams, Authentication, AuthenticationParams};
use crate::domain::value_object::{AccountId, access_token::AccessToken, email::Email};
use crate::error::{AccountError, AccountResult};
use crate::presentation::protocols::{Controller, HttpRequest, HttpResponse};
use crate::presentation::validation::{Validation, ValidationError};

pub const ANY_ID: Uuid = Uuid::from_u128(0x0a11_0000_0000_4000_8000_0000_0000_0001);

pub fn any_id() -> AccountId {
    AccountId::from_uuid(ANY_ID)
}

pub fn any_email() -> Email {
    Email::new("any_email@email.com").unwrap()
}

pub fn fake_account() -> Account {
    Account {
        id: any_id(),
        name: "any_name".to_string(),
        email: any_email(),
        password_hash: "hashed_password".to_string(),
        access_token: None,
    }
}

fn failure(what: &str) -> AccountError {
    AccountError::Internal(format!("{} failed", what))
}

// ============================================================================
// Cryptography
// ============================================================================

#[derive(Default)]
pub struct HasherSpy {
    pub calls: Mutex<Vec<String>>,
    pub fail: bool,
}

impl HasherSpy {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

impl Hasher for HasherSpy {
    async fn hash(&self, plaintext: &str) -> AccountResult<String> {
        self.calls.lock().unwrap().push(plaintext.to_string());
        if self.fail {
            return Err(failure("hasher"));
        }
        Ok("hashed_password".to_string())
    }
}

pub struct HashComparerSpy {
    pub calls: Mutex<Vec<(String, String)>>,
    pub matches: bool,
    pub fail: bool,
}

impl HashComparerSpy {
    pub fn matching() -> Self {
        Self {
            calls: Mutex::default(),
            matches: true,
            fail: false,
        }
    }

    pub fn mismatching() -> Self {
        Self {
            matches: false,
            ..Self::matching()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::matching()
        }
    }
}

impl HashComparer for HashComparerSpy {
    async fn compare(&self, plaintext: &str, hash: &str) -> AccountResult<bool> {
        self.calls
            .lock()
            .unwrap()
            .push((plaintext.to_string(), hash.to_string()));
        if self.fail {
            return Err(failure("hash comparer"));
        }
        Ok(self.matches)
    }
}

#[derive(Default)]
pub struct EncrypterSpy {
    pub calls: Mutex<Vec<AccountId>>,
    pub fail: bool,
}

impl EncrypterSpy {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }
}

impl Encrypter for EncrypterSpy {
    async fn encrypt(&self, id: &AccountId) -> AccountResult<AccessToken> {
        self.calls.lock().unwrap().push(*id);
        if self.fail {
            return Err(failure("encrypter"));
        }
        Ok(AccessToken::new("any_token"))
    }
}

// ============================================================================
// Repositories
// ============================================================================

/// In-memory account repository playing all three account roles
#[derive(Default)]
pub struct AccountRepositorySpy {
    pub added: Mutex<Vec<NewAccount>>,
    pub loaded: Mutex<Vec<Email>>,
    pub updated: Mutex<Vec<(AccountId, AccessToken)>>,
    /// Account returned by `load_by_email`
    pub stored: Option<Account>,
    pub fail_add: bool,
    pub fail_load: bool,
    pub fail_update: bool,
}

impl AccountRepositorySpy {
    pub fn with_account(account: Account) -> Self {
        Self {
            stored: Some(account),
            ..Default::default()
        }
    }
}

impl AddAccountRepository for AccountRepositorySpy {
    async fn add(&self, account: &NewAccount) -> AccountResult<Account> {
        self.added.lock().unwrap().push(account.clone());
        if self.fail_add {
            return Err(failure("add account repository"));
        }
        Ok(account.clone().into_account(any_id()))
    }
}

impl LoadAccountByEmailRepository for AccountRepositorySpy {
    async fn load_by_email(&self, email: &Email) -> AccountResult<Option<Account>> {
        self.loaded.lock().unwrap().push(email.clone());
        if self.fail_load {
            return Err(failure("load account repository"));
        }
        Ok(self.stored.clone())
    }
}

impl UpdateAccessTokenRepository for AccountRepositorySpy {
    async fn update_access_token(&self, id: &AccountId, token: &AccessToken) -> AccountResult<()> {
        self.updated.lock().unwrap().push((*id, token.clone()));
        // Same error the Postgres adapter reports when no row took the token
        if self.fail_update {
            return Err(AccountError::Database(sqlx::Error::RowNotFound));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct LogErrorRepositorySpy {
    pub stacks: Mutex<Vec<String>>,
    pub fail: bool,
}

impl LogErrorRepository for LogErrorRepositorySpy {
    async fn log_error(&self, stack: &str) -> AccountResult<()> {
        self.stacks.lock().unwrap().push(stack.to_string());
        if self.fail {
            return Err(failure("log error repository"));
        }
        Ok(())
    }
}

// ============================================================================
// Use cases
// ============================================================================

/// What a use case stub answers with
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Empty,
    Failure,
}

pub struct AddAccountStub {
    pub calls: Mutex<Vec<(String, Email, String)>>,
    pub outcome: Outcome,
}

impl AddAccountStub {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            calls: Mutex::default(),
            outcome,
        }
    }
}

impl AddAccount for AddAccountStub {
    async fn add(&self, params: AddAccountParams) -> AccountResult<Account> {
        self.calls.lock().unwrap().push((
            params.name.clone(),
            params.email.clone(),
            params.password.clone(),
        ));
        match self.outcome {
            Outcome::Failure => Err(failure("add account")),
            _ => Ok(Account {
                id: any_id(),
                name: params.name,
                email: params.email,
                password_hash: "hashed_password".to_string(),
                access_token: None,
            }),
        }
    }
}

pub struct AuthenticationStub {
    pub calls: Mutex<Vec<(Email, String)>>,
    pub outcome: Outcome,
}

impl AuthenticationStub {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            calls: Mutex::default(),
            outcome,
        }
    }
}

impl Authentication for AuthenticationStub {
    async fn auth(&self, params: AuthenticationParams) -> AccountResult<Option<AccessToken>> {
        self.calls
            .lock()
            .unwrap()
            .push((params.email, params.password));
        match self.outcome {
            Outcome::Success => Ok(Some(AccessToken::new("any_token"))),
            Outcome::Empty => Ok(None),
            Outcome::Failure => Err(failure("authentication")),
        }
    }
}

// ============================================================================
// Presentation
// ============================================================================

/// Validation returning a fixed answer and recording its inputs
#[derive(Default)]
pub struct ValidationSpy {
    pub inputs: Mutex<Vec<serde_json::Value>>,
    pub error: Option<ValidationError>,
}

impl ValidationSpy {
    pub fn rejecting(error: ValidationError) -> Self {
        Self {
            error: Some(error),
            ..Default::default()
        }
    }
}

impl Validation for ValidationSpy {
    fn validate(&self, input: &serde_json::Value) -> Option<ValidationError> {
        self.inputs.lock().unwrap().push(input.clone());
        self.error.clone()
    }
}

/// Controller answering with a prepared response
pub struct ControllerStub {
    pub requests: Mutex<Vec<serde_json::Value>>,
    pub response: fn() -> HttpResponse,
}

impl ControllerStub {
    pub fn new(response: fn() -> HttpResponse) -> Self {
        Self {
            requests: Mutex::default(),
            response,
        }
    }
}

impl Controller for ControllerStub {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        self.requests.lock().unwrap().push(request.body);
        (self.response)()
    }
}
