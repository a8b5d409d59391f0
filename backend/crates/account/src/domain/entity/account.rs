//! Account Entity

use crate::domain::value_object::{AccountId, access_token::AccessToken, email::Email};

/// Persisted account
///
/// `password_hash` is always the output of a `Hasher`, never clear text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Assigned by the repository on insert
    pub id: AccountId,
    pub name: String,
    /// Unique per account (enforced by storage)
    pub email: Email,
    pub password_hash: String,
    /// Last token issued by a successful authentication
    pub access_token: Option<AccessToken>,
}

/// Account data handed to storage before an id exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: Email,
    pub password_hash: String,
}

impl NewAccount {
    /// Attach the id storage assigned
    pub fn into_account(self, id: AccountId) -> Account {
        Account {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            access_token: None,
        }
    }
}
