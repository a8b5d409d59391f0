//! Domain Layer
//!
//! Entities, value objects and the capability traits the use cases depend on.

pub mod cryptography;
pub mod entity;
pub mod repository;
pub mod usecase;
pub mod value_object;

// Re-exports
pub use cryptography::{Encrypter, HashComparer, Hasher};
pub use entity::account::{Account, NewAccount};
pub use repository::{
    AddAccountRepository, LoadAccountByEmailRepository, LogErrorRepository,
    UpdateAccessTokenRepository,
};
pub use usecase::{AddAccount, AddAccountParams, Authentication, AuthenticationParams};
pub use value_object::{access_token::AccessToken, email::Email};
