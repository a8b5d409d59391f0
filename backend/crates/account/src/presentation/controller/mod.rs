//! Controllers

pub mod login;
pub mod sign_up;

pub use login::LoginController;
pub use sign_up::SignUpController;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::value_object::email::Email;
use crate::error::AccountError;
use crate::presentation::helpers::server_error;
use crate::presentation::protocols::HttpResponse;
use crate::presentation::validation::ValidationError;

/// Decode a validated body into a request DTO
fn decode_body<T: DeserializeOwned>(body: Value) -> Result<T, ValidationError> {
    serde_json::from_value(body).map_err(|err| {
        tracing::debug!(error = %err, "Validated body does not match request shape");
        ValidationError::invalid_param("body")
    })
}

fn parse_email(email: &str) -> Result<Email, ValidationError> {
    Email::new(email).map_err(|_| ValidationError::invalid_param("email"))
}

fn failure(err: &AccountError) -> HttpResponse {
    tracing::error!(error = %err, kind = %err.kind(), "Request failed");
    server_error(err)
}
