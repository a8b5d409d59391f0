//! Request Validation
//!
//! Field validators run fail-fast over the raw JSON body before any use case
//! is reached. Validators return errors; they never panic or throw.

pub mod composite;
pub mod validators;

use serde_json::Value;
use thiserror::Error;

pub use composite::ValidationComposite;
pub use validators::{
    CompareFieldsValidation, EmailFormatValidator, EmailValidation, EmailValidator,
    RequiredFieldValidation,
};

/// What went wrong with a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    MissingParam,
    InvalidParam,
}

impl ValidationErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorKind::MissingParam => "Missing param",
            ValidationErrorKind::InvalidParam => "Invalid param",
        }
    }
}

/// Field-scoped validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}: {}", .kind.as_str(), .field)]
pub struct ValidationError {
    pub field: String,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn missing_param(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ValidationErrorKind::MissingParam,
        }
    }

    pub fn invalid_param(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind: ValidationErrorKind::InvalidParam,
        }
    }
}

/// A single validation rule over the request body
pub trait Validation: Send + Sync {
    fn validate(&self, input: &Value) -> Option<ValidationError>;
}
