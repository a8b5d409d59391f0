//! Field Validators

use std::sync::Arc;

use serde_json::Value;

use super::{Validation, ValidationError};
use crate::domain::value_object::email::Email;

/// Rejects a field that is absent, `null`, `false`, zero or an empty string
pub struct RequiredFieldValidation {
    field: String,
}

impl RequiredFieldValidation {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl Validation for RequiredFieldValidation {
    fn validate(&self, input: &Value) -> Option<ValidationError> {
        let present = match input.get(&self.field) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64() != Some(0.0),
            Some(_) => true,
        };
        (!present).then(|| ValidationError::missing_param(&self.field))
    }
}

/// Requires two fields to hold the same value (password confirmation)
pub struct CompareFieldsValidation {
    field: String,
    field_to_compare: String,
}

impl CompareFieldsValidation {
    pub fn new(field: impl Into<String>, field_to_compare: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            field_to_compare: field_to_compare.into(),
        }
    }
}

impl Validation for CompareFieldsValidation {
    fn validate(&self, input: &Value) -> Option<ValidationError> {
        (input.get(&self.field) != input.get(&self.field_to_compare))
            .then(|| ValidationError::invalid_param(&self.field_to_compare))
    }
}

/// Decides whether a string is an acceptable email address
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> bool;
}

/// `EmailValidator` backed by the `Email` value object's format rules
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailFormatValidator;

impl EmailValidator for EmailFormatValidator {
    fn is_valid(&self, email: &str) -> bool {
        Email::new(email).is_ok()
    }
}

/// Rejects a field that is not a string accepted by the `EmailValidator`
pub struct EmailValidation<V: EmailValidator> {
    field: String,
    email_validator: Arc<V>,
}

impl<V: EmailValidator> EmailValidation<V> {
    pub fn new(field: impl Into<String>, email_validator: Arc<V>) -> Self {
        Self {
            field: field.into(),
            email_validator,
        }
    }
}

impl<V: EmailValidator> Validation for EmailValidation<V> {
    fn validate(&self, input: &Value) -> Option<ValidationError> {
        let valid = input
            .get(&self.field)
            .and_then(Value::as_str)
            .is_some_and(|email| self.email_validator.is_valid(email));
        (!valid).then(|| ValidationError::invalid_param(&self.field))
    }
}
