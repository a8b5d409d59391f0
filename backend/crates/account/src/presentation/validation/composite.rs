//! Validation Composite

use serde_json::Value;

use super::{Validation, ValidationError};

/// Ordered validators, first error wins
///
/// The order is decided by whoever builds the composite.
pub struct ValidationComposite {
    validations: Vec<Box<dyn Validation>>,
}

impl ValidationComposite {
    pub fn new(validations: Vec<Box<dyn Validation>>) -> Self {
        Self { validations }
    }
}

impl Validation for ValidationComposite {
    fn validate(&self, input: &Value) -> Option<ValidationError> {
        self.validations
            .iter()
            .find_map(|validation| validation.validate(input))
    }
}
