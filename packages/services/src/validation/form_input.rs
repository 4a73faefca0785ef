use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A mapping of field names to their validation error message.
///
/// A key is present iff that field currently fails its rule; each field
/// carries at most one message (the first rule it broke).
pub type ValidationErrors = HashMap<String, String>;

// Helper trait for recording validation errors
pub trait ValidationErrorsExt {
    fn add_error(&mut self, field: &str, message: &str);
}

impl ValidationErrorsExt for ValidationErrors {
    fn add_error(&mut self, field: &str, message: &str) {
        // First failing rule wins
        self.entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }
}

/// Outcome of validating a whole form; produced fresh on every pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: ValidationErrors,
}

impl ValidationResult {
    pub fn from_errors(errors: ValidationErrors) -> Self {
        ValidationResult {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Trait for form shapes the submission state machine can drive.
///
/// `Default` is the empty just-mounted form, which is also what a form is
/// reset to after a successful submission.
pub trait FormInput: Clone + Default + Send + Sync + 'static {
    /// Validate every field and return the aggregate result.
    fn validate(&self) -> ValidationResult;

    /// A copy with every field passed through the sanitizer; this is the
    /// payload handed to the submit handler, never the stored form data.
    fn sanitized(&self) -> Self;

    /// Update one field by its name, as bound by the input widgets.
    /// Returns false if the shape has no such field.
    fn set_field(&mut self, field: &str, value: &str) -> bool;

    fn is_valid(&self) -> bool {
        self.validate().is_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_tracks_error_map() {
        let result = ValidationResult::from_errors(ValidationErrors::new());
        assert!(result.is_valid);

        let mut errors = ValidationErrors::new();
        errors.add_error("email", "Email is required");
        let result = ValidationResult::from_errors(errors);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let mut errors = ValidationErrors::new();
        errors.add_error("name", "Name is required");
        errors.add_error("name", "Name must be at least 2 characters");
        assert_eq!(errors.get("name").unwrap(), "Name is required");
    }

    #[test]
    fn test_result_serializes_for_the_ui() {
        let mut errors = ValidationErrors::new();
        errors.add_error("guests", "Number of guests is required");
        let result = ValidationResult::from_errors(errors);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["errors"]["guests"], "Number of guests is required");
    }
}
