use models::ContactFormData;

use crate::validation::field_validators::FieldValidator;
use crate::validation::form_input::{FormInput, ValidationErrors, ValidationResult};
use crate::validation::sanitizer::sanitize;

/// Runs every contact-form field rule and collects the failures. No
/// short-circuiting across fields; the input is not mutated (trimming happens
/// inside the field validators).
pub fn validate_contact_form(data: &ContactFormData) -> ValidationResult {
    let mut errors = ValidationErrors::new();

    FieldValidator::validate_name(&data.name, &mut errors);
    FieldValidator::validate_email(&data.email, &mut errors);
    FieldValidator::validate_subject(&data.subject, &mut errors);
    FieldValidator::validate_message(&data.message, &mut errors);

    ValidationResult::from_errors(errors)
}

impl FormInput for ContactFormData {
    fn validate(&self) -> ValidationResult {
        validate_contact_form(self)
    }

    fn sanitized(&self) -> Self {
        ContactFormData {
            name: sanitize(&self.name),
            email: sanitize(&self.email),
            subject: sanitize(&self.subject),
            message: sanitize(&self.message),
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "subject" => &mut self.subject,
            "message" => &mut self.message,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_contact() -> ContactFormData {
        ContactFormData {
            name: "Maria Rossi".to_string(),
            email: "maria@example.com".to_string(),
            subject: "Private dining".to_string(),
            message: "Do you host birthday dinners for twelve?".to_string(),
        }
    }

    #[test]
    fn test_valid_contact_form() {
        let result = validate_contact_form(&valid_contact());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_missing_field_reports_only_that_field() {
        let mut data = valid_contact();
        data.subject = String::new();

        let result = validate_contact_form(&data);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors.get("subject").unwrap(), "Subject is required");
    }

    #[test]
    fn test_multiple_failures_all_reported() {
        let data = ContactFormData {
            name: "M".to_string(),
            email: "not-an-email".to_string(),
            subject: String::new(),
            message: "short".to_string(),
        };

        let result = validate_contact_form(&data);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 4);
        assert_eq!(
            result.errors.get("name").unwrap(),
            "Name must be at least 2 characters"
        );
        assert_eq!(
            result.errors.get("email").unwrap(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let mut data = valid_contact();
        data.message = "   \n\t ".to_string();

        let result = validate_contact_form(&data);
        assert_eq!(result.errors.get("message").unwrap(), "Message is required");
        // Validation must not touch the stored value
        assert_eq!(data.message, "   \n\t ");
    }

    #[test]
    fn test_sanitized_copy() {
        let mut data = valid_contact();
        data.name = "  <b>Maria</b> ".to_string();

        let clean = data.sanitized();
        assert_eq!(clean.name, "bMaria/b");
        // Original untouched
        assert_eq!(data.name, "  <b>Maria</b> ");
    }

    #[test]
    fn test_set_field() {
        let mut data = ContactFormData::default();
        assert!(data.set_field("name", "Luca"));
        assert_eq!(data.name, "Luca");
        assert!(!data.set_field("guests", "4"));
    }
}
