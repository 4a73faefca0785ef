use models::CateringFormData;

use crate::validation::field_validators::FieldValidator;
use crate::validation::form_input::{FormInput, ValidationErrors, ValidationResult};
use crate::validation::sanitizer::sanitize;

/// Runs every catering-form field rule and collects the failures.
pub fn validate_catering_form(data: &CateringFormData) -> ValidationResult {
    let mut errors = ValidationErrors::new();

    FieldValidator::validate_name(&data.name, &mut errors);
    FieldValidator::validate_email(&data.email, &mut errors);
    FieldValidator::validate_event_type(&data.event_type, &mut errors);
    FieldValidator::validate_event_date(&data.event_date, &mut errors);
    FieldValidator::validate_guests(&data.guests, &mut errors);
    FieldValidator::validate_message(&data.message, &mut errors);

    ValidationResult::from_errors(errors)
}

impl FormInput for CateringFormData {
    fn validate(&self) -> ValidationResult {
        validate_catering_form(self)
    }

    fn sanitized(&self) -> Self {
        CateringFormData {
            name: sanitize(&self.name),
            email: sanitize(&self.email),
            event_type: sanitize(&self.event_type),
            event_date: sanitize(&self.event_date),
            guests: sanitize(&self.guests),
            message: sanitize(&self.message),
        }
    }

    fn set_field(&mut self, field: &str, value: &str) -> bool {
        let slot = match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            "event_type" => &mut self.event_type,
            "event_date" => &mut self.event_date,
            "guests" => &mut self.guests,
            "message" => &mut self.message,
            _ => return false,
        };
        *slot = value.to_string();
        true
    }
}
