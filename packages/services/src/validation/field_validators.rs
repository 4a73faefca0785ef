use super::form_input::{ValidationErrors, ValidationErrorsExt};
use super::rules::is_valid_email;
use crate::config::{MAX_GUESTS, MIN_MESSAGE_LEN, MIN_NAME_LEN, MIN_SUBJECT_LEN};

pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_name(name: &str, errors: &mut ValidationErrors) {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            errors.add_error("name", "Name is required");
            return;
        }

        if trimmed.chars().count() < MIN_NAME_LEN {
            errors.add_error("name", "Name must be at least 2 characters");
        }
    }

    pub fn validate_email(email: &str, errors: &mut ValidationErrors) {
        let trimmed = email.trim();
        if trimmed.is_empty() {
            errors.add_error("email", "Email is required");
            return;
        }

        if !is_valid_email(trimmed) {
            errors.add_error("email", "Please enter a valid email address");
        }
    }

    pub fn validate_subject(subject: &str, errors: &mut ValidationErrors) {
        let trimmed = subject.trim();
        if trimmed.is_empty() {
            errors.add_error("subject", "Subject is required");
            return;
        }

        if trimmed.chars().count() < MIN_SUBJECT_LEN {
            errors.add_error("subject", "Subject must be at least 3 characters");
        }
    }

    pub fn validate_event_type(event_type: &str, errors: &mut ValidationErrors) {
        if event_type.trim().is_empty() {
            errors.add_error("event_type", "Event type is required");
        }
    }

    pub fn validate_event_date(event_date: &str, errors: &mut ValidationErrors) {
        if event_date.trim().is_empty() {
            errors.add_error("event_date", "Event date is required");
        }
    }

    pub fn validate_guests(guests: &str, errors: &mut ValidationErrors) {
        let trimmed = guests.trim();
        if trimmed.is_empty() {
            errors.add_error("guests", "Number of guests is required");
            return;
        }

        match trimmed.parse::<i64>() {
            Ok(count) if count >= 1 && count <= i64::from(MAX_GUESTS) => {}
            Ok(count) if count > i64::from(MAX_GUESTS) => {
                errors.add_error("guests", "Please contact us directly for large events");
            }
            _ => errors.add_error("guests", "Please enter a valid number of guests"),
        }
    }

    pub fn validate_message(message: &str, errors: &mut ValidationErrors) {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            errors.add_error("message", "Message is required");
            return;
        }

        if trimmed.chars().count() < MIN_MESSAGE_LEN {
            errors.add_error("message", "Message must be at least 10 characters");
        }
    }
}
