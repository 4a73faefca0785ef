pub mod field_validators;
pub mod form_input;
pub mod forms;
pub mod rules;
pub mod sanitizer;

// Re-export common types and functions
pub use field_validators::FieldValidator;
pub use form_input::{FormInput, ValidationErrors, ValidationErrorsExt, ValidationResult};
pub use forms::{validate_catering_form, validate_contact_form};
pub use sanitizer::sanitize;
