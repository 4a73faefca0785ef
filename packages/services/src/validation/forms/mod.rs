mod catering_validator;
mod contact_validator;

pub use catering_validator::validate_catering_form;
pub use contact_validator::validate_contact_form;
