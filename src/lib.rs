//! Form validation and submission core for the Tavola restaurant site.
//!
//! The site's lead-capture forms (contact and catering) share one pattern:
//! per-field validation producing inline error messages, and a small
//! submission state machine that drives each form instance through
//! Idle -> Loading -> Success/Error. This crate is that pattern, extracted
//! from the page components so the rules live in one place.
//!
//! The actual transport behind a submission is injected by the embedder as a
//! [`SubmitHandler`]; this crate performs no I/O of its own. Likewise, tracing
//! output goes wherever the embedder's subscriber sends it.

pub use models::{CateringFormData, ContactFormData};
pub use services::config;
pub use services::submission::{FormSession, FormStatus, SubmitError, SubmitHandler};
pub use services::validation::forms::{validate_catering_form, validate_contact_form};
pub use services::validation::rules::{is_future_date, is_valid_email, is_valid_phone};
pub use services::validation::sanitizer::sanitize;
pub use services::validation::{FormInput, ValidationErrors, ValidationResult};
