//! Business-rule constants for the lead-capture forms.
//!
//! The bounds come from the site's booking policy (events above
//! [`MAX_GUESTS`] are quoted over the phone); they are plain constants so a
//! policy change is a one-line edit rather than a hunt through validators.

use std::time::Duration;

/// Minimum length of a visitor's name, in characters.
pub const MIN_NAME_LEN: usize = 2;

/// Minimum length of a contact subject line, in characters.
pub const MIN_SUBJECT_LEN: usize = 3;

/// Minimum length of the free-text message, in characters.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Largest party size the catering form accepts; bigger events go through
/// direct contact instead.
pub const MAX_GUESTS: u32 = 500;

/// Minimum digit count for a phone number to be considered plausible.
pub const MIN_PHONE_DIGITS: usize = 7;

/// How long a form stays in `Success` before returning to `Idle`.
pub const SUCCESS_RESET_DELAY: Duration = Duration::from_secs(5);

/// Error-map key used for submission failures, as opposed to field failures.
pub const SUBMIT_ERROR_FIELD: &str = "submit";

/// The generic message shown when the injected submit handler fails.
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to submit form. Please try again.";
