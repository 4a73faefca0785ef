use chrono::{Local, NaiveDate};

use crate::config::MIN_PHONE_DIGITS;

/// Checks that a string looks like `local@domain.tld`: no whitespace, exactly
/// one `@` with a non-empty local part, and a domain containing a dot with
/// characters on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || value.contains(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain needs a dot with something on each side
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Checks that a string is a plausible phone number: digits only, at least
/// [`MIN_PHONE_DIGITS`] of them.
pub fn is_valid_phone(value: &str) -> bool {
    value.len() >= MIN_PHONE_DIGITS && value.chars().all(|c| c.is_ascii_digit())
}

/// Parses an ISO `YYYY-MM-DD` date and returns true iff it is strictly after
/// the current local date. Unparseable input is never a future date.
pub fn is_future_date(value: &str) -> bool {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => date > Local::now().date_naive(),
        Err(_) => false,
    }
}
