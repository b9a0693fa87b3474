//! `isEmail`: address shape only, not whether the mailbox exists

use crate::check::{every_value, CheckInput, CheckResult};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9](([_.\-]*[a-zA-Z0-9]+)*)@([A-Za-z0-9]+)(([.\-]?[a-zA-Z0-9]+)*)\.([A-Za-z]{2,})$",
    )
    .expect("email pattern")
});

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn is_email(input: CheckInput<'_>) -> CheckResult {
    let message = input
        .options
        .message_or_else(|| "Must be a valid email address.".to_string());

    Ok(every_value(input.values, message, is_valid_email))
}
