//! Field validation patterns and messages

use regex::Regex;
use std::sync::LazyLock;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PHONE_MESSAGE: &str = "Please enter a valid 10-digit phone number";
pub const PASSWORD_LENGTH_MESSAGE: &str = "Password must be at least 8 characters long";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";
pub const NAME_MESSAGE: &str = "Please enter a valid name";

/// Minimum password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Digits a phone number must strip down to
const PHONE_DIGITS: usize = 10;

// local@domain.tld, no whitespace and a single @.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("EMAIL_REGEX: invalid regex pattern")
});

// Letters including Latin-1 accented (U+00C0..=U+00FF), spaces, hyphens,
// apostrophes; at least two characters.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z\x{C0}-\x{FF}\s'-]{2,}$").expect("NAME_REGEX: invalid regex pattern")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Any formatting is accepted as long as exactly ten digits remain
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(|c| c.is_ascii_digit()).count() == PHONE_DIGITS
}

pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}
