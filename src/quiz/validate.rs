use once_cell::sync::Lazy;
use regex::Regex;

/// Number of digits in a full national phone number, country code included.
pub const PHONE_DIGITS: usize = 11;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Accepts any formatting as long as exactly eleven digits remain once
/// everything else is stripped.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(|c| c.is_ascii_digit()).count() == PHONE_DIGITS
}
