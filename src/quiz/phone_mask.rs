//! Live formatting for the lead phone field: `+7 (XXX) XXX-XX-XX`.

pub const PREFIX: &str = "+7 (";

/// Reformats whatever the user typed into the national pattern. A leading
/// `7` or `8` is taken as the country/trunk prefix and dropped, and at most
/// ten subscriber digits are kept.
pub fn format_phone(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.starts_with('7') || digits.starts_with('8') {
        digits.remove(0);
    }
    digits.truncate(10);

    let mut formatted = String::from(PREFIX);
    let len = digits.len();

    formatted.push_str(&digits[..len.min(3)]);
    if len > 3 {
        formatted.push_str(") ");
        formatted.push_str(&digits[3..len.min(6)]);
    }
    if len > 6 {
        formatted.push('-');
        formatted.push_str(&digits[6..len.min(8)]);
    }
    if len > 8 {
        formatted.push('-');
        formatted.push_str(&digits[8..]);
    }

    formatted
}

/// Backspace is swallowed once only the retained prefix is left.
pub fn blocks_backspace(current: &str, retained_prefix_len: usize) -> bool {
    current.chars().count() <= retained_prefix_len
}
