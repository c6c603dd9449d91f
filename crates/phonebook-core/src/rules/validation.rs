use crate::domain::phone::strip_phone_separators;
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_NAME_CHARS: usize = 2;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{7,15}$").expect("valid phone pattern"));
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub fn is_valid_name(value: &str) -> bool {
    value.trim().chars().count() >= MIN_NAME_CHARS
}

pub fn is_valid_phone(value: &str) -> bool {
    if value.trim().is_empty() {
        return false;
    }
    PHONE_PATTERN.is_match(&strip_phone_separators(value))
}

pub fn is_valid_email(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    EMAIL_PATTERN.is_match(trimmed)
}
