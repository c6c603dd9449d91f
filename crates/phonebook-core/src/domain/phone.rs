use once_cell::sync::Lazy;
use regex::Regex;

static TEN_DIGITS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{3})([0-9]{3})([0-9]{4})").expect("valid ten digit pattern")
});

/// Removes whitespace, hyphens and parentheses, the separators people type
/// between digit groups.
pub fn strip_phone_separators(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !ch.is_whitespace() && !matches!(ch, '-' | '(' | ')'))
        .collect()
}

/// Formats a phone number for display as `(ddd) ddd-dddd`.
///
/// Everything except digits and `+` is dropped first. Values shorter than ten
/// characters after that are returned untouched; otherwise the first run of ten
/// digits is rewritten and any remaining characters are kept in place.
pub fn format_phone_number(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '+')
        .collect();
    if cleaned.len() < 10 {
        return value.to_string();
    }
    TEN_DIGITS.replacen(&cleaned, 1, "($1) $2-$3").into_owned()
}
