use crate::error::invalid_input;
use anyhow::Result;
use phonebook_core::ContactRef;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

pub fn parse_contact_ref(raw: &str) -> Result<ContactRef> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("contact reference cannot be empty"));
    }
    ContactRef::from_str(trimmed)
        .map_err(|_| invalid_input(format!("expected a list index or contact id, got {trimmed:?}")))
}

/// Asks a yes/no question on stderr and reads the answer from stdin.
/// Anything other than `y` or `yes` counts as no, including end of input.
pub fn confirm(prompt: &str) -> Result<bool> {
    let mut stderr = io::stderr().lock();
    write!(stderr, "{prompt} [y/N] ")?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::{is_yes, parse_contact_ref};
    use phonebook_core::ContactRef;

    #[test]
    fn parse_contact_ref_accepts_index() {
        assert_eq!(parse_contact_ref("3").expect("index"), ContactRef::Index(3));
    }

    #[test]
    fn parse_contact_ref_rejects_names() {
        let err = parse_contact_ref("Alice").unwrap_err();
        assert!(err.to_string().contains("expected a list index or contact id"));
        assert!(parse_contact_ref("  ").is_err());
    }

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
    }
}
