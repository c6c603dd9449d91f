//! Line-delimited JSON encoding of the contact list.
//!
//! The first line is a header naming the format and version; every following
//! non-blank line holds one contact:
//!
//! ```text
//! {"format":"phonebook","version":1}
//! {"id":"…","name":"Alice Smith","phone":"+12025550123","email":"alice@example.com"}
//! ```

use crate::error::{Result, StoreError};
use phonebook_core::domain::{Contact, ContactId};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::str::FromStr;

pub const FORMAT_NAME: &str = "phonebook";
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct Header<'a> {
    format: &'a str,
    version: u32,
}

#[derive(Debug, Serialize)]
struct Record<'a> {
    id: &'a ContactId,
    name: &'a str,
    phone: &'a str,
    email: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub contacts: Vec<Contact>,
    pub warnings: Vec<String>,
    pub skipped: usize,
}

pub fn encode(contacts: &[Contact]) -> Result<String> {
    let mut out = serde_json::to_string(&Header {
        format: FORMAT_NAME,
        version: FORMAT_VERSION,
    })?;
    out.push('\n');
    for contact in contacts {
        let line = serde_json::to_string(&Record {
            id: &contact.id,
            name: &contact.name,
            phone: &contact.phone,
            email: &contact.email,
        })?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Parses a contacts file. Lines that are not JSON objects fail the whole
/// file; records missing a field are skipped with a warning.
pub fn decode(data: &str) -> Result<Decoded> {
    let mut decoded = Decoded::default();
    let mut seen_ids = HashSet::new();
    let mut expect_header = true;

    for (offset, raw) in data.lines().enumerate() {
        let line = offset + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let value: Value = serde_json::from_str(trimmed).map_err(|err| StoreError::Malformed {
            line,
            reason: err.to_string(),
        })?;
        let Value::Object(fields) = value else {
            return Err(StoreError::Malformed {
                line,
                reason: "expected a JSON object".to_string(),
            });
        };

        if std::mem::take(&mut expect_header) && fields.contains_key("format") {
            check_header(line, &fields)?;
            continue;
        }

        let Some(mut contact) = record_from_fields(line, &fields, &mut decoded.warnings) else {
            decoded.skipped += 1;
            continue;
        };
        if !seen_ids.insert(contact.id) {
            decoded
                .warnings
                .push(format!("line {line}: duplicate id {}; assigned a new id", contact.id));
            contact.id = fallback_id(line, &contact.name, &contact.phone, &contact.email);
            seen_ids.insert(contact.id);
        }
        decoded.contacts.push(contact);
    }

    Ok(decoded)
}

fn check_header(line: usize, fields: &Map<String, Value>) -> Result<()> {
    let format = fields
        .get("format")
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::Malformed {
            line,
            reason: "header format must be a string".to_string(),
        })?;
    if format != FORMAT_NAME {
        return Err(StoreError::UnsupportedFormat(format.to_string()));
    }

    let version = fields
        .get("version")
        .and_then(Value::as_u64)
        .ok_or_else(|| StoreError::Malformed {
            line,
            reason: "header version must be a non-negative integer".to_string(),
        })?;
    let version = u32::try_from(version).unwrap_or(u32::MAX);
    if version != FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion(version));
    }
    Ok(())
}

fn record_from_fields(
    line: usize,
    fields: &Map<String, Value>,
    warnings: &mut Vec<String>,
) -> Option<Contact> {
    let mut text = |key: &str| -> Option<String> {
        let value = fields.get(key).and_then(Value::as_str);
        if value.is_none() {
            warnings.push(format!("line {line}: record missing {key}; skipped"));
        }
        value.map(str::to_string)
    };
    let name = text("name")?;
    let phone = text("phone")?;
    let email = text("email")?;

    let id = match fields.get("id").and_then(Value::as_str) {
        Some(raw) => ContactId::from_str(raw).ok().or_else(|| {
            warnings.push(format!("line {line}: invalid id {raw:?}; assigned a new id"));
            None
        }),
        None => None,
    };
    let id = id.unwrap_or_else(|| fallback_id(line, &name, &phone, &email));
    Some(Contact {
        id,
        name,
        phone,
        email,
    })
}

/// Id for a record without a usable one, derived from its position and
/// fields so that decoding the same file twice agrees.
fn fallback_id(line: usize, name: &str, phone: &str, email: &str) -> ContactId {
    ContactId::derived(&format!("{line}\u{1f}{name}\u{1f}{phone}\u{1f}{email}"))
}
