use crate::domain::Contact;

pub const CSV_HEADER: &str = "Name,Phone,Email";

pub fn export_csv(contacts: &[Contact]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + contacts.len() * 48);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for contact in contacts {
        push_field(&mut out, &contact.name);
        out.push(',');
        push_field(&mut out, &contact.phone);
        out.push(',');
        push_field(&mut out, &contact.email);
        out.push('\n');
    }
    out
}

fn push_field(out: &mut String, value: &str) {
    if !value.contains(|ch: char| matches!(ch, ',' | '"' | '\r' | '\n')) {
        out.push_str(value);
        return;
    }
    out.push('"');
    for ch in value.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
}
