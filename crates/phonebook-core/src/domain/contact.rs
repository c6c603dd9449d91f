use crate::domain::ids::ContactId;
use crate::error::CoreError;
use crate::rules::validation::{is_valid_email, is_valid_name, is_valid_phone};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    /// Builds a contact from input that already passed [`ContactInput::validate`].
    pub fn from_input(id: ContactId, input: ContactInput) -> Self {
        Self {
            id,
            name: input.name,
            phone: input.phone,
            email: input.email,
        }
    }

    pub fn apply(&mut self, input: ContactInput) {
        self.name = input.name;
        self.phone = input.phone;
        self.email = input.email;
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.name, self.phone, self.email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Phone,
    Email,
}

impl ContactField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            ContactField::Name => "expected at least 2 characters",
            ContactField::Phone => {
                "expected an optional leading + followed by 8 to 16 digits, the first not 0"
            }
            ContactField::Email => "expected an address shaped like local@domain.tld",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactInput {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Trims every field and checks name, phone, then email, reporting the
    /// first field that fails.
    pub fn validate(self) -> Result<Self, CoreError> {
        let input = Self {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
        };

        if !is_valid_name(&input.name) {
            return Err(CoreError::InvalidField(ContactField::Name));
        }
        if !is_valid_phone(&input.phone) {
            return Err(CoreError::InvalidField(ContactField::Phone));
        }
        if !is_valid_email(&input.email) {
            return Err(CoreError::InvalidField(ContactField::Email));
        }

        Ok(input)
    }
}
