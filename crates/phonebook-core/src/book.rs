//! The in-memory contact list and the operations callers run against it.
//!
//! Nothing here touches the disk; the store crate wraps a [`ContactBook`] and
//! saves after each successful mutation.

use crate::domain::{Contact, ContactId, ContactInput};
use crate::error::CoreError;
use std::fmt;
use std::str::FromStr;

/// Points at one contact, either by its position in the list or by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRef {
    Index(usize),
    Id(ContactId),
}

impl fmt::Display for ContactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactRef::Index(index) => write!(f, "index {}", index),
            ContactRef::Id(id) => write!(f, "id {}", id),
        }
    }
}

impl From<usize> for ContactRef {
    fn from(index: usize) -> Self {
        ContactRef::Index(index)
    }
}

impl From<ContactId> for ContactRef {
    fn from(id: ContactId) -> Self {
        ContactRef::Id(id)
    }
}

impl FromStr for ContactRef {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit()) {
            // Too large for usize means past the end of any list.
            return Ok(ContactRef::Index(trimmed.parse().unwrap_or(usize::MAX)));
        }
        Ok(ContactRef::Id(ContactId::from_str(trimmed)?))
    }
}

/// First half of a delete: names the contact so the caller can confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: ContactId,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn list_all(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn resolve(&self, target: ContactRef) -> Result<usize, CoreError> {
        let found = match target {
            ContactRef::Index(index) => (index < self.contacts.len()).then_some(index),
            ContactRef::Id(id) => self.contacts.iter().position(|contact| contact.id == id),
        };
        found.ok_or_else(|| CoreError::NotFound(target.to_string()))
    }

    pub fn get(&self, target: ContactRef) -> Result<&Contact, CoreError> {
        let index = self.resolve(target)?;
        Ok(&self.contacts[index])
    }

    pub fn add(&mut self, input: ContactInput) -> Result<&Contact, CoreError> {
        let input = input.validate()?;
        self.ensure_unique_name(&input.name, None)?;
        self.contacts
            .push(Contact::from_input(ContactId::new(), input));
        let index = self.contacts.len() - 1;
        Ok(&self.contacts[index])
    }

    pub fn edit(&mut self, target: ContactRef, input: ContactInput) -> Result<&Contact, CoreError> {
        let index = self.resolve(target)?;
        let input = input.validate()?;
        self.ensure_unique_name(&input.name, Some(index))?;
        let contact = &mut self.contacts[index];
        contact.apply(input);
        Ok(contact)
    }

    pub fn prepare_delete(&self, target: ContactRef) -> Result<PendingDelete, CoreError> {
        let contact = self.get(target)?;
        Ok(PendingDelete {
            id: contact.id,
            name: contact.name.clone(),
        })
    }

    pub fn confirm_delete(&mut self, pending: PendingDelete) -> Result<Contact, CoreError> {
        let index = self.resolve(ContactRef::Id(pending.id))?;
        Ok(self.contacts.remove(index))
    }

    /// Case-insensitive substring match on names, in list order.
    pub fn search(&self, term: &str) -> Result<Vec<(usize, &Contact)>, CoreError> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Err(CoreError::EmptySearchTerm);
        }
        Ok(self
            .contacts
            .iter()
            .enumerate()
            .filter(|(_, contact)| contact.name.to_lowercase().contains(&needle))
            .collect())
    }

    fn ensure_unique_name(&self, name: &str, skip: Option<usize>) -> Result<(), CoreError> {
        let taken = self
            .contacts
            .iter()
            .enumerate()
            .any(|(index, contact)| Some(index) != skip && contact.has_name(name));
        if taken {
            return Err(CoreError::DuplicateName(name.to_string()));
        }
        Ok(())
    }
}
