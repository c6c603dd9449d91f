use crate::domain::ContactField;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid {}: {}", .0, .0.hint())]
    InvalidField(ContactField),
    #[error("a contact named {0:?} already exists")]
    DuplicateName(String),
    #[error("contact not found: {0}")]
    NotFound(String),
    #[error("search term cannot be empty")]
    EmptySearchTerm,
}
