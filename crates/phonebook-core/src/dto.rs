use crate::domain::{format_phone_number, Contact, ContactId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactListItemDto {
    pub index: usize,
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl ContactListItemDto {
    pub fn new(index: usize, contact: &Contact) -> Self {
        Self {
            index,
            id: contact.id,
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetailDto {
    pub index: usize,
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub phone_display: String,
    pub email: String,
}

impl ContactDetailDto {
    pub fn new(index: usize, contact: &Contact) -> Self {
        Self {
            index,
            id: contact.id,
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            phone_display: format_phone_number(&contact.phone),
            email: contact.email.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactListDto {
    pub total: usize,
    pub displayed: usize,
    pub contacts: Vec<ContactListItemDto>,
}
