pub mod backup;
pub mod codec;
pub mod error;
pub mod paths;
pub mod storage;

pub use storage::Storage;

use phonebook_core::{Contact, ContactBook, ContactInput, ContactRef, CoreError, PendingDelete};
use std::path::Path;
use tracing::{error, warn};

/// The contact list of one running instance, saved in full after every
/// successful mutation.
///
/// Saves never fail a mutation: a failed save is logged and reported through
/// [`Store::has_unsaved_changes`] until a later save lands. A file that exists
/// but could not be loaded is moved aside before the first save replaces it.
pub struct Store {
    storage: Storage,
    book: ContactBook,
    unsaved: bool,
    unreadable: bool,
}

impl Store {
    pub fn open(path: &Path) -> Self {
        Self::with_storage(Storage::new(path))
    }

    pub fn with_storage(storage: Storage) -> Self {
        let mut store = Self {
            storage,
            book: ContactBook::new(),
            unsaved: false,
            unreadable: false,
        };
        store.reload();
        store
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn list_all(&self) -> &[Contact] {
        self.book.list_all()
    }

    pub fn get(&self, target: ContactRef) -> Result<&Contact, CoreError> {
        self.book.get(target)
    }

    pub fn resolve(&self, target: ContactRef) -> Result<usize, CoreError> {
        self.book.resolve(target)
    }

    pub fn search(&self, term: &str) -> Result<Vec<(usize, &Contact)>, CoreError> {
        self.book.search(term)
    }

    pub fn add(&mut self, input: ContactInput) -> Result<Contact, CoreError> {
        let contact = self.book.add(input)?.clone();
        self.persist();
        Ok(contact)
    }

    pub fn edit(&mut self, target: ContactRef, input: ContactInput) -> Result<Contact, CoreError> {
        let contact = self.book.edit(target, input)?.clone();
        self.persist();
        Ok(contact)
    }

    pub fn prepare_delete(&self, target: ContactRef) -> Result<PendingDelete, CoreError> {
        self.book.prepare_delete(target)
    }

    pub fn confirm_delete(&mut self, pending: PendingDelete) -> Result<Contact, CoreError> {
        let removed = self.book.confirm_delete(pending)?;
        self.persist();
        Ok(removed)
    }

    /// Writes the current list again, e.g. after an earlier save failed.
    pub fn save(&mut self) -> bool {
        self.persist();
        !self.unsaved
    }

    /// Replaces the in-memory list with whatever the file holds now.
    pub fn reload(&mut self) {
        let contacts = match self.storage.try_load() {
            Ok(contacts) => {
                self.unreadable = false;
                contacts
            }
            Err(err) => {
                error!(
                    path = %self.storage.path().display(),
                    error = %err,
                    "failed to load contacts, starting with an empty list"
                );
                self.unreadable = self.storage.path().exists();
                Vec::new()
            }
        };
        self.book = ContactBook::from_contacts(contacts);
        self.unsaved = false;
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn backup_to(&self, path: &Path) -> error::Result<()> {
        self.storage.backup_to(path)
    }

    fn persist(&mut self) {
        if self.unreadable {
            match self.storage.set_aside() {
                Ok(moved) => {
                    if let Some(moved) = moved {
                        warn!(
                            path = %self.storage.path().display(),
                            moved_to = %moved.display(),
                            "moved unreadable contacts file aside"
                        );
                    }
                    self.unreadable = false;
                }
                Err(err) => {
                    error!(
                        path = %self.storage.path().display(),
                        error = %err,
                        "could not move unreadable contacts file aside, not saving"
                    );
                    self.unsaved = true;
                    return;
                }
            }
        }
        self.unsaved = !self.storage.save(self.book.list_all());
    }
}
