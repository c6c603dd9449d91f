use crate::codec;
use crate::error::{Result, StoreError};
use crate::paths;
use phonebook_core::domain::Contact;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Whole-list persistence to a single contacts file.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every contact, or an empty list when the file is missing or
    /// cannot be decoded. Failures are logged, never returned.
    pub fn load(&self) -> Vec<Contact> {
        match self.try_load() {
            Ok(contacts) => contacts,
            Err(err) => {
                error!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to load contacts, starting with an empty list"
                );
                Vec::new()
            }
        }
    }

    pub fn try_load(&self) -> Result<Vec<Contact>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    path = %self.path.display(),
                    "no saved contacts found, starting with an empty list"
                );
                return Ok(Vec::new());
            }
            Err(err) => return Err(err.into()),
        };

        let decoded = codec::decode(&data)?;
        for warning in &decoded.warnings {
            warn!(path = %self.path.display(), "{}", warning);
        }
        debug!(
            path = %self.path.display(),
            count = decoded.contacts.len(),
            skipped = decoded.skipped,
            "contacts loaded"
        );
        Ok(decoded.contacts)
    }

    /// Overwrites the file with `contacts`. Returns whether the write landed;
    /// failures are logged and the previous file is left in place.
    pub fn save(&self, contacts: &[Contact]) -> bool {
        match self.try_save(contacts) {
            Ok(()) => {
                info!(
                    path = %self.path.display(),
                    count = contacts.len(),
                    "contacts saved"
                );
                true
            }
            Err(err) => {
                error!(
                    path = %self.path.display(),
                    error = %err,
                    "failed to save contacts"
                );
                false
            }
        }
    }

    pub fn try_save(&self, contacts: &[Contact]) -> Result<()> {
        let data = codec::encode(contacts)?;
        paths::ensure_parent_dir(&self.path)?;
        let staging = staging_path(&self.path)?;
        if let Err(err) = write_synced(&staging, data.as_bytes()) {
            let _ = fs::remove_file(&staging);
            return Err(err);
        }
        if let Err(err) = fs::rename(&staging, &self.path) {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }
        Ok(())
    }

    pub fn backup_to(&self, target: &Path) -> Result<()> {
        crate::backup::backup_to(self, target)
    }

    /// Renames the file to the first free `<name>.unreadable[.N]` sibling.
    /// Returns where it went, or `None` when there was no file.
    pub fn set_aside(&self) -> Result<Option<PathBuf>> {
        if fs::symlink_metadata(&self.path).is_err() {
            return Ok(None);
        }
        for attempt in 0u32.. {
            let suffix = match attempt {
                0 => ".unreadable".to_string(),
                n => format!(".unreadable.{n}"),
            };
            let target = sibling_path(&self.path, &suffix)?;
            if fs::symlink_metadata(&target).is_err() {
                fs::rename(&self.path, &target)?;
                return Ok(Some(target));
            }
        }
        Err(StoreError::InvalidDataPath(self.path.clone()))
    }
}

/// Sibling file a save is written to before it is renamed over the target.
pub(crate) fn staging_path(path: &Path) -> Result<PathBuf> {
    sibling_path(path, ".tmp")
}

fn sibling_path(path: &Path, suffix: &str) -> Result<PathBuf> {
    let mut name = path
        .file_name()
        .ok_or_else(|| StoreError::InvalidDataPath(path.to_path_buf()))?
        .to_os_string();
    name.push(suffix);
    Ok(path.with_file_name(name))
}

fn write_synced(path: &Path, data: &[u8]) -> Result<()> {
    let mut file = File::create(path)?;
    paths::set_mode(path, paths::PRIVATE_FILE_MODE)?;
    file.write_all(data)?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{staging_path, Storage};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    #[test]
    fn staging_path_appends_suffix() {
        let staging = staging_path(Path::new("/data/contacts.jsonl")).expect("staging");
        assert_eq!(staging, PathBuf::from("/data/contacts.jsonl.tmp"));
    }

    #[test]
    fn staging_path_requires_file_name() {
        assert!(staging_path(Path::new("/")).is_err());
    }

    #[test]
    fn try_save_leaves_no_staging_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("contacts.jsonl");
        let storage = Storage::new(&path);
        storage.try_save(&[]).expect("save");
        assert!(path.exists());
        assert!(!temp.path().join("contacts.jsonl.tmp").exists());
    }

    #[test]
    fn set_aside_picks_a_free_name() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("contacts.jsonl");
        let storage = Storage::new(&path);
        assert_eq!(storage.set_aside().expect("nothing to move"), None);

        std::fs::write(&path, "first").expect("write");
        let first = storage.set_aside().expect("set aside").expect("moved");
        assert_eq!(first, temp.path().join("contacts.jsonl.unreadable"));

        std::fs::write(&path, "second").expect("write");
        let second = storage.set_aside().expect("set aside").expect("moved");
        assert_eq!(second, temp.path().join("contacts.jsonl.unreadable.1"));
        assert!(!path.exists());
        assert_eq!(std::fs::read_to_string(first).expect("read"), "first");
    }

    #[cfg(unix)]
    #[test]
    fn try_save_restricts_permissions() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("contacts.jsonl");
        Storage::new(&path).try_save(&[]).expect("save");
        let mode = fs::metadata(&path).expect("metadata").permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
