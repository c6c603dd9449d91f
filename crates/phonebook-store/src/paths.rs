use crate::error::{Result, StoreError};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "phonebook";
const CONTACTS_FILENAME: &str = "contacts.jsonl";

pub(crate) const PRIVATE_DIR_MODE: u32 = 0o700;
pub(crate) const PRIVATE_FILE_MODE: u32 = 0o600;

/// `$XDG_DATA_HOME/phonebook/contacts.jsonl` when that variable holds an
/// absolute path, otherwise the same file under the platform data directory.
pub fn default_contacts_path() -> Result<PathBuf> {
    let base = env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .filter(|dir| dir.is_absolute())
        .or_else(dirs::data_dir)
        .ok_or(StoreError::MissingDataDir)?;
    Ok(base.join(APP_DIR).join(CONTACTS_FILENAME))
}

/// An explicit path wins over the default location.
pub fn resolve_contacts_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) if path.as_os_str().is_empty() => Err(StoreError::InvalidDataPath(path)),
        Some(path) => Ok(path),
        None => default_contacts_path(),
    }
}

/// Creates the directories leading up to `path`. Directories created here are
/// private to the user; existing ones are left alone.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) else {
        return Ok(());
    };
    if !parent.exists() {
        fs::create_dir_all(parent)?;
        set_mode(parent, PRIVATE_DIR_MODE)?;
    }
    Ok(())
}

pub(crate) fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    let _ = (path, mode);
    Ok(())
}
