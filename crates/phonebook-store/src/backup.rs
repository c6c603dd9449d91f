use crate::codec;
use crate::error::{Result, StoreError};
use crate::paths;
use crate::storage::{staging_path, Storage};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Copies the contacts file to `target`. A store with no file yet is backed
/// up as an empty list. The contacts file and its staging file are refused
/// as targets.
pub fn backup_to(storage: &Storage, target: &Path) -> Result<()> {
    let source = storage.path();
    if same_location(target, source) || same_location(target, &staging_path(source)?) {
        return Err(StoreError::InvalidBackupPath(target.to_path_buf()));
    }

    paths::ensure_parent_dir(target)?;
    match fs::copy(source, target) {
        Ok(_) => {}
        Err(err) if err.kind() == ErrorKind::NotFound && !source.exists() => {
            fs::write(target, codec::encode(&[])?)?;
        }
        Err(err) => return Err(err.into()),
    }
    paths::set_mode(target, paths::PRIVATE_FILE_MODE)?;
    Ok(())
}

fn same_location(a: &Path, b: &Path) -> bool {
    match (resolved(a), resolved(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Absolute path with symlinks resolved. A file that does not exist yet is
/// resolved through its parent; `None` when the parent is missing too.
fn resolved(path: &Path) -> Option<PathBuf> {
    if let Ok(full) = fs::canonicalize(path) {
        return Some(full);
    }
    let name = path.file_name()?;
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::canonicalize(parent).ok().map(|dir| dir.join(name))
}
