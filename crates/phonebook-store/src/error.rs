use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed contacts file at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("unsupported contacts file format: {0}")]
    UnsupportedFormat(String),
    #[error("unsupported contacts file version: {0}")]
    UnsupportedVersion(u32),
    #[error("no data directory available; pass --contacts-file")]
    MissingDataDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("invalid backup path (matches contacts file): {0}")]
    InvalidBackupPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Json,
    Malformed,
    UnsupportedFormat,
    UnsupportedVersion,
    MissingDataDir,
    InvalidDataPath,
    InvalidBackupPath,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Json(_) => StoreErrorKind::Json,
            StoreError::Malformed { .. } => StoreErrorKind::Malformed,
            StoreError::UnsupportedFormat(_) => StoreErrorKind::UnsupportedFormat,
            StoreError::UnsupportedVersion(_) => StoreErrorKind::UnsupportedVersion,
            StoreError::MissingDataDir => StoreErrorKind::MissingDataDir,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
            StoreError::InvalidBackupPath(_) => StoreErrorKind::InvalidBackupPath,
        }
    }
}
