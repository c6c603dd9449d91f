use anyhow::Error;
use phonebook_config::ConfigError;
use phonebook_core::CoreError;
use phonebook_store::error::{StoreError, StoreErrorKind};
use std::path::Path;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("changes were not saved to {0}")]
    Unsaved(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn unsaved(path: &Path) -> Error {
    CliError::Unsaved(path.display().to_string()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::Unsaved(_) => EXIT_FAILURE,
            };
        }
        if let Some(core_err) = cause.downcast_ref::<CoreError>() {
            return core_exit_code(core_err);
        }
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return store_exit_code(store_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
    }
    EXIT_FAILURE
}

fn core_exit_code(err: &CoreError) -> u8 {
    match err {
        CoreError::NotFound(_) => EXIT_NOT_FOUND,
        CoreError::InvalidField(_) | CoreError::DuplicateName(_) | CoreError::EmptySearchTerm => {
            EXIT_INVALID_INPUT
        }
    }
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::InvalidDataPath | StoreErrorKind::InvalidBackupPath => EXIT_INVALID_INPUT,
        StoreErrorKind::Io
        | StoreErrorKind::Json
        | StoreErrorKind::Malformed
        | StoreErrorKind::UnsupportedFormat
        | StoreErrorKind::UnsupportedVersion
        | StoreErrorKind::MissingDataDir => EXIT_FAILURE,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::Read { .. } => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::EmptyContactsFile(_)
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        exit_status_for, invalid_input, unsaved, EXIT_FAILURE, EXIT_INVALID_INPUT, EXIT_NOT_FOUND,
    };
    use anyhow::Context as _;
    use phonebook_core::{ContactField, CoreError};
    use std::path::Path;

    #[test]
    fn exit_codes_follow_error_kind() {
        let not_found = anyhow::Error::new(CoreError::NotFound("index 4".to_string()));
        assert_eq!(exit_status_for(&not_found), EXIT_NOT_FOUND);

        let invalid = anyhow::Error::new(CoreError::InvalidField(ContactField::Email));
        assert_eq!(exit_status_for(&invalid), EXIT_INVALID_INPUT);

        assert_eq!(exit_status_for(&invalid_input("bad ref")), EXIT_INVALID_INPUT);
        assert_eq!(
            exit_status_for(&unsaved(Path::new("/tmp/contacts.jsonl"))),
            EXIT_FAILURE
        );
        assert_eq!(exit_status_for(&anyhow::anyhow!("boom")), EXIT_FAILURE);
    }

    #[test]
    fn exit_code_looks_through_context() {
        let err: anyhow::Result<()> = Err(CoreError::DuplicateName("Ada".to_string()).into());
        let err = err.with_context(|| "add contact").unwrap_err();
        assert_eq!(exit_status_for(&err), EXIT_INVALID_INPUT);
    }
}
