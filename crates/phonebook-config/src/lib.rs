//! Optional per-user settings read from `phonebook/config.toml`.
//!
//! ```toml
//! contacts_file = "/path/to/contacts.jsonl"
//!
//! [mail]
//! launcher = "system"   # or "stdout"
//! ```

use std::env;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonebook";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub contacts_file: Option<PathBuf>,
    pub mail: MailConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MailConfig {
    #[serde(default)]
    pub launcher: MailLauncherKind,
}

/// How `mail` hands a `mailto:` link over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailLauncherKind {
    /// The desktop's default mail handler.
    #[default]
    System,
    /// Print the link instead.
    Stdout,
}

/// The settings in effect and the file they were read from, if any.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file {0} must not be accessible by group or others")]
    InsecurePermissions(PathBuf),
    #[error("contacts_file in {0} cannot be empty")]
    EmptyContactsFile(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    contacts_file: Option<PathBuf>,
    #[serde(default)]
    mail: MailConfig,
}

/// Reads `explicit`, which must exist, or else the per-user file. Without
/// either the defaults apply.
pub fn load(explicit: Option<PathBuf>) -> Result<LoadedConfig> {
    let required = explicit.is_some();
    let path = match explicit {
        Some(path) if path.as_os_str().is_empty() => {
            return Err(ConfigError::InvalidConfigPath(path))
        }
        Some(path) => path,
        None => match default_config_path() {
            Some(path) => path,
            None => return Ok(LoadedConfig::default()),
        },
    };

    match read_private(&path)? {
        Some(contents) => Ok(LoadedConfig {
            config: parse(&path, &contents)?,
            source: Some(path),
        }),
        None if required => Err(ConfigError::MissingConfigFile(path)),
        None => Ok(LoadedConfig::default()),
    }
}

/// `$XDG_CONFIG_HOME` when it is absolute, else the platform config dir.
pub fn default_config_path() -> Option<PathBuf> {
    let base = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|dir| dir.is_absolute())
        .or_else(dirs::config_dir)?;
    Some(base.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Contents of `path`, or `None` when it does not exist. Permissions are
/// checked on the opened handle, so the file read is the file checked.
fn read_private(path: &Path) -> Result<Option<String>> {
    let read_error = |source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(read_error(err)),
    };

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = file.metadata().map_err(read_error)?.permissions().mode();
        if mode & 0o077 != 0 {
            return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
        }
    }

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(read_error)?;
    Ok(Some(contents))
}

fn parse(path: &Path, contents: &str) -> Result<AppConfig> {
    let file: ConfigFile = toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    if file
        .contacts_file
        .as_ref()
        .is_some_and(|contacts| contacts.as_os_str().is_empty())
    {
        return Err(ConfigError::EmptyContactsFile(path.to_path_buf()));
    }
    Ok(AppConfig {
        contacts_file: file.contacts_file,
        mail: file.mail,
    })
}
