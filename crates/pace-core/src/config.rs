//! User configuration.
//!
//! Read from `$XDG_CONFIG_HOME/pace/config.yaml` when it exists:
//!
//! ```yaml
//! database_file: /home/me/.local/share/pace/pace.db
//! plans_dir: /home/me/notes/plans
//! verify_plans: true
//! ```
//!
//! Every key is optional. Paths left unset fall back to the XDG data
//! directory; explicit paths given to [`PaceBuilder`](crate::PaceBuilder)
//! win over both.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{IoResultExt, PaceError, Result};

const APP_PREFIX: &str = "pace";
const CONFIG_FILE: &str = "config.yaml";
const DATABASE_FILE: &str = "pace.db";
const PLANS_DIR: &str = "plans";

/// Settings loaded from the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// SQLite file holding sessions
    pub database_file: Option<PathBuf>,

    /// Directory of plan documents
    pub plans_dir: Option<PathBuf>,

    /// Refuse to start sessions for plans missing from the library
    pub verify_plans: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_file: None,
            plans_dir: None,
            verify_plans: true,
        }
    }
}

impl Config {
    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, the XDG config file is
    /// used when present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => match Self::default_config_path() {
                Some(path) => Self::load_from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Parses a configuration file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).fs_context(path)?;
        let config = Self::from_yaml(&content).map_err(|e| PaceError::Configuration {
            message: format!("{}: {e}", path.display()),
        })?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from YAML text. An empty document yields the
    /// defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// The configured database file, or `$XDG_DATA_HOME/pace/pace.db`.
    pub fn database_path(&self) -> Result<PathBuf> {
        match &self.database_file {
            Some(path) => Ok(path.clone()),
            None => Self::default_data_path(DATABASE_FILE),
        }
    }

    /// The configured plans directory, or `$XDG_DATA_HOME/pace/plans`.
    pub fn plans_path(&self) -> Result<PathBuf> {
        match &self.plans_dir {
            Some(path) => Ok(path.clone()),
            None => Self::default_data_path(PLANS_DIR),
        }
    }

    /// Existing configuration file under the XDG config directories.
    pub fn default_config_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX).find_config_file(CONFIG_FILE)
    }

    /// Returns a path in the data directory following the XDG Base
    /// Directory specification, creating the parent directory.
    fn default_data_path(name: &str) -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(APP_PREFIX)
            .place_data_file(name)
            .map_err(|e| PaceError::XdgDirectory(e.to_string()))
    }
}
