//! Builder for creating and configuring Pace instances.

use std::path::{Path, PathBuf};

use super::{Pace, run_blocking};
use crate::{
    config::Config,
    db::Database,
    error::{IoResultExt, Result},
};

/// Builder for creating and configuring [`Pace`] instances.
///
/// Paths set on the builder win over the [`Config`]; anything still unset
/// falls back to the XDG data directory.
#[derive(Debug, Clone, Default)]
pub struct PaceBuilder {
    config: Config,
    database_path: Option<PathBuf>,
    plans_dir: Option<PathBuf>,
    verify_plans: Option<bool>,
}

impl PaceBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses settings from a loaded configuration file.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the configured path or
    /// `$XDG_DATA_HOME/pace/pace.db`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom plans directory.
    ///
    /// If not specified, uses the configured directory or
    /// `$XDG_DATA_HOME/pace/plans`.
    pub fn with_plans_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.plans_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides whether sessions may only start on plans in the library.
    pub fn verify_plans(mut self, verify: bool) -> Self {
        self.verify_plans = Some(verify);
        self
    }

    /// Builds the configured instance, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `PaceError::XdgDirectory` if a default path cannot be placed
    /// Returns `PaceError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `PaceError::Database` if database initialization fails
    pub async fn build(self) -> Result<Pace> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => self.config.database_path()?,
        };
        let plans_dir = match self.plans_dir {
            Some(path) => path,
            None => self.config.plans_path()?,
        };
        let verify_plans = self.verify_plans.unwrap_or(self.config.verify_plans);

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).fs_context(parent)?;
        }

        let db_path_clone = db_path.clone();
        run_blocking(move || Database::new(&db_path_clone).map(|_| ())).await?;

        log::debug!(
            "Using database {} and plans in {}",
            db_path.display(),
            plans_dir.display()
        );
        Ok(Pace::new(db_path, plans_dir, verify_plans))
    }
}
