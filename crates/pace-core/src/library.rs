//! File-backed plan storage.
//!
//! A library is a flat directory holding one `<plan-id>.md` document per
//! plan. Documents are parsed with [`codec::parse`] and validated on every
//! load, and formatted with [`codec::format`] on every save.

use std::{
    fs,
    path::{Path, PathBuf},
};

use jiff::Timestamp;
use log::{debug, info, warn};

use crate::{
    codec,
    error::{IoResultExt, PaceError, Result},
    models::{ChunkStatus, Plan, PlanFilter},
    ports::{ChunkState, PlanAccessor},
};

const PLAN_EXTENSION: &str = "md";

/// Directory of plan documents.
#[derive(Debug, Clone)]
pub struct PlanLibrary {
    dir: PathBuf,
}

impl PlanLibrary {
    /// Creates a library rooted at `dir`. The directory is created on first
    /// save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory of the library.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Every valid plan matching `filter`, ordered by ID.
    ///
    /// Files that cannot be read, parsed or validated are skipped with a
    /// warning. A missing directory is an empty library.
    pub fn list(&self, filter: &PlanFilter) -> Result<Vec<Plan>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(PaceError::file_system(&self.dir, e)),
        };

        let mut plans = Vec::new();
        for entry in entries {
            let path = entry.fs_context(&self.dir)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(PLAN_EXTENSION) {
                continue;
            }
            match Self::read_stored_plan(&path) {
                Ok(plan) if filter.matches(&plan) => plans.push(plan),
                Ok(_) => {}
                Err(e) => warn!("Skipping {}: {e}", path.display()),
            }
        }

        plans.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(plans)
    }

    /// Loads and validates one plan.
    ///
    /// # Errors
    ///
    /// Returns `PlanNotFound` when no document exists for `id`, and a
    /// validation error on `id` when the document inside names another plan.
    pub fn load(&self, id: &str) -> Result<Plan> {
        let path = self.path_for(id)?;
        if !path.is_file() {
            return Err(PaceError::PlanNotFound { id: id.to_string() });
        }
        Self::read_stored_plan(&path)
    }

    /// Validates and writes a plan, replacing any existing document with the
    /// same ID.
    pub fn save(&self, plan: &Plan) -> Result<PathBuf> {
        plan.validate()?;
        let path = self.path_for(&plan.id)?;
        let text = codec::format(plan)?;

        fs::create_dir_all(&self.dir).fs_context(&self.dir)?;
        fs::write(&path, text).fs_context(&path)?;
        debug!("Wrote plan '{}' to {}", plan.id, path.display());
        Ok(path)
    }

    /// Copies a plan document from anywhere on disk into the library.
    ///
    /// # Errors
    ///
    /// Returns a validation error on `id` if the library already has a plan
    /// with the same ID.
    pub fn import(&self, source: &Path) -> Result<Plan> {
        let plan = Self::read_plan(source)?;
        if self.path_for(&plan.id)?.exists() {
            return Err(PaceError::validation("id")
                .with_reason(format!("plan '{}' already exists", plan.id)));
        }
        self.save(&plan)?;
        info!("Imported plan '{}' from {}", plan.id, source.display());
        Ok(plan)
    }

    /// Deletes a plan document.
    ///
    /// # Errors
    ///
    /// Returns `PlanNotFound` when no document exists for `id`.
    pub fn remove(&self, id: &str) -> Result<()> {
        let path = self.path_for(id)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed plan '{id}'");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PaceError::PlanNotFound { id: id.to_string() })
            }
            Err(e) => Err(PaceError::file_system(path, e)),
        }
    }

    /// Sets one chunk's status and saves the plan, stamping it as updated
    /// at `at`. Returns the previous status.
    pub fn update_chunk_status(
        &self,
        plan_id: &str,
        chunk_id: &str,
        status: ChunkStatus,
        at: Timestamp,
    ) -> Result<ChunkStatus> {
        let mut plan = self.load(plan_id)?;
        let previous = plan.set_chunk_status(chunk_id, status, at)?;
        if previous != status {
            self.save(&plan)?;
        }
        Ok(previous)
    }

    fn read_plan(path: &Path) -> Result<Plan> {
        let text = fs::read_to_string(path).fs_context(path)?;
        let plan = codec::parse(&text)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Reads a document from the library directory, whose file stem must be
    /// the plan ID.
    fn read_stored_plan(path: &Path) -> Result<Plan> {
        let plan = Self::read_plan(path)?;
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if stem != plan.id {
            return Err(PaceError::validation("id").with_reason(format!(
                "{} holds plan '{}'",
                path.display(),
                plan.id
            )));
        }
        Ok(plan)
    }

    /// Plan IDs double as file stems, so they must not escape the directory.
    fn path_for(&self, id: &str) -> Result<PathBuf> {
        let id = id.trim();
        if id.is_empty() {
            return Err(PaceError::validation("id").with_reason("must not be empty"));
        }
        if id.starts_with('.') || id.contains(['/', '\\']) {
            return Err(PaceError::validation("id")
                .with_reason(format!("'{id}' cannot be used as a file name")));
        }
        Ok(self.dir.join(format!("{id}.{PLAN_EXTENSION}")))
    }
}

impl PlanAccessor for PlanLibrary {
    /// A document that exists but cannot be loaded is reported as an error
    /// rather than as a missing plan.
    fn plan_exists(&self, plan_id: &str) -> Result<bool> {
        match self.load(plan_id) {
            Ok(_) => Ok(true),
            Err(PaceError::PlanNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn chunk_state(&self, plan_id: &str, chunk_id: &str) -> Result<ChunkState> {
        let plan = self.load(plan_id)?;
        let chunk = plan.chunk(chunk_id).ok_or_else(|| PaceError::ChunkNotFound {
            plan_id: plan_id.to_string(),
            chunk_id: chunk_id.to_string(),
        })?;
        Ok(ChunkState {
            duration_minutes: chunk.duration_minutes,
            status: chunk.status,
        })
    }

    fn set_chunk_status(
        &self,
        plan_id: &str,
        chunk_id: &str,
        status: ChunkStatus,
        at: Timestamp,
    ) -> Result<()> {
        self.update_chunk_status(plan_id, chunk_id, status, at)
            .map(|_| ())
    }
}
