//! High-level async API over plans and sessions.
//!
//! [`Pace`] is the entry point for the CLI and the MCP server. It knows where
//! the plan library and the session database live and runs each operation
//! on a blocking thread, opening the database per call:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │  PlanLibrary    │
//! │  (display       │───▶│ (plan_ops,      │───▶│  SessionTracker │
//! │   wrappers)     │    │  session_ops)   │    │  Database       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use pace_core::{PaceBuilder, params::{PlanId, StartSession, StopSession}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pace = PaceBuilder::new().build().await?;
//!
//! let next = pace
//!     .next_chunk(&PlanId { plan_id: "rust-basics".to_string() })
//!     .await?;
//!
//! let session = pace
//!     .start_session(&StartSession {
//!         plan_id: "rust-basics".to_string(),
//!         chunk_id: next.map(|chunk| chunk.id),
//!         notes: None,
//!     })
//!     .await?;
//! println!("Started {}", session.id);
//!
//! let stopped = pace.stop_session(&StopSession::default()).await?;
//! println!("Logged {} minutes", stopped.duration_minutes);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

pub mod builder;
pub mod handlers;
pub mod plan_ops;
pub mod session_ops;


pub use builder::PaceBuilder;

use crate::{
    db::Database,
    error::{PaceError, Result},
    library::PlanLibrary,
    tracker::SessionTracker,
};

/// Main interface for managing plans and work sessions.
#[derive(Debug, Clone)]
pub struct Pace {
    db_path: PathBuf,
    plans_dir: PathBuf,
    verify_plans: bool,
}

impl Pace {
    pub(crate) fn new(db_path: PathBuf, plans_dir: PathBuf, verify_plans: bool) -> Self {
        Self {
            db_path,
            plans_dir,
            verify_plans,
        }
    }

    /// Session database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Directory of plan documents.
    pub fn plans_dir(&self) -> &Path {
        &self.plans_dir
    }

    pub(crate) fn library(&self) -> PlanLibrary {
        PlanLibrary::new(&self.plans_dir)
    }

    /// Opens the database and wires a tracker. Call from a blocking thread.
    pub(crate) fn open_tracker(&self) -> Result<SessionTracker<Database, PlanLibrary>> {
        let db = Database::new(&self.db_path)?;
        Ok(SessionTracker::new(db, self.library()).verify_plans(self.verify_plans))
    }
}

/// Runs blocking work off the async runtime.
pub(crate) async fn run_blocking<T, F>(work: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(work)
        .await
        .map_err(|e| PaceError::Configuration {
            message: format!("Task join error: {e}"),
        })?
}
