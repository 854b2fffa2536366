//! Collaborator interfaces consumed by the session tracker.
//!
//! [`SessionStore`] persists sessions; [`Database`](crate::db::Database)
//! implements it on SQLite. [`PlanAccessor`] is the narrow view of plan
//! documents the tracker and the progress inferencer need;
//! [`PlanLibrary`](crate::library::PlanLibrary) implements it on a directory
//! of plan files.

use jiff::Timestamp;

use crate::{
    error::Result,
    models::{ChunkStatus, Session, SessionFilter},
};

/// The parts of a chunk that drive session bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkState {
    /// Target duration in minutes
    pub duration_minutes: u32,
    /// Current status
    pub status: ChunkStatus,
}

/// Read and update chunk status without exposing whole plans.
pub trait PlanAccessor {
    /// Whether a plan with this ID exists.
    fn plan_exists(&self, plan_id: &str) -> Result<bool>;

    /// Target duration and status of one chunk.
    ///
    /// # Errors
    ///
    /// Returns `PlanNotFound` or `ChunkNotFound` when either is unknown.
    fn chunk_state(&self, plan_id: &str, chunk_id: &str) -> Result<ChunkState>;

    /// Persists a new status for one chunk, stamping the plan as updated
    /// at `at`.
    fn set_chunk_status(
        &self,
        plan_id: &str,
        chunk_id: &str,
        status: ChunkStatus,
        at: Timestamp,
    ) -> Result<()>;
}

/// Session persistence.
pub trait SessionStore {
    /// Inserts a new session.
    ///
    /// # Errors
    ///
    /// Implementations that enforce a single active session at the storage
    /// layer return `Conflict` when another session is already active.
    fn create(&mut self, session: &Session) -> Result<()>;

    /// Fetches a session by ID.
    fn get(&self, id: &str) -> Result<Option<Session>>;

    /// The session without an end time, if any.
    fn get_active(&self) -> Result<Option<Session>>;

    /// Overwrites a stored session.
    ///
    /// # Errors
    ///
    /// Returns `SessionNotFound` when no session has this ID.
    fn update(&mut self, session: &Session) -> Result<()>;

    /// Sessions matching `filter`, newest first.
    fn list(&self, filter: &SessionFilter) -> Result<Vec<Session>>;

    /// Every session for a plan, newest first.
    fn get_by_plan(&self, plan_id: &str) -> Result<Vec<Session>> {
        self.list(&SessionFilter::for_plan(plan_id))
    }

    /// Removes a session. Returns whether anything was deleted.
    fn delete(&mut self, id: &str) -> Result<bool>;
}
