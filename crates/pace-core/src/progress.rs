//! Chunk completion inferred from logged time.

use jiff::Timestamp;
use log::debug;

use crate::{
    error::Result,
    models::{ChunkStatus, SessionFilter},
    ports::{PlanAccessor, SessionStore},
};

/// What [`ProgressInferencer::infer`] decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inference {
    /// The chunk was already completed or skipped; nothing was read or
    /// written.
    AlreadyFinished(ChunkStatus),
    /// Logged time is still short of the target.
    BelowTarget { logged: u32, target: u32 },
    /// Logged time reached the target and the chunk was marked completed.
    Completed { logged: u32, target: u32 },
}

/// Promotes a chunk to completed once completed sessions against it add up
/// to its target duration.
///
/// Completed and skipped chunks are never touched, so calling this again
/// after a promotion is a no-op.
pub struct ProgressInferencer<'a, S: ?Sized, A: ?Sized> {
    sessions: &'a S,
    plans: &'a A,
}

impl<'a, S, A> ProgressInferencer<'a, S, A>
where
    S: SessionStore + ?Sized,
    A: PlanAccessor + ?Sized,
{
    /// Creates an inferencer over the given collaborators.
    pub fn new(sessions: &'a S, plans: &'a A) -> Self {
        Self { sessions, plans }
    }

    /// Re-evaluates one chunk of one plan. A promotion stamps the plan as
    /// updated at `at`.
    pub fn infer(&self, plan_id: &str, chunk_id: &str, at: Timestamp) -> Result<Inference> {
        let state = self.plans.chunk_state(plan_id, chunk_id)?;
        if state.status.is_finished() {
            return Ok(Inference::AlreadyFinished(state.status));
        }

        let logged = self.logged_minutes(plan_id, chunk_id)?;
        let target = state.duration_minutes;
        debug!("Chunk {plan_id}/{chunk_id}: {logged} of {target} minutes logged");

        if logged >= target {
            self.plans
                .set_chunk_status(plan_id, chunk_id, ChunkStatus::Completed, at)?;
            Ok(Inference::Completed { logged, target })
        } else {
            Ok(Inference::BelowTarget { logged, target })
        }
    }

    /// Sum of completed session minutes for exactly this plan and chunk.
    pub fn logged_minutes(&self, plan_id: &str, chunk_id: &str) -> Result<u32> {
        let sessions = self
            .sessions
            .list(&SessionFilter::completed_for_chunk(plan_id, chunk_id))?;
        Ok(sessions
            .iter()
            .filter(|s| !s.is_active() && s.chunk_id.as_deref() == Some(chunk_id))
            .map(|s| s.duration_minutes)
            .sum())
    }
}
