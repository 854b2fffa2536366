//! Session lifecycle: start, stop, and the single-active-session rule.
//!
//! Each session moves `active → completed` exactly once:
//!
//! ```text
//!   absent ──start──▶ active ──stop──▶ completed
//! ```
//!
//! At most one session may be active across the whole store. [`start`]
//! checks the store before inserting; the SQLite store additionally rejects
//! a second active row with a unique index.
//!
//! Chunk status changes triggered by start and stop are best-effort: they
//! are reported to a [`SideEffectObserver`] and never change the outcome of
//! the session transition itself.
//!
//! [`start`]: SessionTracker::start

use log::{debug, info};
use uuid::Uuid;

mod clock;
mod observer;

#[cfg(test)]
mod tests;

pub use clock::{Clock, SystemClock};
pub use observer::{LogObserver, SideEffectObserver, best_effort};

use crate::{
    error::{PaceError, Result},
    models::{ChunkStatus, Session, SessionFilter},
    params::{StartSession, StopSession},
    ports::{PlanAccessor, SessionStore},
    progress::ProgressInferencer,
};

/// Owns a session store and a plan accessor and applies session transitions
/// to them.
pub struct SessionTracker<S, A> {
    store: S,
    plans: A,
    clock: Box<dyn Clock>,
    observer: Box<dyn SideEffectObserver>,
    verify_plans: bool,
}

impl<S, A> SessionTracker<S, A>
where
    S: SessionStore,
    A: PlanAccessor,
{
    /// Creates a tracker using the system clock, logging swallowed failures,
    /// and not checking that plans exist.
    pub fn new(store: S, plans: A) -> Self {
        Self {
            store,
            plans,
            clock: Box::new(SystemClock),
            observer: Box::new(LogObserver),
            verify_plans: false,
        }
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replaces the observer for best-effort failures.
    pub fn with_observer(mut self, observer: impl SideEffectObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Makes [`start`](Self::start) reject plan IDs the accessor does not
    /// know.
    pub fn verify_plans(mut self, verify: bool) -> Self {
        self.verify_plans = verify;
        self
    }

    /// The session store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The plan accessor.
    pub fn plans(&self) -> &A {
        &self.plans
    }

    /// Starts a session.
    ///
    /// # Errors
    ///
    /// - `Validation` if the plan ID is empty
    /// - `Conflict` if a session is already active, naming it
    /// - `PlanNotFound` if plan verification is on and the plan is unknown
    pub fn start(&mut self, params: &StartSession) -> Result<Session> {
        let plan_id = params.plan_id.trim();
        if plan_id.is_empty() {
            return Err(PaceError::validation("plan_id").with_reason("must not be empty"));
        }
        let chunk_id = params
            .chunk_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty());

        if let Some(active) = self.store.get_active()? {
            return Err(PaceError::Conflict {
                session_id: active.id,
                plan_id: active.plan_id,
            });
        }

        if self.verify_plans && !self.plans.plan_exists(plan_id)? {
            return Err(PaceError::PlanNotFound {
                id: plan_id.to_string(),
            });
        }

        let mut session = Session {
            id: Uuid::now_v7().to_string(),
            plan_id: plan_id.to_string(),
            chunk_id: chunk_id.map(String::from),
            start_time: self.clock.now(),
            end_time: None,
            duration_minutes: 0,
            notes: String::new(),
            artifacts: Vec::new(),
            cards_created: 0,
        };
        if let Some(notes) = &params.notes {
            session.append_notes(notes);
        }
        session.check_invariants()?;
        self.store.create(&session)?;
        info!("Started session {} for plan '{}'", session.id, session.plan_id);

        if let Some(chunk_id) = chunk_id {
            let plans = &self.plans;
            let at = session.start_time;
            best_effort(self.observer.as_ref(), "mark chunk in progress", || {
                let state = plans.chunk_state(plan_id, chunk_id)?;
                if state.status == ChunkStatus::NotStarted {
                    plans.set_chunk_status(plan_id, chunk_id, ChunkStatus::InProgress, at)?;
                    debug!("Chunk {plan_id}/{chunk_id} moved to in-progress");
                }
                Ok(())
            });
        }

        Ok(session)
    }

    /// Stops the active session.
    ///
    /// # Errors
    ///
    /// - `NoActiveSession` if nothing is running
    /// - `Validation` if the clock has not moved past the start time
    pub fn stop(&mut self, params: &StopSession) -> Result<Session> {
        let mut session = self.store.get_active()?.ok_or(PaceError::NoActiveSession)?;

        session.complete(self.clock.now())?;
        if let Some(notes) = &params.notes {
            session.append_notes(notes);
        }
        session.add_artifacts(params.artifacts.iter().cloned());
        session.cards_created = session.cards_created.saturating_add(params.cards_created);
        session.check_invariants()?;
        self.store.update(&session)?;
        info!(
            "Stopped session {} after {} minutes",
            session.id, session.duration_minutes
        );

        if let Some(chunk_id) = session.chunk_id.as_deref() {
            let inferencer = ProgressInferencer::new(&self.store, &self.plans);
            let at = session.end_time.unwrap_or(session.start_time);
            best_effort(self.observer.as_ref(), "infer chunk completion", || {
                let outcome = inferencer.infer(&session.plan_id, chunk_id, at)?;
                debug!("Inference for {}/{chunk_id}: {outcome:?}", session.plan_id);
                Ok(())
            });
        }

        Ok(session)
    }

    /// The running session, if any.
    pub fn get_active(&self) -> Result<Option<Session>> {
        self.store.get_active()
    }

    /// A session by ID.
    ///
    /// # Errors
    ///
    /// Returns `SessionNotFound` when no session has this ID.
    pub fn get(&self, id: &str) -> Result<Session> {
        self.store
            .get(id)?
            .ok_or_else(|| PaceError::SessionNotFound { id: id.to_string() })
    }

    /// Sessions matching `filter`, newest first.
    pub fn list(&self, filter: &SessionFilter) -> Result<Vec<Session>> {
        self.store.list(filter)
    }

    /// Every session for a plan, newest first.
    pub fn get_by_plan(&self, plan_id: &str) -> Result<Vec<Session>> {
        self.store.get_by_plan(plan_id)
    }

    /// Deletes a session.
    ///
    /// # Errors
    ///
    /// Returns `SessionNotFound` when no session has this ID.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        if self.store.delete(id)? {
            info!("Deleted session {id}");
            Ok(())
        } else {
            Err(PaceError::SessionNotFound { id: id.to_string() })
        }
    }
}
