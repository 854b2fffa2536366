//! Session operations for Pace.

use super::{Pace, run_blocking};
use crate::{
    error::Result,
    models::{Session, SessionFilter, SessionStats},
    params::{ListSessions, PlanId, SessionId, StartSession, StopSession},
};

impl Pace {
    /// Starts a work session. Fails if another session is running.
    pub async fn start_session(&self, params: &StartSession) -> Result<Session> {
        let pace = self.clone();
        let params = params.clone();

        run_blocking(move || pace.open_tracker()?.start(&params)).await
    }

    /// Stops the running session and re-evaluates its chunk.
    pub async fn stop_session(&self, params: &StopSession) -> Result<Session> {
        let pace = self.clone();
        let params = params.clone();

        run_blocking(move || pace.open_tracker()?.stop(&params)).await
    }

    /// The running session, if any.
    pub async fn active_session(&self) -> Result<Option<Session>> {
        let pace = self.clone();

        run_blocking(move || pace.open_tracker()?.get_active()).await
    }

    /// Retrieves a session by ID.
    pub async fn get_session(&self, params: &SessionId) -> Result<Session> {
        let pace = self.clone();
        let id = params.id.clone();

        run_blocking(move || pace.open_tracker()?.get(&id)).await
    }

    /// Lists sessions newest first, optionally for one plan and capped at a
    /// limit.
    pub async fn list_sessions(&self, params: &ListSessions) -> Result<Vec<Session>> {
        let pace = self.clone();
        let filter = SessionFilter::from(params);

        run_blocking(move || pace.open_tracker()?.list(&filter)).await
    }

    /// Every session logged against a plan, newest first.
    pub async fn sessions_for_plan(&self, params: &PlanId) -> Result<Vec<Session>> {
        let pace = self.clone();
        let plan_id = params.plan_id.clone();

        run_blocking(move || pace.open_tracker()?.get_by_plan(&plan_id)).await
    }

    /// Time logged against a plan.
    pub async fn session_stats(&self, params: &PlanId) -> Result<SessionStats> {
        let sessions = self.sessions_for_plan(params).await?;
        Ok(SessionStats::from_sessions(&params.plan_id, &sessions))
    }

    /// Permanently deletes a session.
    pub async fn delete_session(&self, params: &SessionId) -> Result<()> {
        let pace = self.clone();
        let id = params.id.clone();

        run_blocking(move || pace.open_tracker()?.delete(&id)).await
    }
}
