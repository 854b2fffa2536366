//! Operations returning display wrappers, shared by the CLI and MCP server.

use super::Pace;
use crate::{
    display::{OperationStatus, PlanSummaries, Sessions, StartResult, StatusChange, StopResult},
    error::Result,
    models::{ChunkStatus, PlanSummary},
    params::{ListPlans, ListSessions, PlanId, SessionId, SetChunkStatus, StartSession, StopSession},
};

impl Pace {
    /// Lists plans as summaries with progress figures.
    pub async fn list_plans_summary(&self, params: &ListPlans) -> Result<PlanSummaries> {
        let plans = self.list_plans(params).await?;
        Ok(PlanSummaries(plans.iter().map(PlanSummary::from).collect()))
    }

    /// Starts a session and wraps it for display.
    pub async fn start_session_result(&self, params: &StartSession) -> Result<StartResult> {
        self.start_session(params).await.map(StartResult::new)
    }

    /// Stops the running session and wraps it for display.
    pub async fn stop_session_result(&self, params: &StopSession) -> Result<StopResult> {
        self.stop_session(params).await.map(StopResult::new)
    }

    /// Lists sessions wrapped for display.
    pub async fn list_sessions_result(&self, params: &ListSessions) -> Result<Sessions> {
        self.list_sessions(params).await.map(Sessions)
    }

    /// Sets a chunk status and describes the change.
    pub async fn set_chunk_status_result(&self, params: &SetChunkStatus) -> Result<StatusChange> {
        let previous = self.set_chunk_status(params).await?;
        // Parsing already succeeded inside set_chunk_status.
        let current = params.status.parse::<ChunkStatus>().unwrap_or(previous);
        Ok(StatusChange {
            plan_id: params.plan_id.clone(),
            chunk_id: params.chunk_id.clone(),
            previous,
            current,
        })
    }

    /// Removes a plan and confirms it.
    pub async fn remove_plan_result(&self, params: &PlanId) -> Result<OperationStatus> {
        self.remove_plan(params).await?;
        Ok(OperationStatus::success(format!(
            "Removed plan '{}'",
            params.plan_id
        )))
    }

    /// Deletes a session and confirms it.
    pub async fn delete_session_result(&self, params: &SessionId) -> Result<OperationStatus> {
        self.delete_session(params).await?;
        Ok(OperationStatus::success(format!(
            "Deleted session {}",
            params.id
        )))
    }
}
