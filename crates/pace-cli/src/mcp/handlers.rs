//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use pace_core::{params as core, Pace};
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types.
///
/// Deserialization and the JSON schema pass straight through to the wrapped
/// type, so the core parameter structs need no MCP-specific code.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type PlanId = McpParams<core::PlanId>;
pub type ListPlans = McpParams<core::ListPlans>;
pub type SetChunkStatus = McpParams<core::SetChunkStatus>;
pub type StartSession = McpParams<core::StartSession>;
pub type StopSession = McpParams<core::StopSession>;
pub type ListSessions = McpParams<core::ListSessions>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl Into<String>) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.into())]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    pace: Arc<Pace>,
}

impl McpHandlers {
    pub fn new(pace: Arc<Pace>) -> Self {
        Self { pace }
    }

    pub async fn list_plans(&self, Parameters(params): Parameters<ListPlans>) -> McpResult {
        debug!("list_plans: {params:?}");

        let inner = params.as_ref();
        let summaries = self
            .pace
            .list_plans_summary(inner)
            .await
            .map_err(|e| to_mcp_error("Failed to list plans", &e))?;

        let title = if inner.archived {
            "Archived Plans"
        } else {
            "Active Plans"
        };
        text(format!("# {title}\n\n{summaries}"))
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<PlanId>) -> McpResult {
        debug!("show_plan: {params:?}");

        let plan = self
            .pace
            .get_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get plan", &e))?;
        text(plan.to_string())
    }

    pub async fn next_chunk(&self, Parameters(params): Parameters<PlanId>) -> McpResult {
        debug!("next_chunk: {params:?}");

        let next = self
            .pace
            .next_chunk(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to find next chunk", &e))?;
        match next {
            Some(chunk) => text(chunk.to_string()),
            None => text(format!(
                "No chunk in plan '{}' is in progress or not started.",
                params.as_ref().plan_id
            )),
        }
    }

    pub async fn start_session(&self, Parameters(params): Parameters<StartSession>) -> McpResult {
        debug!("start_session: {params:?}");

        let result = self
            .pace
            .start_session_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to start session", &e))?;
        text(result.to_string())
    }

    pub async fn stop_session(&self, Parameters(params): Parameters<StopSession>) -> McpResult {
        debug!("stop_session: {params:?}");

        let result = self
            .pace
            .stop_session_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to stop session", &e))?;
        text(result.to_string())
    }

    pub async fn active_session(&self) -> McpResult {
        debug!("active_session");

        let active = self
            .pace
            .active_session()
            .await
            .map_err(|e| to_mcp_error("Failed to read active session", &e))?;
        match active {
            Some(session) => text(session.to_string()),
            None => text("No active session."),
        }
    }

    pub async fn list_sessions(&self, Parameters(params): Parameters<ListSessions>) -> McpResult {
        debug!("list_sessions: {params:?}");

        let sessions = self
            .pace
            .list_sessions_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list sessions", &e))?;
        text(sessions.to_string())
    }

    pub async fn session_stats(&self, Parameters(params): Parameters<PlanId>) -> McpResult {
        debug!("session_stats: {params:?}");

        let stats = self
            .pace
            .session_stats(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to compute session stats", &e))?;
        text(stats.to_string())
    }

    pub async fn set_chunk_status(
        &self,
        Parameters(params): Parameters<SetChunkStatus>,
    ) -> McpResult {
        debug!("set_chunk_status: {params:?}");

        let change = self
            .pace
            .set_chunk_status_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to set chunk status", &e))?;
        text(change.to_string())
    }
}
