//! MCP server implementation for pace
//!
//! Exposes plan browsing and session tracking to AI assistants over the
//! Model Context Protocol on stdio.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use pace_core::Pace;
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    ListPlans, ListSessions, McpResult, PlanId, SetChunkStatus, StartSession, StopSession,
};

const INSTRUCTIONS: &str = r#"pace tracks time-boxed learning plans and the work sessions spent on them.

## Core Concepts
- **Plans**: Markdown curricula identified by a slug, e.g. `rust-basics`
- **Chunks**: time-boxed units inside a plan, each with a target duration and a status (not-started, in-progress, completed, skipped)
- **Sessions**: timed work logged against a plan and optionally one chunk. Only one session can be active at a time.

## Workflow
1. `list_plans` to see active plans and their progress
2. `next_chunk` to find what to work on, `show_plan` for the full curriculum
3. `start_session` with plan_id and chunk_id when the learner begins
4. `stop_session` when they finish, with notes, artifacts and cards_created
5. A chunk is marked completed automatically once the time logged against it reaches its target

## Other Tools
- `active_session` shows the running session, if any
- `list_sessions` and `session_stats` review logged time
- `set_chunk_status` overrides a chunk status by hand, e.g. to skip a chunk"#;

/// MCP server for pace
#[derive(Clone)]
pub struct PaceMcpServer {
    pace: Arc<Pace>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PaceMcpServer {
    pub fn new(pace: Pace) -> Self {
        Self {
            pace: Arc::new(pace),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.pace.clone())
    }

    #[tool(
        name = "list_plans",
        description = "List learning plans with progress, remaining hours and the next chunk. Use archived=true for archived plans and tag to filter."
    )]
    async fn list_plans(&self, params: Parameters<ListPlans>) -> McpResult {
        self.handlers().list_plans(params).await
    }

    #[tool(
        name = "show_plan",
        description = "Show a plan in full: every chunk with its status, duration, deliverable, objectives and resources."
    )]
    async fn show_plan(&self, params: Parameters<PlanId>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "next_chunk",
        description = "Return the chunk to work on next: the first in-progress chunk, otherwise the first not-started one."
    )]
    async fn next_chunk(&self, params: Parameters<PlanId>) -> McpResult {
        self.handlers().next_chunk(params).await
    }

    #[tool(
        name = "start_session",
        description = "Start a work session on a plan, optionally on one chunk. Fails if another session is already active. Marks a not-started chunk as in progress."
    )]
    async fn start_session(&self, params: Parameters<StartSession>) -> McpResult {
        self.handlers().start_session(params).await
    }

    #[tool(
        name = "stop_session",
        description = "Stop the active session, recording notes, artifacts and flashcards created. Completes the chunk once its logged time reaches the target."
    )]
    async fn stop_session(&self, params: Parameters<StopSession>) -> McpResult {
        self.handlers().stop_session(params).await
    }

    #[tool(
        name = "active_session",
        description = "Show the session currently running, if any."
    )]
    async fn active_session(&self) -> McpResult {
        self.handlers().active_session().await
    }

    #[tool(
        name = "list_sessions",
        description = "List sessions newest first, optionally for one plan and limited in number."
    )]
    async fn list_sessions(&self, params: Parameters<ListSessions>) -> McpResult {
        self.handlers().list_sessions(params).await
    }

    #[tool(
        name = "session_stats",
        description = "Summarize time logged against a plan: session count, total time, cards created and minutes per chunk."
    )]
    async fn session_stats(&self, params: Parameters<PlanId>) -> McpResult {
        self.handlers().session_stats(params).await
    }

    #[tool(
        name = "set_chunk_status",
        description = "Set a chunk status by hand: 'not-started', 'in-progress', 'completed' or 'skipped'."
    )]
    async fn set_chunk_status(&self, params: Parameters<SetChunkStatus>) -> McpResult {
        self.handlers().set_chunk_status(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for PaceMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "pace".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: PaceMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting pace MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
