//! Parameter structures for pace operations
//!
//! Shared parameter structures used by every interface (CLI, MCP) without
//! framework-specific derives. Interface layers wrap or convert into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema derives are only compiled with the `schema` feature, which the
//! MCP server enables.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for operations addressing a plan by ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlanId {
    /// Plan slug, e.g. `rust-basics`
    pub plan_id: String,
}

/// Parameters for operations addressing a session by ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SessionId {
    /// Session identifier as printed by `start_session`
    pub id: String,
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListPlans {
    /// Show archived plans instead of active ones
    #[serde(default)]
    pub archived: bool,
    /// Only plans carrying this tag
    #[serde(default)]
    pub tag: Option<String>,
}

/// Parameters for changing one chunk's status by hand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetChunkStatus {
    /// Plan slug
    pub plan_id: String,
    /// Chunk ID as written in `{#...}`
    pub chunk_id: String,
    /// New status: 'not-started', 'in-progress', 'completed' or 'skipped'
    pub status: String,
}

/// Parameters for starting a work session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StartSession {
    /// Plan to log time against (required)
    pub plan_id: String,
    /// Chunk to log time against
    #[serde(default)]
    pub chunk_id: Option<String>,
    /// Opening notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Parameters for stopping the active session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StopSession {
    /// Notes appended to whatever the session already has
    #[serde(default)]
    pub notes: Option<String>,
    /// Files or URLs produced during the session
    #[serde(default)]
    pub artifacts: Vec<String>,
    /// Flashcards created during the session
    #[serde(default)]
    pub cards_created: u32,
}

/// Parameters for listing sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListSessions {
    /// Only sessions for this plan
    #[serde(default)]
    pub plan_id: Option<String>,
    /// Maximum number of sessions to return, newest first
    #[serde(default)]
    pub limit: Option<u32>,
}
