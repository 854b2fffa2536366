//! Command-line interface definitions and handlers
//!
//! Argument structures use clap derives and convert into the core parameter
//! types, so clap never leaks into `pace-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Pace
//! ```

use std::{fmt, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use pace_core::{params::*, Pace, Sessions};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Plan arguments
// ============================================================================

/// List plans
///
/// Shows active plans by default. Archived plans are kept in the library
/// but hidden until `--archived` is given.
#[derive(Args)]
pub struct ListPlansArgs {
    /// Show archived plans instead of active ones
    #[arg(long)]
    pub archived: bool,

    /// Only plans carrying this tag
    #[arg(short, long)]
    pub tag: Option<String>,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            archived: val.archived,
            tag: val.tag,
        }
    }
}

/// Address a plan by its slug
#[derive(Args)]
pub struct PlanIdArgs {
    /// Plan slug, e.g. rust-basics
    pub plan_id: String,
}

impl From<PlanIdArgs> for PlanId {
    fn from(val: PlanIdArgs) -> Self {
        PlanId {
            plan_id: val.plan_id,
        }
    }
}

/// Import a plan document into the library
#[derive(Args)]
pub struct ImportPlanArgs {
    /// Markdown file with a YAML header
    pub path: PathBuf,
}

/// Set the status of one chunk by hand
#[derive(Args)]
pub struct SetChunkStatusArgs {
    /// Plan slug
    pub plan_id: String,
    /// Chunk ID as written in `{#...}`
    pub chunk_id: String,
    /// New status
    #[arg(value_enum)]
    pub status: ChunkStatusArg,
}

impl From<SetChunkStatusArgs> for SetChunkStatus {
    fn from(val: SetChunkStatusArgs) -> Self {
        SetChunkStatus {
            plan_id: val.plan_id,
            chunk_id: val.chunk_id,
            status: val.status.to_string(),
        }
    }
}

/// Plan management commands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// List plans with their progress
    #[command(alias = "ls")]
    List(ListPlansArgs),
    /// Show a plan and all its chunks
    Show(PlanIdArgs),
    /// Show the next chunk to work on
    Next(PlanIdArgs),
    /// Copy a plan document into the library
    Import(ImportPlanArgs),
    /// Remove a plan document from the library
    #[command(alias = "rm")]
    Remove(PlanIdArgs),
    /// Set a chunk status
    Status(SetChunkStatusArgs),
}

/// Chunk status values accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ChunkStatusArg {
    NotStarted,
    InProgress,
    Completed,
    Skipped,
}

impl fmt::Display for ChunkStatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ChunkStatusArg::NotStarted => "not-started",
            ChunkStatusArg::InProgress => "in-progress",
            ChunkStatusArg::Completed => "completed",
            ChunkStatusArg::Skipped => "skipped",
        })
    }
}

// ============================================================================
// Session arguments
// ============================================================================

/// Start a work session
#[derive(Args)]
pub struct StartSessionArgs {
    /// Plan to log time against
    pub plan_id: String,

    /// Chunk to log time against
    #[arg(short, long)]
    pub chunk: Option<String>,

    /// Opening notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<StartSessionArgs> for StartSession {
    fn from(val: StartSessionArgs) -> Self {
        StartSession {
            plan_id: val.plan_id,
            chunk_id: val.chunk,
            notes: val.notes,
        }
    }
}

/// Stop the active session
#[derive(Args)]
pub struct StopSessionArgs {
    /// Notes appended to the session
    #[arg(short, long)]
    pub notes: Option<String>,

    /// File or URL produced during the session (repeatable)
    #[arg(short, long = "artifact")]
    pub artifacts: Vec<String>,

    /// Number of flashcards created
    #[arg(long, default_value_t = 0)]
    pub cards: u32,
}

impl From<StopSessionArgs> for StopSession {
    fn from(val: StopSessionArgs) -> Self {
        StopSession {
            notes: val.notes,
            artifacts: val.artifacts,
            cards_created: val.cards,
        }
    }
}

/// Address a session by ID
#[derive(Args)]
pub struct SessionIdArgs {
    /// Session ID
    pub id: String,
}

impl From<SessionIdArgs> for SessionId {
    fn from(val: SessionIdArgs) -> Self {
        SessionId { id: val.id }
    }
}

/// List sessions, newest first
#[derive(Args)]
pub struct ListSessionsArgs {
    /// Only sessions for this plan
    #[arg(short, long)]
    pub plan: Option<String>,

    /// Maximum number of sessions to show
    #[arg(short, long)]
    pub limit: Option<u32>,
}

impl From<ListSessionsArgs> for ListSessions {
    fn from(val: ListSessionsArgs) -> Self {
        ListSessions {
            plan_id: val.plan,
            limit: val.limit,
        }
    }
}

/// Session commands
#[derive(Subcommand)]
pub enum SessionCommands {
    /// Start a session on a plan
    Start(StartSessionArgs),
    /// Stop the active session
    Stop(StopSessionArgs),
    /// Show the active session, if any
    Status,
    /// Show one session
    Show(SessionIdArgs),
    /// List sessions
    #[command(alias = "ls")]
    List(ListSessionsArgs),
    /// Show time logged against a plan
    Log(PlanIdArgs),
    /// Delete a session record
    #[command(alias = "rm")]
    Delete(SessionIdArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs CLI commands against a [`Pace`] instance and renders the results.
pub struct Cli {
    pace: Pace,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(pace: Pace, renderer: TerminalRenderer) -> Self {
        Self { pace, renderer }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::List(args) => self.list_plans(&args.into()).await,
            PlanCommands::Show(args) => {
                let plan = self
                    .pace
                    .get_plan(&args.into())
                    .await
                    .context("Failed to show plan")?;
                self.renderer.render(&plan.to_string())
            }
            PlanCommands::Next(args) => {
                let params: PlanId = args.into();
                let next = self
                    .pace
                    .next_chunk(&params)
                    .await
                    .context("Failed to find next chunk")?;
                match next {
                    Some(chunk) => self.renderer.render(&chunk.to_string()),
                    None => self.renderer.render(&format!(
                        "Nothing left to do in plan '{}'.\n",
                        params.plan_id
                    )),
                }
            }
            PlanCommands::Import(args) => {
                let plan = self
                    .pace
                    .import_plan(&args.path)
                    .await
                    .with_context(|| format!("Failed to import {}", args.path.display()))?;
                self.renderer.render(&format!(
                    "Imported plan '{}' with {} chunks\n",
                    plan.id,
                    plan.chunks.len()
                ))
            }
            PlanCommands::Remove(args) => {
                let status = self
                    .pace
                    .remove_plan_result(&args.into())
                    .await
                    .context("Failed to remove plan")?;
                self.renderer.render(&status.to_string())
            }
            PlanCommands::Status(args) => {
                let change = self
                    .pace
                    .set_chunk_status_result(&args.into())
                    .await
                    .context("Failed to set chunk status")?;
                self.renderer.render(&change.to_string())
            }
        }
    }

    pub async fn handle_session_command(&self, command: SessionCommands) -> Result<()> {
        match command {
            SessionCommands::Start(args) => {
                let result = self
                    .pace
                    .start_session_result(&args.into())
                    .await
                    .context("Failed to start session")?;
                self.renderer.render(&result.to_string())
            }
            SessionCommands::Stop(args) => {
                let result = self
                    .pace
                    .stop_session_result(&args.into())
                    .await
                    .context("Failed to stop session")?;
                self.renderer.render(&result.to_string())
            }
            SessionCommands::Status => self.show_active_session().await,
            SessionCommands::Show(args) => {
                let session = self
                    .pace
                    .get_session(&args.into())
                    .await
                    .context("Failed to show session")?;
                self.renderer.render(&session.to_string())
            }
            SessionCommands::List(args) => {
                let sessions = self
                    .pace
                    .list_sessions_result(&args.into())
                    .await
                    .context("Failed to list sessions")?;
                self.renderer.render(&sessions.to_string())
            }
            SessionCommands::Log(args) => {
                let params: PlanId = args.into();
                let stats = self
                    .pace
                    .session_stats(&params)
                    .await
                    .context("Failed to compute session stats")?;
                let sessions = self
                    .pace
                    .sessions_for_plan(&params)
                    .await
                    .context("Failed to list sessions")?;
                self.renderer.render(&format!("{stats}\n{}", Sessions(sessions)))
            }
            SessionCommands::Delete(args) => {
                let status = self
                    .pace
                    .delete_session_result(&args.into())
                    .await
                    .context("Failed to delete session")?;
                self.renderer.render(&status.to_string())
            }
        }
    }

    /// Overview shown when no subcommand is given.
    pub async fn overview(&self) -> Result<()> {
        self.show_active_session().await?;
        println!();
        self.list_plans(&ListPlans::default()).await
    }

    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let summaries = self
            .pace
            .list_plans_summary(params)
            .await
            .context("Failed to list plans")?;
        self.renderer.render(&summaries.to_string())
    }

    async fn show_active_session(&self) -> Result<()> {
        let active = self
            .pace
            .active_session()
            .await
            .context("Failed to read active session")?;
        match active {
            Some(session) => self.renderer.render(&session.to_string()),
            None => self.renderer.render("No active session.\n"),
        }
    }
}
