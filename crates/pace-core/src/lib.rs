//! Core library for Pace: time-boxed learning plans with tracked work
//! sessions.
//!
//! A learning plan is a Markdown document with a YAML header, split into
//! chunks that each carry a target duration. Work sessions are logged in a
//! SQLite database against a plan and, optionally, one chunk. Once the time
//! logged against a chunk reaches its target, the chunk is marked completed
//! in the document.
//!
//! # Layers
//!
//! - [`codec`]: pure parsing and formatting of plan documents
//! - [`models`]: plans, chunks, sessions, and derived figures
//! - [`library`] and [`db`]: plan files on disk and the session store
//! - [`tracker`] and [`progress`]: the session state machine and chunk
//!   completion, written against the [`ports`] traits
//! - [`Pace`]: async facade used by the CLI and the MCP server
//! - [`display`]: Markdown rendering for terminals and tool responses
//!
//! # Quick Start
//!
//! ```rust
//! use pace_core::{PaceBuilder, params::{ListPlans, PlanId}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pace = PaceBuilder::new()
//!     .with_database_path(Some("pace.db"))
//!     .with_plans_dir(Some("plans"))
//!     .build()
//!     .await?;
//!
//! pace.import_plan("rust-basics.md".as_ref()).await?;
//! for plan in &pace.list_plans_summary(&ListPlans::default()).await? {
//!     println!("{} ({:.0}%)", plan.title, plan.progress * 100.0);
//! }
//!
//! let stats = pace
//!     .session_stats(&PlanId { plan_id: "rust-basics".to_string() })
//!     .await?;
//! println!("{stats}");
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod library;
pub mod models;
pub mod pace;
pub mod params;
pub mod ports;
pub mod progress;
pub mod tracker;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::Config;
pub use db::Database;
pub use display::{
    LocalDateTime, Minutes, OperationStatus, PlanSummaries, Sessions, StartResult, StatusChange,
    StopResult,
};
pub use error::{PaceError, Result};
pub use library::PlanLibrary;
pub use models::{
    Chunk, ChunkStatus, Plan, PlanFilter, PlanStatus, PlanSummary, Session, SessionFilter,
    SessionStats,
};
pub use pace::{Pace, PaceBuilder};
pub use ports::{ChunkState, PlanAccessor, SessionStore};
pub use progress::{Inference, ProgressInferencer};
pub use tracker::{Clock, SessionTracker, SideEffectObserver, SystemClock};
