//! Status enumerations for plans and chunks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of plan statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PlanStatus {
    /// No work recorded yet
    #[default]
    NotStarted,

    /// At least one chunk is being worked on
    InProgress,

    /// Every chunk is done
    Completed,

    /// Abandoned on purpose
    Skipped,

    /// Hidden from normal views
    Archived,
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "not-started" => Ok(PlanStatus::NotStarted),
            "in-progress" => Ok(PlanStatus::InProgress),
            "completed" => Ok(PlanStatus::Completed),
            "skipped" => Ok(PlanStatus::Skipped),
            "archived" => Ok(PlanStatus::Archived),
            _ => Err(format!("Invalid plan status: {s}")),
        }
    }
}

impl PlanStatus {
    /// Document and database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::NotStarted => "not-started",
            PlanStatus::InProgress => "in-progress",
            PlanStatus::Completed => "completed",
            PlanStatus::Skipped => "skipped",
            PlanStatus::Archived => "archived",
        }
    }
}

/// Type-safe enumeration of chunk statuses.
///
/// Mirrors [`PlanStatus`] without `archived`, which only applies to whole
/// plans.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ChunkStatus {
    /// Chunk has not been touched
    #[default]
    NotStarted,

    /// Chunk is being worked on
    InProgress,

    /// Chunk reached its time-box or was marked done
    Completed,

    /// Chunk was deliberately passed over
    Skipped,
}

impl FromStr for ChunkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "not-started" => Ok(ChunkStatus::NotStarted),
            "in-progress" => Ok(ChunkStatus::InProgress),
            "completed" => Ok(ChunkStatus::Completed),
            "skipped" => Ok(ChunkStatus::Skipped),
            _ => Err(format!("Invalid chunk status: {s}")),
        }
    }
}

impl ChunkStatus {
    /// Document and database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkStatus::NotStarted => "not-started",
            ChunkStatus::InProgress => "in-progress",
            ChunkStatus::Completed => "completed",
            ChunkStatus::Skipped => "skipped",
        }
    }

    /// Completed and skipped chunks need no further work.
    pub fn is_finished(&self) -> bool {
        matches!(self, ChunkStatus::Completed | ChunkStatus::Skipped)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pace_core::models::ChunkStatus;
    ///
    /// assert_eq!(ChunkStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ChunkStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(ChunkStatus::NotStarted.with_icon(), "○ Not Started");
    /// assert_eq!(ChunkStatus::Skipped.with_icon(), "⤼ Skipped");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ChunkStatus::Completed => "✓ Completed",
            ChunkStatus::InProgress => "➤ In Progress",
            ChunkStatus::NotStarted => "○ Not Started",
            ChunkStatus::Skipped => "⤼ Skipped",
        }
    }
}
