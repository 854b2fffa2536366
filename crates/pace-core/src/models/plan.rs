//! Plan model definition and related functionality.

use std::collections::HashSet;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Chunk, ChunkStatus, PlanStatus};
use crate::error::{PaceError, Result};

/// A learning curriculum: metadata plus an ordered list of chunks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Slug identifying the plan, also its file stem
    pub id: String,

    /// Title of the plan
    pub title: String,

    /// Timestamp when the plan was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plan was last modified (UTC)
    pub updated_at: Timestamp,

    /// Estimated effort in hours as entered by the user
    pub total_hours: f64,

    /// Overall status of the plan
    #[serde(default)]
    pub status: PlanStatus,

    /// Free-form labels, order preserved
    #[serde(default)]
    pub tags: Vec<String>,

    /// Chunks in the order they should be worked through
    #[serde(default)]
    pub chunks: Vec<Chunk>,
}

impl Plan {
    /// Creates an empty not-started plan stamped with `now`.
    pub fn new(id: impl Into<String>, title: impl Into<String>, total_hours: f64, now: Timestamp) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            created_at: now,
            updated_at: now,
            total_hours,
            status: PlanStatus::NotStarted,
            tags: Vec::new(),
            chunks: Vec::new(),
        }
    }

    /// Checks every invariant and returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(PaceError::validation("id").with_reason("must not be empty"));
        }
        if self.title.trim().is_empty() {
            return Err(PaceError::validation("title").with_reason("must not be empty"));
        }
        if !self.total_hours.is_finite() || self.total_hours <= 0.0 {
            return Err(PaceError::validation("total_hours")
                .with_reason(format!("must be positive, got {}", self.total_hours)));
        }
        // The epoch stands in for a timestamp missing from the document.
        if self.created_at == Timestamp::UNIX_EPOCH {
            return Err(PaceError::validation("created").with_reason("timestamp is not set"));
        }
        if self.updated_at == Timestamp::UNIX_EPOCH {
            return Err(PaceError::validation("updated").with_reason("timestamp is not set"));
        }
        if self.updated_at < self.created_at {
            return Err(PaceError::validation("updated")
                .with_reason("must not be earlier than the created timestamp"));
        }

        let mut seen = HashSet::new();
        for (index, chunk) in self.chunks.iter().enumerate() {
            let field = format!("chunks[{index}]");
            chunk.validate(&field)?;
            if !seen.insert(chunk.id.as_str()) {
                return Err(PaceError::validation(format!("{field}.id"))
                    .with_reason(format!("duplicate chunk ID '{}'", chunk.id)));
            }
        }

        Ok(())
    }

    /// Fraction of chunks completed, in `[0, 1]`. Skipped chunks count
    /// towards the total but never as completed.
    pub fn progress(&self) -> f64 {
        if self.chunks.is_empty() {
            return 0.0;
        }
        self.count(ChunkStatus::Completed) as f64 / self.chunks.len() as f64
    }

    /// Sum of every chunk's target duration.
    pub fn total_minutes(&self) -> u32 {
        self.chunks.iter().map(|c| c.duration_minutes).sum()
    }

    /// Hours budgeted for completed chunks.
    pub fn completed_hours(&self) -> f64 {
        self.minutes_where(|status| status == ChunkStatus::Completed) as f64 / 60.0
    }

    /// Hours budgeted for chunks still to do.
    pub fn remaining_hours(&self) -> f64 {
        self.minutes_where(|status| !status.is_finished()) as f64 / 60.0
    }

    /// The chunk to work on next: the first in progress, otherwise the first
    /// not started.
    pub fn next_chunk(&self) -> Option<&Chunk> {
        self.chunks
            .iter()
            .find(|c| c.status == ChunkStatus::InProgress)
            .or_else(|| {
                self.chunks
                    .iter()
                    .find(|c| c.status == ChunkStatus::NotStarted)
            })
    }

    /// Number of chunks with the given status.
    pub fn count(&self, status: ChunkStatus) -> usize {
        self.chunks.iter().filter(|c| c.status == status).count()
    }

    /// Looks up a chunk by ID.
    pub fn chunk(&self, chunk_id: &str) -> Option<&Chunk> {
        self.chunks.iter().find(|c| c.id == chunk_id)
    }

    /// Looks up a chunk by ID for modification.
    pub fn chunk_mut(&mut self, chunk_id: &str) -> Option<&mut Chunk> {
        self.chunks.iter_mut().find(|c| c.id == chunk_id)
    }

    /// Sets a chunk's status and bumps `updated_at`. Returns the previous
    /// status.
    pub fn set_chunk_status(
        &mut self,
        chunk_id: &str,
        status: ChunkStatus,
        now: Timestamp,
    ) -> Result<ChunkStatus> {
        let plan_id = self.id.clone();
        let chunk = self
            .chunk_mut(chunk_id)
            .ok_or_else(|| PaceError::ChunkNotFound {
                plan_id,
                chunk_id: chunk_id.to_string(),
            })?;
        let previous = chunk.status;
        chunk.status = status;
        if now > self.updated_at {
            self.updated_at = now;
        }
        Ok(previous)
    }

    fn minutes_where(&self, predicate: impl Fn(ChunkStatus) -> bool) -> u32 {
        self.chunks
            .iter()
            .filter(|c| predicate(c.status))
            .map(|c| c.duration_minutes)
            .sum()
    }
}
