//! Plan summary and session statistics types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ChunkStatus, Plan, PlanStatus, Session};

/// Compact view of a plan with derived progress figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    /// Plan ID
    pub id: String,
    /// Title of the plan
    pub title: String,
    /// Plan status
    pub status: PlanStatus,
    /// Tags in document order
    pub tags: Vec<String>,
    /// Completed fraction in `[0, 1]`
    pub progress: f64,
    /// Total number of chunks
    pub total_chunks: u32,
    /// Number of completed chunks
    pub completed_chunks: u32,
    /// Hours budgeted for completed chunks
    pub completed_hours: f64,
    /// Hours budgeted for chunks still to do
    pub remaining_hours: f64,
    /// Title of the chunk to work on next
    pub next_chunk: Option<String>,
}

impl From<&Plan> for PlanSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id.clone(),
            title: plan.title.clone(),
            status: plan.status,
            tags: plan.tags.clone(),
            progress: plan.progress(),
            total_chunks: plan.chunks.len() as u32,
            completed_chunks: plan.count(ChunkStatus::Completed) as u32,
            completed_hours: plan.completed_hours(),
            remaining_hours: plan.remaining_hours(),
            next_chunk: plan.next_chunk().map(|c| c.title.clone()),
        }
    }
}

/// Time logged against a plan, aggregated from its completed sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionStats {
    /// Plan the figures belong to
    pub plan_id: String,
    /// Number of completed sessions
    pub sessions: u32,
    /// Sum of completed session durations
    pub total_minutes: u32,
    /// Minutes per chunk ID; sessions without a chunk are not listed
    pub minutes_by_chunk: BTreeMap<String, u32>,
    /// Flashcards created across all sessions
    pub cards_created: u32,
}

impl SessionStats {
    /// Aggregates completed sessions for `plan_id`. Active sessions and
    /// sessions for other plans are ignored.
    pub fn from_sessions<'a>(
        plan_id: &str,
        sessions: impl IntoIterator<Item = &'a Session>,
    ) -> Self {
        let mut stats = Self {
            plan_id: plan_id.to_string(),
            ..Default::default()
        };
        for session in sessions
            .into_iter()
            .filter(|s| s.plan_id == plan_id && !s.is_active())
        {
            stats.sessions += 1;
            stats.total_minutes += session.duration_minutes;
            stats.cards_created += session.cards_created;
            if let Some(chunk_id) = &session.chunk_id {
                *stats.minutes_by_chunk.entry(chunk_id.clone()).or_default() +=
                    session.duration_minutes;
            }
        }
        stats
    }

    /// Total logged time in hours.
    pub fn total_hours(&self) -> f64 {
        f64::from(self.total_minutes) / 60.0
    }
}
