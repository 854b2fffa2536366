//! Display implementations for domain models.
//!
//! Everything renders as Markdown so the CLI can pass it through the
//! terminal renderer and the MCP server can return it verbatim.

use std::fmt;

use super::datetime::{LocalDateTime, Minutes};
use crate::{
    codec::format_duration,
    models::{Chunk, ChunkStatus, Plan, PlanStatus, PlanSummary, Session, SessionStats},
};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ChunkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn percent(fraction: f64) -> u32 {
    (fraction * 100.0).round() as u32
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", self.id)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(
            f,
            "- Progress: {}/{} chunks ({}%)",
            self.count(ChunkStatus::Completed),
            self.chunks.len(),
            percent(self.progress())
        )?;
        writeln!(
            f,
            "- Hours: {:.1} done, {:.1} remaining of {} planned",
            self.completed_hours(),
            self.remaining_hours(),
            self.total_hours
        )?;
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if self.chunks.is_empty() {
            writeln!(f, "\nNo chunks in this plan.")?;
        } else {
            writeln!(f, "\n## Chunks")?;
            writeln!(f)?;
            for chunk in &self.chunks {
                write!(f, "{chunk}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title, self.status.with_icon())?;
        writeln!(f)?;
        writeln!(f, "- ID: `{}`", self.id)?;
        writeln!(f, "- Duration: {}", format_duration(self.duration_minutes))?;
        if let Some(deliverable) = &self.deliverable {
            writeln!(f, "- Deliverable: {deliverable}")?;
        }
        writeln!(f)?;

        for (heading, items) in [("Objectives", &self.objectives), ("Resources", &self.resources)] {
            if items.is_empty() {
                continue;
            }
            writeln!(f, "#### {heading}")?;
            writeln!(f)?;
            for item in items {
                writeln!(f, "- {item}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Session {}", self.id)?;
        writeln!(f)?;
        writeln!(f, "- Plan: {}", self.plan_id)?;
        if let Some(chunk_id) = &self.chunk_id {
            writeln!(f, "- Chunk: {chunk_id}")?;
        }
        writeln!(f, "- Started: {}", LocalDateTime(&self.start_time))?;
        match &self.end_time {
            Some(end) => {
                writeln!(f, "- Ended: {}", LocalDateTime(end))?;
                writeln!(f, "- Duration: {}", Minutes(self.duration_minutes))?;
            }
            None => writeln!(f, "- Status: active")?,
        }
        if self.cards_created > 0 {
            writeln!(f, "- Cards created: {}", self.cards_created)?;
        }

        if !self.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "### Notes")?;
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }

        if !self.artifacts.is_empty() {
            writeln!(f)?;
            writeln!(f, "### Artifacts")?;
            writeln!(f)?;
            for artifact in &self.artifacts {
                writeln!(f, "- {artifact}")?;
            }
        }

        writeln!(f)
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({}/{})",
            self.title, self.id, self.completed_chunks, self.total_chunks
        )?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", self.status)?;
        writeln!(f, "- **Progress**: {}%", percent(self.progress))?;
        writeln!(f, "- **Remaining**: {:.1} hours", self.remaining_hours)?;
        if let Some(next) = &self.next_chunk {
            writeln!(f, "- **Next**: {next}")?;
        }
        if !self.tags.is_empty() {
            writeln!(f, "- **Tags**: {}", self.tags.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Time logged on {}", self.plan_id)?;
        writeln!(f)?;
        writeln!(f, "- Sessions: {}", self.sessions)?;
        writeln!(f, "- Total: {}", Minutes(self.total_minutes))?;
        if self.cards_created > 0 {
            writeln!(f, "- Cards created: {}", self.cards_created)?;
        }

        if !self.minutes_by_chunk.is_empty() {
            writeln!(f)?;
            writeln!(f, "### By chunk")?;
            writeln!(f)?;
            for (chunk_id, minutes) in &self.minutes_by_chunk {
                writeln!(f, "- {chunk_id}: {}", Minutes(*minutes))?;
            }
        }

        Ok(())
    }
}
