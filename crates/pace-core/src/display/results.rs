//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::datetime::Minutes;
use crate::models::{ChunkStatus, Session};

/// Outcome of starting a session.
pub struct StartResult {
    pub session: Session,
}

impl StartResult {
    /// Create a new StartResult wrapper.
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl fmt::Display for StartResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Started session on plan '{}'", self.session.plan_id)?;
        if let Some(chunk_id) = &self.session.chunk_id {
            write!(f, ", chunk '{chunk_id}'")?;
        }
        writeln!(f)?;
        writeln!(f)?;
        write!(f, "{}", self.session)
    }
}

/// Outcome of stopping the active session.
pub struct StopResult {
    pub session: Session,
}

impl StopResult {
    /// Create a new StopResult wrapper.
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl fmt::Display for StopResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Stopped session after {}",
            Minutes(self.session.duration_minutes)
        )?;
        writeln!(f)?;
        write!(f, "{}", self.session)
    }
}

/// A chunk status changed by hand.
pub struct StatusChange {
    pub plan_id: String,
    pub chunk_id: String,
    pub previous: ChunkStatus,
    pub current: ChunkStatus,
}

impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.previous == self.current {
            writeln!(
                f,
                "Chunk '{}' in plan '{}' is already {}",
                self.chunk_id, self.plan_id, self.current
            )
        } else {
            writeln!(
                f,
                "Chunk '{}' in plan '{}': {} → {}",
                self.chunk_id,
                self.plan_id,
                self.previous.with_icon(),
                self.current.with_icon()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{completed_session, ts};

    #[test]
    fn test_stop_result_reports_duration() {
        let session = completed_session("s1", "p", Some("c"), ts(0), 90);
        let output = StopResult::new(session).to_string();
        assert!(output.starts_with("Stopped session after 1 h 30 min\n"));
        assert!(output.contains("## Session s1"));
    }

    #[test]
    fn test_start_result_names_chunk() {
        let mut session = completed_session("s1", "p", Some("c"), ts(0), 1);
        session.end_time = None;
        session.duration_minutes = 0;
        let output = StartResult::new(session).to_string();
        assert!(output.starts_with("Started session on plan 'p', chunk 'c'\n"));
    }

    #[test]
    fn test_status_change() {
        let change = StatusChange {
            plan_id: "p".to_string(),
            chunk_id: "c".to_string(),
            previous: ChunkStatus::InProgress,
            current: ChunkStatus::Completed,
        };
        assert_eq!(
            change.to_string(),
            "Chunk 'c' in plan 'p': ➤ In Progress → ✓ Completed\n"
        );
    }
}
