//! Session model definition and lifecycle invariants.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{PaceError, Result};

/// A recorded interval of work against a plan and, optionally, one chunk.
///
/// A session with no `end_time` is active. It becomes completed exactly once
/// and never goes back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Generated identifier (UUIDv7)
    pub id: String,

    /// Plan the time was spent on
    pub plan_id: String,

    /// Chunk the time was spent on, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_id: Option<String>,

    /// When work started (UTC)
    pub start_time: Timestamp,

    /// When work stopped; `None` while active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Timestamp>,

    /// Whole minutes worked, zero while active
    #[serde(default)]
    pub duration_minutes: u32,

    /// Free text, only ever appended to
    #[serde(default)]
    pub notes: String,

    /// URIs or paths produced during the session, only ever appended to
    #[serde(default)]
    pub artifacts: Vec<String>,

    /// Flashcards created while studying
    #[serde(default)]
    pub cards_created: u32,
}

impl Session {
    /// Whether the session is still running.
    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }

    /// Appends notes on a new line, never replacing what is there.
    pub fn append_notes(&mut self, notes: &str) {
        let notes = notes.trim();
        if notes.is_empty() {
            return;
        }
        if !self.notes.is_empty() {
            self.notes.push('\n');
        }
        self.notes.push_str(notes);
    }

    /// Appends artifacts in order. Duplicates are kept.
    pub fn add_artifacts<I, S>(&mut self, artifacts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.artifacts.extend(artifacts.into_iter().map(Into::into));
    }

    /// Closes the session at `end`, computing the whole-minute duration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the session is already completed or if
    /// `end` is not strictly after `start_time`.
    pub fn complete(&mut self, end: Timestamp) -> Result<()> {
        if !self.is_active() {
            return Err(PaceError::validation("end_time")
                .with_reason(format!("session {} is already completed", self.id)));
        }
        if end <= self.start_time {
            return Err(PaceError::validation("end_time").with_reason(format!(
                "end time {end} must be after start time {}",
                self.start_time
            )));
        }
        self.duration_minutes = elapsed_minutes(self.start_time, end);
        self.end_time = Some(end);
        Ok(())
    }

    /// Verifies the lifecycle invariants for whichever state the session is
    /// in.
    pub fn check_invariants(&self) -> Result<()> {
        match self.end_time {
            None if self.duration_minutes != 0 => Err(PaceError::validation("duration")
                .with_reason("an active session must have zero duration")),
            None => Ok(()),
            Some(end) if end <= self.start_time => Err(PaceError::validation("end_time")
                .with_reason("end time must be strictly after start time")),
            Some(end) => {
                let expected = elapsed_minutes(self.start_time, end);
                if expected == self.duration_minutes {
                    Ok(())
                } else {
                    Err(PaceError::validation("duration").with_reason(format!(
                        "expected {expected} minutes, recorded {}",
                        self.duration_minutes
                    )))
                }
            }
        }
    }

    /// Minutes elapsed so far for an active session, or the recorded duration
    /// once completed.
    pub fn minutes_at(&self, now: Timestamp) -> u32 {
        match self.end_time {
            Some(_) => self.duration_minutes,
            None => elapsed_minutes(self.start_time, now),
        }
    }
}

/// Whole minutes between two instants, rounded down. Zero when `end` is not
/// after `start`.
pub fn elapsed_minutes(start: Timestamp, end: Timestamp) -> u32 {
    const NANOS_PER_MINUTE: i128 = 60 * 1_000_000_000;
    let nanos = end.as_nanosecond() - start.as_nanosecond();
    if nanos <= 0 {
        return 0;
    }
    u32::try_from(nanos / NANOS_PER_MINUTE).unwrap_or(u32::MAX)
}
