//! Chunk model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::ChunkStatus;
use crate::error::{PaceError, Result};

/// A single time-boxed unit of work within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Chunk {
    /// Identifier, unique within the owning plan
    pub id: String,

    /// Brief title of the chunk
    pub title: String,

    /// Time-box target in minutes
    pub duration_minutes: u32,

    /// Current status of the chunk
    #[serde(default)]
    pub status: ChunkStatus,

    /// What the learner should be able to do afterwards
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objectives: Vec<String>,

    /// Reading material, links, or file paths
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,

    /// Tangible output expected from the chunk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliverable: Option<String>,
}

impl Chunk {
    /// Creates a not-started chunk with no objectives or resources.
    pub fn new(id: impl Into<String>, title: impl Into<String>, duration_minutes: u32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_minutes,
            ..Default::default()
        }
    }

    /// Checks the chunk on its own. `field` prefixes error field names, e.g.
    /// `chunks[2]`.
    ///
    /// Beyond emptiness, every text value must be one the document format can
    /// carry unchanged: IDs sit inside `{#...}` and titles, list items and
    /// deliverables are single trimmed lines.
    pub fn validate(&self, field: &str) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(PaceError::validation(format!("{field}.id")).with_reason("must not be empty"));
        }
        if self.id.contains(|c: char| c.is_whitespace() || c == '}') {
            return Err(PaceError::validation(format!("{field}.id"))
                .with_reason(format!("'{}' must not contain whitespace or '}}'", self.id)));
        }
        check_line(&format!("{field}.title"), &self.title)?;
        if self.duration_minutes == 0 {
            return Err(PaceError::validation(format!("{field}.duration"))
                .with_reason("must be a positive number of minutes"));
        }
        for (index, objective) in self.objectives.iter().enumerate() {
            check_line(&format!("{field}.objectives[{index}]"), objective)?;
        }
        for (index, resource) in self.resources.iter().enumerate() {
            check_line(&format!("{field}.resources[{index}]"), resource)?;
        }
        if let Some(deliverable) = &self.deliverable {
            check_line(&format!("{field}.deliverable"), deliverable)?;
        }
        Ok(())
    }

    /// Target duration expressed in hours.
    pub fn hours(&self) -> f64 {
        f64::from(self.duration_minutes) / 60.0
    }
}

/// A non-empty single line without surrounding whitespace.
fn check_line(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PaceError::validation(field).with_reason("must not be empty"));
    }
    if value.contains(['\n', '\r']) {
        return Err(PaceError::validation(field).with_reason("must be a single line"));
    }
    if value.trim() != value {
        return Err(
            PaceError::validation(field).with_reason("must not start or end with whitespace")
        );
    }
    Ok(())
}
