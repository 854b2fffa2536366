//! Plan document codec.
//!
//! A plan document is a YAML frontmatter block fenced by `---` lines,
//! followed by a Markdown body of chunk sections:
//!
//! ```text
//! ---
//! id: rust-basics
//! title: Rust Basics
//! created: 2024-01-15T10:00:00Z
//! updated: 2024-01-15T10:00:00Z
//! total_hours: 3
//! status: in-progress
//! tags:
//! - rust
//! ---
//!
//! # Rust Basics
//!
//! ## Chunk 1: Ownership {#ownership}
//!
//! **Duration**: 1 hour
//! **Status**: completed
//! **Objectives**:
//! - Explain moves and borrows
//! **Resources**:
//! - https://doc.rust-lang.org/book/ch04-00-understanding-ownership.html
//! **Deliverable**: A borrow-checker cheat sheet
//!
//! ---
//!
//! ## Chunk 2: Traits {#traits}
//! ...
//! ```
//!
//! [`parse`] and [`format`] are pure: they never touch the file system.
//! [`parse`] checks document structure only; call
//! [`Plan::validate`](crate::models::Plan::validate) for semantic checks.

use std::fmt;

mod body;
mod duration;
mod frontmatter;


pub use body::{BodyLine, BodyParser, BodyState};
pub use duration::{format_duration, parse_duration};

use self::frontmatter::Frontmatter;
use crate::{
    error::{PaceError, Result},
    models::Plan,
};

/// Frontmatter fence line.
pub const FENCE: &str = "---";

/// Parses a plan document.
///
/// # Errors
///
/// Returns [`PaceError::Format`] when the opening or closing fence is
/// missing, the header is not valid YAML, or a duration cannot be read, and
/// [`PaceError::Validation`] when a status value is unknown.
pub fn parse(text: &str) -> Result<Plan> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.lines().collect();

    if lines.first().copied() != Some(FENCE) {
        return Err(PaceError::format("missing frontmatter delimiter"));
    }
    let closing = lines
        .iter()
        .skip(1)
        .position(|line| *line == FENCE)
        .map(|offset| offset + 1)
        .ok_or_else(|| PaceError::format("missing closing frontmatter delimiter"))?;

    let header = lines[1..closing].join("\n");
    let mut plan = Frontmatter::from_yaml(&header)?.into_plan()?;

    let mut parser = BodyParser::new();
    for (index, line) in lines.iter().enumerate().skip(closing + 1) {
        parser.feed(index + 1, line)?;
    }
    plan.chunks = parser.finish();

    Ok(plan)
}

/// Renders a plan as a document that [`parse`] reads back.
///
/// # Errors
///
/// Returns [`PaceError::Yaml`] if the header cannot be serialized.
pub fn format(plan: &Plan) -> Result<String> {
    let header = Frontmatter::from(plan).to_yaml()?;
    Ok(Document { plan, header: &header }.to_string())
}

/// A plan together with its serialized frontmatter.
struct Document<'a> {
    plan: &'a Plan,
    header: &'a str,
}

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FENCE}")?;
        f.write_str(self.header)?;
        if !self.header.ends_with('\n') {
            writeln!(f)?;
        }
        writeln!(f, "{FENCE}")?;
        writeln!(f)?;
        writeln!(f, "# {}", self.plan.title)?;

        for (index, chunk) in self.plan.chunks.iter().enumerate() {
            writeln!(f)?;
            if index > 0 {
                writeln!(f, "{FENCE}")?;
                writeln!(f)?;
            }
            writeln!(f, "## Chunk {}: {} {{#{}}}", index + 1, chunk.title, chunk.id)?;
            writeln!(f)?;
            writeln!(f, "**Duration**: {}", format_duration(chunk.duration_minutes))?;
            writeln!(f, "**Status**: {}", chunk.status.as_str())?;
            if !chunk.objectives.is_empty() {
                writeln!(f, "**Objectives**:")?;
                for objective in &chunk.objectives {
                    writeln!(f, "- {objective}")?;
                }
            }
            if !chunk.resources.is_empty() {
                writeln!(f, "**Resources**:")?;
                for resource in &chunk.resources {
                    writeln!(f, "- {resource}")?;
                }
            }
            if let Some(deliverable) = &chunk.deliverable {
                writeln!(f, "**Deliverable**: {deliverable}")?;
            }
        }
        Ok(())
    }
}
