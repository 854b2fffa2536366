//! Line-oriented state machine over the Markdown body.
//!
//! The body vocabulary is small and fixed: chunk headings, five bold markers,
//! and bullet items. Everything else is skipped so that hand-written notes
//! and future additions do not break older readers.

use std::sync::LazyLock;

use regex::Regex;

use super::duration::parse_duration;
use crate::{
    error::{PaceError, Result},
    models::{Chunk, ChunkStatus},
};

static CHUNK_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^##\s+Chunk\s+(\d+):\s*(.+?)\s*\{#([^}\s]+)\}\s*$")
        .expect("chunk header pattern compiles")
});

// Accepts both `**Duration**:` and `**Duration:**`.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\*\*(duration|status|deliverable|objectives|resources)(?::\*\*|\*\*:)\s*(.*)$")
        .expect("marker pattern compiles")
});

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+(.*\S)\s*$").expect("list item pattern compiles"));

/// Where the scanner is within the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    /// Before the first chunk heading
    OutsideChunk,
    /// Inside a chunk, outside any list
    InChunk,
    /// Collecting `**Objectives**:` items
    InObjectives,
    /// Collecting `**Resources**:` items
    InResources,
}

/// One recognised line of the body.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyLine<'a> {
    /// `## Chunk <n>: <title> {#<id>}`
    ChunkHeader { title: &'a str, id: &'a str },
    /// `**Duration**: <value>`
    Duration(&'a str),
    /// `**Status**: <value>`
    Status(&'a str),
    /// `**Deliverable**: <value>`
    Deliverable(&'a str),
    /// `**Objectives**:` with an optional inline first item
    Objectives(&'a str),
    /// `**Resources**:` with an optional inline first item
    Resources(&'a str),
    /// `- item` or `* item`
    ListItem(&'a str),
    /// Empty or whitespace-only
    Blank,
    /// Anything else
    Other,
}

impl<'a> BodyLine<'a> {
    /// Classifies a single line.
    pub fn classify(line: &'a str) -> Self {
        if line.trim().is_empty() {
            return Self::Blank;
        }
        if let Some(caps) = CHUNK_HEADER_RE.captures(line) {
            let (Some(title), Some(id)) = (caps.get(2), caps.get(3)) else {
                return Self::Other;
            };
            return Self::ChunkHeader {
                title: title.as_str(),
                id: id.as_str(),
            };
        }
        if let Some(caps) = MARKER_RE.captures(line.trim_end()) {
            let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) else {
                return Self::Other;
            };
            let value = value.as_str().trim();
            return match name.as_str().to_ascii_lowercase().as_str() {
                "duration" => Self::Duration(value),
                "status" => Self::Status(value),
                "deliverable" => Self::Deliverable(value),
                "objectives" => Self::Objectives(value),
                _ => Self::Resources(value),
            };
        }
        if let Some(item) = LIST_ITEM_RE.captures(line).and_then(|caps| caps.get(1)) {
            return Self::ListItem(item.as_str().trim());
        }
        Self::Other
    }
}

/// Accumulates chunks while scanning body lines in order.
#[derive(Debug)]
pub struct BodyParser {
    state: BodyState,
    chunks: Vec<Chunk>,
    current: Option<Chunk>,
}

impl Default for BodyParser {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyParser {
    /// Creates a parser positioned before the first chunk.
    pub fn new() -> Self {
        Self {
            state: BodyState::OutsideChunk,
            chunks: Vec::new(),
            current: None,
        }
    }

    /// Current scanner state.
    pub fn state(&self) -> BodyState {
        self.state
    }

    /// Feeds one line. `line_no` is the 1-based line number within the whole
    /// document and is only used for error reporting.
    pub fn feed(&mut self, line_no: usize, line: &str) -> Result<()> {
        let line = BodyLine::classify(line);

        if let BodyLine::ChunkHeader { title, id } = line {
            self.close_chunk();
            self.current = Some(Chunk {
                id: id.to_string(),
                title: title.to_string(),
                status: ChunkStatus::NotStarted,
                ..Default::default()
            });
            self.state = BodyState::InChunk;
            return Ok(());
        }

        match self.state {
            BodyState::OutsideChunk => Ok(()),
            BodyState::InObjectives | BodyState::InResources => match line {
                BodyLine::Blank => Ok(()),
                BodyLine::ListItem(item) => {
                    self.push_item(item);
                    Ok(())
                }
                other => {
                    self.state = BodyState::InChunk;
                    self.apply_marker(line_no, other)
                }
            },
            BodyState::InChunk => self.apply_marker(line_no, line),
        }
    }

    /// Closes the last chunk and returns every chunk in document order.
    pub fn finish(mut self) -> Vec<Chunk> {
        self.close_chunk();
        self.chunks
    }

    fn apply_marker(&mut self, line_no: usize, line: BodyLine<'_>) -> Result<()> {
        let index = self.chunks.len();
        let Some(chunk) = self.current.as_mut() else {
            return Ok(());
        };

        match line {
            BodyLine::Duration(value) => {
                chunk.duration_minutes = parse_duration(value)
                    .map_err(|reason| PaceError::format_at(line_no, reason))?;
            }
            BodyLine::Status(value) => {
                chunk.status = value.parse::<ChunkStatus>().map_err(|reason| {
                    PaceError::validation(format!("chunks[{index}].status")).with_reason(reason)
                })?;
            }
            BodyLine::Deliverable(value) => {
                chunk.deliverable = (!value.is_empty()).then(|| value.to_string());
            }
            BodyLine::Objectives(inline) => {
                self.state = BodyState::InObjectives;
                if !inline.is_empty() {
                    self.push_item(inline);
                }
            }
            BodyLine::Resources(inline) => {
                self.state = BodyState::InResources;
                if !inline.is_empty() {
                    self.push_item(inline);
                }
            }
            BodyLine::ChunkHeader { .. }
            | BodyLine::ListItem(_)
            | BodyLine::Blank
            | BodyLine::Other => {}
        }
        Ok(())
    }

    fn push_item(&mut self, item: &str) {
        let Some(chunk) = self.current.as_mut() else {
            return;
        };
        match self.state {
            BodyState::InObjectives => chunk.objectives.push(item.to_string()),
            BodyState::InResources => chunk.resources.push(item.to_string()),
            BodyState::OutsideChunk | BodyState::InChunk => {}
        }
    }

    fn close_chunk(&mut self) {
        if let Some(chunk) = self.current.take() {
            self.chunks.push(chunk);
        }
        self.state = BodyState::OutsideChunk;
    }
}
