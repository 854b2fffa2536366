//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{PlanSummary, Session};

/// Newtype wrapper for displaying collections of plan summaries.
///
/// Consumers print their own title; an empty collection renders as a single
/// "No plans found." line.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use pace_core::{
///     display::PlanSummaries,
///     models::{Chunk, Plan, PlanSummary},
/// };
///
/// let mut plan = Plan::new("rust-basics", "Rust Basics", 1.0, Timestamp::now());
/// plan.chunks.push(Chunk::new("ownership", "Ownership", 60));
///
/// let summaries = PlanSummaries(vec![PlanSummary::from(&plan)]);
/// assert!(summaries.to_string().contains("Rust Basics (ID: rust-basics)"));
/// ```
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }
        for plan in &self.0 {
            write!(f, "{plan}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a session log, newest first.
pub struct Sessions(pub Vec<Session>);

impl Sessions {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of sessions in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the sessions.
    pub fn iter(&self) -> std::slice::Iter<'_, Session> {
        self.0.iter()
    }

    /// Sum of completed session durations.
    pub fn total_minutes(&self) -> u32 {
        self.0.iter().map(|s| s.duration_minutes).sum()
    }
}

impl Index<usize> for Sessions {
    type Output = Session;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Sessions {
    type Item = &'a Session;
    type IntoIter = std::slice::Iter<'a, Session>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Sessions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No sessions found.");
        }
        for session in &self.0 {
            write!(f, "{session}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{completed_session, sample_plan, ts};

    #[test]
    fn test_plan_summaries_display() {
        let empty = PlanSummaries(vec![]);
        assert_eq!(empty.to_string(), "No plans found.\n");

        let first = PlanSummary::from(&sample_plan());
        let mut second = first.clone();
        second.id = "q".to_string();
        second.title = "Second plan".to_string();

        let summaries = PlanSummaries(vec![first, second]);
        let output = summaries.to_string();
        assert_eq!(summaries.len(), 2);
        assert!(output.contains("## Sample plan (ID: p)"));
        assert!(output.contains("## Second plan (ID: q)"));
        assert!(!output.starts_with("# "));
    }

    #[test]
    fn test_sessions_display() {
        assert_eq!(Sessions(vec![]).to_string(), "No sessions found.\n");

        let sessions = Sessions(vec![
            completed_session("b", "p", Some("d"), ts(3600), 25),
            completed_session("a", "p", Some("c"), ts(0), 40),
        ]);
        let output = sessions.to_string();
        assert_eq!(sessions.total_minutes(), 65);
        assert!(output.find("## Session b") < output.find("## Session a"));
        assert_eq!(sessions[1].id, "a");
    }
}
