//! Filter types for querying plans and sessions.

use jiff::Timestamp;

use super::{Plan, PlanStatus};
use crate::params::{ListPlans, ListSessions};

/// Filter options for listing plans from the library.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// Filter by plan status
    pub status: Option<PlanStatus>,

    /// Keep only plans carrying this tag
    pub tag: Option<String>,

    /// Show archived plans too
    pub include_archived: bool,
}

impl PlanFilter {
    /// Filter that keeps only archived plans.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pace_core::models::{PlanFilter, PlanStatus};
    ///
    /// let filter = PlanFilter::archived(true);
    /// assert_eq!(filter.status, Some(PlanStatus::Archived));
    /// assert!(filter.include_archived);
    ///
    /// let filter = PlanFilter::archived(false);
    /// assert_eq!(filter.status, None);
    /// assert!(!filter.include_archived);
    /// ```
    pub fn archived(archived: bool) -> Self {
        if archived {
            Self {
                status: Some(PlanStatus::Archived),
                include_archived: true,
                ..Default::default()
            }
        } else {
            Self::default()
        }
    }

    /// Whether `plan` passes the filter.
    pub fn matches(&self, plan: &Plan) -> bool {
        if !self.include_archived && plan.status == PlanStatus::Archived {
            return false;
        }
        if self.status.is_some_and(|status| status != plan.status) {
            return false;
        }
        if let Some(tag) = &self.tag {
            if !plan.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
                return false;
            }
        }
        true
    }
}

impl From<&ListPlans> for PlanFilter {
    fn from(params: &ListPlans) -> Self {
        Self {
            tag: params.tag.clone(),
            ..Self::archived(params.archived)
        }
    }
}

/// Filter options for querying sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    /// Only sessions for this plan
    pub plan_id: Option<String>,

    /// Only sessions for this chunk (meaningful together with `plan_id`)
    pub chunk_id: Option<String>,

    /// Only sessions that started at or after this instant
    pub started_after: Option<Timestamp>,

    /// Only completed sessions
    pub completed_only: bool,

    /// Maximum number of sessions, newest first
    pub limit: Option<u32>,
}

impl SessionFilter {
    /// Every session recorded against `plan_id`.
    pub fn for_plan(plan_id: impl Into<String>) -> Self {
        Self {
            plan_id: Some(plan_id.into()),
            ..Default::default()
        }
    }

    /// Completed sessions recorded against one chunk of one plan.
    pub fn completed_for_chunk(plan_id: impl Into<String>, chunk_id: impl Into<String>) -> Self {
        Self {
            plan_id: Some(plan_id.into()),
            chunk_id: Some(chunk_id.into()),
            completed_only: true,
            ..Default::default()
        }
    }
}

impl From<&ListSessions> for SessionFilter {
    fn from(params: &ListSessions) -> Self {
        Self {
            plan_id: params.plan_id.clone(),
            limit: params.limit,
            ..Default::default()
        }
    }
}
