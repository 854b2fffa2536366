//! The YAML header block between the two `---` fences.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PaceError, Result},
    models::{Plan, PlanStatus},
};

/// Header fields as they appear in the document.
///
/// Missing fields fall back to empty values so that
/// [`Plan::validate`](crate::models::Plan::validate) can name them, rather
/// than failing deserialization with a less specific message. Status is kept
/// as text for the same reason.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Frontmatter {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub created: Timestamp,
    #[serde(default)]
    pub updated: Timestamp,
    #[serde(default)]
    pub total_hours: f64,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_status() -> String {
    PlanStatus::NotStarted.as_str().to_string()
}

impl Frontmatter {
    /// Deserializes the lines between the fences.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| PaceError::format(format!("invalid frontmatter: {e}")))
    }

    /// Serializes to YAML without fences.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Builds a chunk-less plan from the header.
    pub fn into_plan(self) -> Result<Plan> {
        let status = self
            .status
            .parse::<PlanStatus>()
            .map_err(|reason| PaceError::validation("status").with_reason(reason))?;

        Ok(Plan {
            id: self.id.trim().to_string(),
            title: self.title.trim().to_string(),
            created_at: self.created,
            updated_at: self.updated,
            total_hours: self.total_hours,
            status,
            tags: self.tags,
            chunks: Vec::new(),
        })
    }
}

impl From<&Plan> for Frontmatter {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id.clone(),
            title: plan.title.clone(),
            created: plan.created_at,
            updated: plan.updated_at,
            total_hours: plan.total_hours,
            status: plan.status.as_str().to_string(),
            tags: plan.tags.clone(),
        }
    }
}
