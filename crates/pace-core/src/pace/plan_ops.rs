//! Plan operations for Pace.

use std::path::Path;

use jiff::Timestamp;

use super::{Pace, run_blocking};
use crate::{
    error::{PaceError, Result},
    models::{Chunk, ChunkStatus, Plan, PlanFilter},
    params::{ListPlans, PlanId, SetChunkStatus},
};

impl Pace {
    /// Lists plans in the library. Archived plans are only returned when
    /// asked for.
    pub async fn list_plans(&self, params: &ListPlans) -> Result<Vec<Plan>> {
        let library = self.library();
        let filter = PlanFilter::from(params);

        run_blocking(move || library.list(&filter)).await
    }

    /// Loads one plan with all of its chunks.
    pub async fn get_plan(&self, params: &PlanId) -> Result<Plan> {
        let library = self.library();
        let plan_id = params.plan_id.clone();

        run_blocking(move || library.load(&plan_id)).await
    }

    /// The chunk to work on next, if any remain.
    pub async fn next_chunk(&self, params: &PlanId) -> Result<Option<Chunk>> {
        let plan = self.get_plan(params).await?;
        Ok(plan.next_chunk().cloned())
    }

    /// Copies a plan document into the library.
    pub async fn import_plan(&self, path: &Path) -> Result<Plan> {
        let library = self.library();
        let path = path.to_path_buf();

        run_blocking(move || library.import(&path)).await
    }

    /// Deletes a plan document. Sessions logged against it are kept.
    pub async fn remove_plan(&self, params: &PlanId) -> Result<()> {
        let library = self.library();
        let plan_id = params.plan_id.clone();

        run_blocking(move || library.remove(&plan_id)).await
    }

    /// Sets one chunk's status by hand and returns the previous status.
    ///
    /// # Errors
    ///
    /// Returns a validation error on `status` for unknown status names.
    pub async fn set_chunk_status(&self, params: &SetChunkStatus) -> Result<ChunkStatus> {
        let status = params
            .status
            .parse::<ChunkStatus>()
            .map_err(|reason| PaceError::validation("status").with_reason(reason))?;
        let library = self.library();
        let plan_id = params.plan_id.clone();
        let chunk_id = params.chunk_id.clone();

        run_blocking(move || {
            library.update_chunk_status(&plan_id, &chunk_id, status, Timestamp::now())
        })
        .await
    }
}
