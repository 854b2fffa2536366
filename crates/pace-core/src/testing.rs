//! Shared fixtures for unit tests.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use jiff::{Timestamp, ToSpan};

use crate::{
    error::{PaceError, Result},
    models::{Chunk, ChunkStatus, Plan, Session},
    ports::{ChunkState, PlanAccessor},
    tracker::{Clock, SideEffectObserver},
};

/// 2023-11-14 22:13:20 UTC plus `offset` seconds.
pub fn ts(offset: i64) -> Timestamp {
    Timestamp::from_second(1_700_000_000 + offset).expect("valid timestamp")
}

/// Plan `p` with chunk `c` (60 minutes) and chunk `d` (90 minutes), both not
/// started.
pub fn sample_plan() -> Plan {
    let mut plan = Plan::new("p", "Sample plan", 2.5, ts(0));
    plan.chunks = vec![Chunk::new("c", "First", 60), Chunk::new("d", "Second", 90)];
    plan
}

/// A completed session of `minutes` starting at `start`.
pub fn completed_session(
    id: &str,
    plan_id: &str,
    chunk_id: Option<&str>,
    start: Timestamp,
    minutes: i64,
) -> Session {
    let mut session = Session {
        id: id.to_string(),
        plan_id: plan_id.to_string(),
        chunk_id: chunk_id.map(String::from),
        start_time: start,
        end_time: None,
        duration_minutes: 0,
        notes: String::new(),
        artifacts: Vec::new(),
        cards_created: 0,
    };
    session
        .complete(start + minutes.minutes())
        .expect("positive duration");
    session
}

/// In-memory [`PlanAccessor`] that counts writes and can be told to fail.
#[derive(Default)]
pub struct MemoryPlans {
    plans: RefCell<HashMap<String, Plan>>,
    writes: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryPlans {
    pub fn with(plan: Plan) -> Self {
        let plans = Self::default();
        plans.plans.borrow_mut().insert(plan.id.clone(), plan);
        plans
    }

    pub fn status_of(&self, plan_id: &str, chunk_id: &str) -> ChunkStatus {
        self.chunk_state(plan_id, chunk_id)
            .expect("chunk exists")
            .status
    }

    pub fn plan(&self, plan_id: &str) -> Plan {
        self.plans.borrow()[plan_id].clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl PlanAccessor for MemoryPlans {
    fn plan_exists(&self, plan_id: &str) -> Result<bool> {
        Ok(self.plans.borrow().contains_key(plan_id))
    }

    fn chunk_state(&self, plan_id: &str, chunk_id: &str) -> Result<ChunkState> {
        let plans = self.plans.borrow();
        let plan = plans.get(plan_id).ok_or_else(|| PaceError::PlanNotFound {
            id: plan_id.to_string(),
        })?;
        let chunk = plan.chunk(chunk_id).ok_or_else(|| PaceError::ChunkNotFound {
            plan_id: plan_id.to_string(),
            chunk_id: chunk_id.to_string(),
        })?;
        Ok(ChunkState {
            duration_minutes: chunk.duration_minutes,
            status: chunk.status,
        })
    }

    fn set_chunk_status(
        &self,
        plan_id: &str,
        chunk_id: &str,
        status: ChunkStatus,
        at: Timestamp,
    ) -> Result<()> {
        if self.fail_writes.get() {
            return Err(PaceError::Configuration {
                message: "plan storage is read-only".to_string(),
            });
        }
        let mut plans = self.plans.borrow_mut();
        let plan = plans.get_mut(plan_id).ok_or_else(|| PaceError::PlanNotFound {
            id: plan_id.to_string(),
        })?;
        plan.set_chunk_status(chunk_id, status, at)?;
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Clock the test moves by hand. Clones share the same instant.
#[derive(Clone)]
pub struct ManualClock(Rc<Cell<Timestamp>>);

impl ManualClock {
    pub fn at(now: Timestamp) -> Self {
        Self(Rc::new(Cell::new(now)))
    }

    pub fn set(&self, now: Timestamp) {
        self.0.set(now);
    }

    pub fn advance_minutes(&self, minutes: i64) {
        self.0.set(self.0.get() + minutes.minutes());
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.0.get()
    }
}

/// Observer that keeps every reported failure.
#[derive(Clone, Default)]
pub struct RecordingObserver(Rc<RefCell<Vec<String>>>);

impl RecordingObserver {
    pub fn failures(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl SideEffectObserver for RecordingObserver {
    fn side_effect_failed(&self, effect: &str, error: &PaceError) {
        self.0.borrow_mut().push(format!("{effect}: {error}"));
    }
}
