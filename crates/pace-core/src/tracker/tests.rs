use super::*;
use crate::{
    db::Database,
    error::PaceError,
    testing::{ManualClock, MemoryPlans, RecordingObserver, sample_plan, ts},
};

fn tracker(clock: &ManualClock) -> SessionTracker<Database, MemoryPlans> {
    let db = Database::open_in_memory().expect("in-memory database");
    SessionTracker::new(db, MemoryPlans::with(sample_plan())).with_clock(clock.clone())
}

fn start_on(plan_id: &str, chunk_id: Option<&str>) -> StartSession {
    StartSession {
        plan_id: plan_id.to_string(),
        chunk_id: chunk_id.map(String::from),
        notes: None,
    }
}

#[test]
fn test_chunk_completes_after_enough_sessions() {
    let clock = ManualClock::at(ts(0));
    let mut tracker = tracker(&clock);

    tracker.start(&start_on("p", Some("c"))).unwrap();
    assert_eq!(tracker.plans().status_of("p", "c"), ChunkStatus::InProgress);
    clock.advance_minutes(40);
    let first = tracker.stop(&StopSession::default()).unwrap();
    assert_eq!(first.duration_minutes, 40);
    assert_eq!(tracker.plans().status_of("p", "c"), ChunkStatus::InProgress);

    clock.advance_minutes(10);
    tracker.start(&start_on("p", Some("c"))).unwrap();
    clock.advance_minutes(25);
    tracker.stop(&StopSession::default()).unwrap();
    assert_eq!(tracker.plans().status_of("p", "c"), ChunkStatus::Completed);

    // A later session on the same chunk must not reopen it.
    clock.advance_minutes(5);
    tracker.start(&start_on("p", Some("c"))).unwrap();
    assert_eq!(tracker.plans().status_of("p", "c"), ChunkStatus::Completed);
    clock.advance_minutes(15);
    tracker.stop(&StopSession::default()).unwrap();
    assert_eq!(tracker.plans().status_of("p", "c"), ChunkStatus::Completed);

    assert_eq!(tracker.get_by_plan("p").unwrap().len(), 3);
}

#[test]
fn test_start_while_active_names_existing_session() {
    let clock = ManualClock::at(ts(0));
    let mut tracker = tracker(&clock);

    let running = tracker.start(&start_on("p", None)).unwrap();
    let err = tracker.start(&start_on("p", Some("d"))).unwrap_err();
    match err {
        PaceError::Conflict {
            session_id,
            plan_id,
        } => {
            assert_eq!(session_id, running.id);
            assert_eq!(plan_id, "p");
        }
        other => panic!("expected conflict, got {other:?}"),
    }
    assert_eq!(tracker.get_active().unwrap().unwrap().id, running.id);
}

#[test]
fn test_stop_without_active_session() {
    let clock = ManualClock::at(ts(0));
    let mut tracker = tracker(&clock);

    let err = tracker.stop(&StopSession::default()).unwrap_err();
    assert!(matches!(err, PaceError::NoActiveSession));
    assert!(err.is_not_found());
}

#[test]
fn test_ninety_minute_session() {
    let clock = ManualClock::at(ts(0));
    let mut tracker = tracker(&clock);

    let started = tracker.start(&start_on("p", None)).unwrap();
    assert!(started.is_active());
    assert_eq!(started.duration_minutes, 0);

    clock.advance_minutes(90);
    let stopped = tracker.stop(&StopSession::default()).unwrap();
    assert_eq!(stopped.duration_minutes, 90);
    assert_eq!(stopped.end_time, Some(ts(90 * 60)));
    assert!(tracker.get_active().unwrap().is_none());
    assert_eq!(tracker.get(&started.id).unwrap(), stopped);
}

#[test]
fn test_stop_at_start_instant_is_rejected() {
    let clock = ManualClock::at(ts(0));
    let mut tracker = tracker(&clock);

    tracker.start(&start_on("p", None)).unwrap();
    let err = tracker.stop(&StopSession::default()).unwrap_err();
    assert!(matches!(err, PaceError::Validation { .. }));
    assert!(tracker.get_active().unwrap().is_some());
}

#[test]
fn test_empty_plan_id_is_rejected() {
    let clock = ManualClock::at(ts(0));
    let mut tracker = tracker(&clock);

    let err = tracker.start(&start_on("  ", None)).unwrap_err();
    assert!(matches!(err, PaceError::Validation { ref field, .. } if field == "plan_id"));
}

#[test]
fn test_blank_chunk_id_means_no_chunk() {
    let clock = ManualClock::at(ts(0));
    let mut tracker = tracker(&clock);

    let session = tracker.start(&start_on("p", Some(" "))).unwrap();
    assert_eq!(session.chunk_id, None);
    assert_eq!(tracker.plans().writes(), 0);
}

#[test]
fn test_notes_and_artifacts_accumulate() {
    let clock = ManualClock::at(ts(0));
    let mut tracker = tracker(&clock);

    tracker
        .start(&StartSession {
            plan_id: "p".to_string(),
            chunk_id: Some("d".to_string()),
            notes: Some("reading chapter 4".to_string()),
        })
        .unwrap();
    clock.advance_minutes(30);
    let stopped = tracker
        .stop(&StopSession {
            notes: Some("finished exercises".to_string()),
            artifacts: vec!["notes/ch4.md".to_string()],
            cards_created: 12,
        })
        .unwrap();

    assert_eq!(stopped.notes, "reading chapter 4\nfinished exercises");
    assert_eq!(stopped.artifacts, vec!["notes/ch4.md"]);
    assert_eq!(stopped.cards_created, 12);
}

#[test]
fn test_side_effect_failures_are_reported_not_returned() {
    let clock = ManualClock::at(ts(0));
    let observer = RecordingObserver::default();
    let mut tracker = tracker(&clock).with_observer(observer.clone());
    tracker.plans().fail_writes(true);

    let started = tracker.start(&start_on("p", Some("c"))).unwrap();
    clock.advance_minutes(60);
    let stopped = tracker.stop(&StopSession::default()).unwrap();

    assert_eq!(started.id, stopped.id);
    assert_eq!(stopped.duration_minutes, 60);
    assert_eq!(tracker.plans().status_of("p", "c"), ChunkStatus::NotStarted);

    let failures = observer.failures();
    assert_eq!(failures.len(), 2);
    assert!(failures[0].starts_with("mark chunk in progress"));
    assert!(failures[1].starts_with("infer chunk completion"));
}

#[test]
fn test_unknown_chunk_does_not_block_start() {
    let clock = ManualClock::at(ts(0));
    let observer = RecordingObserver::default();
    let mut tracker = tracker(&clock).with_observer(observer.clone());

    let session = tracker.start(&start_on("p", Some("missing"))).unwrap();
    assert_eq!(session.chunk_id.as_deref(), Some("missing"));
    assert_eq!(observer.failures().len(), 1);
}

#[test]
fn test_plan_verification() {
    let clock = ManualClock::at(ts(0));

    let mut lenient = tracker(&clock);
    assert!(lenient.start(&start_on("elsewhere", None)).is_ok());

    let mut strict = tracker(&clock).verify_plans(true);
    let err = strict.start(&start_on("elsewhere", None)).unwrap_err();
    assert!(matches!(err, PaceError::PlanNotFound { ref id } if id == "elsewhere"));
    assert!(strict.get_active().unwrap().is_none());
}

#[test]
fn test_delete_and_lookup() {
    let clock = ManualClock::at(ts(0));
    let mut tracker = tracker(&clock);

    let session = tracker.start(&start_on("p", None)).unwrap();
    clock.advance_minutes(5);
    tracker.stop(&StopSession::default()).unwrap();

    tracker.delete(&session.id).unwrap();
    assert!(matches!(
        tracker.get(&session.id),
        Err(PaceError::SessionNotFound { .. })
    ));
    assert!(matches!(
        tracker.delete(&session.id),
        Err(PaceError::SessionNotFound { .. })
    ));
    assert!(tracker.list(&SessionFilter::default()).unwrap().is_empty());
}

#[test]
fn test_chunk_updates_use_tracker_clock() {
    let clock = ManualClock::at(ts(3600));
    let mut tracker = tracker(&clock);

    tracker.start(&start_on("p", Some("c"))).unwrap();
    assert_eq!(tracker.plans().plan("p").updated_at, ts(3600));

    clock.advance_minutes(60);
    tracker.stop(&StopSession::default()).unwrap();
    assert_eq!(tracker.plans().status_of("p", "c"), ChunkStatus::Completed);
    assert_eq!(tracker.plans().plan("p").updated_at, ts(7200));
}
