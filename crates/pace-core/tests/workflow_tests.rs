mod common;

use std::{thread, time::Duration};

use pace_core::{
    ChunkStatus, Database, PaceError, Session, SessionStore, codec,
    params::{ListPlans, PlanId, StartSession, StopSession},
};

use common::{RUST_BASICS, create_test_pace};

fn rust_basics() -> PlanId {
    PlanId {
        plan_id: "rust-basics".to_string(),
    }
}

/// Writes a finished session straight into the store, as if it had been
/// logged earlier.
fn backfill(db_path: &std::path::Path, id: &str, chunk_id: &str, minutes: i64) {
    let start: jiff::Timestamp = "2024-02-01T09:00:00Z".parse().unwrap();
    let mut session = Session {
        id: id.to_string(),
        plan_id: "rust-basics".to_string(),
        chunk_id: Some(chunk_id.to_string()),
        start_time: start,
        end_time: None,
        duration_minutes: 0,
        notes: String::new(),
        artifacts: Vec::new(),
        cards_created: 0,
    };
    session
        .complete(start + jiff::SignedDuration::from_mins(minutes))
        .unwrap();
    let mut db = Database::new(db_path).unwrap();
    db.create(&session).unwrap();
}

#[tokio::test]
async fn test_imported_plan_matches_document() {
    let (_temp_dir, pace) = create_test_pace().await;

    let plan = pace.get_plan(&rust_basics()).await.unwrap();
    assert_eq!(plan, codec::parse(RUST_BASICS).unwrap());
    assert_eq!(plan.tags, vec!["rust", "programming"]);
    assert_eq!(plan.chunks[0].objectives.len(), 2);
    assert_eq!(plan.chunks[1].duration_minutes, 90);

    let summaries = pace.list_plans_summary(&ListPlans::default()).await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].total_chunks, 2);
    assert_eq!(summaries[0].remaining_hours, 2.5);
}

#[tokio::test]
async fn test_logged_time_completes_chunk() {
    let (temp_dir, pace) = create_test_pace().await;
    backfill(&temp_dir.path().join("test.db"), "earlier", "ownership", 59);

    pace.start_session(&StartSession {
        plan_id: "rust-basics".to_string(),
        chunk_id: Some("ownership".to_string()),
        notes: None,
    })
    .await
    .unwrap();
    let plan = pace.get_plan(&rust_basics()).await.unwrap();
    assert_eq!(plan.chunk("ownership").unwrap().status, ChunkStatus::InProgress);

    // Less than a minute of work: the session is recorded with zero minutes
    // and the chunk stays one minute short.
    thread::sleep(Duration::from_millis(10));
    let stopped = pace.stop_session(&StopSession::default()).await.unwrap();
    assert_eq!(stopped.duration_minutes, 0);
    let plan = pace.get_plan(&rust_basics()).await.unwrap();
    assert_eq!(plan.chunk("ownership").unwrap().status, ChunkStatus::InProgress);

    backfill(&temp_dir.path().join("test.db"), "later", "ownership", 1);
    pace.start_session(&StartSession {
        plan_id: "rust-basics".to_string(),
        chunk_id: Some("ownership".to_string()),
        notes: None,
    })
    .await
    .unwrap();
    thread::sleep(Duration::from_millis(10));
    pace.stop_session(&StopSession::default()).await.unwrap();

    let plan = pace.get_plan(&rust_basics()).await.unwrap();
    assert_eq!(plan.chunk("ownership").unwrap().status, ChunkStatus::Completed);
    assert_eq!(plan.next_chunk().map(|c| c.id.as_str()), Some("traits"));
    assert_eq!(plan.progress(), 0.5);

    let stats = pace.session_stats(&rust_basics()).await.unwrap();
    assert_eq!(stats.sessions, 4);
    assert_eq!(stats.minutes_by_chunk.get("ownership"), Some(&60));
}

#[tokio::test]
async fn test_single_active_session_across_instances() {
    let (temp_dir, pace) = create_test_pace().await;
    let other = pace_core::PaceBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_plans_dir(Some(temp_dir.path().join("plans")))
        .build()
        .await
        .unwrap();

    let running = pace
        .start_session(&StartSession {
            plan_id: "rust-basics".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    let err = other
        .start_session(&StartSession {
            plan_id: "rust-basics".to_string(),
            chunk_id: Some("traits".to_string()),
            notes: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, PaceError::Conflict { ref session_id, .. } if *session_id == running.id));
    assert_eq!(other.active_session().await.unwrap().map(|s| s.id), Some(running.id));
}
