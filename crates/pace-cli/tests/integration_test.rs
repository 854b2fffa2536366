//! Integration tests comparing CLI output with the core Display
//! implementations the MCP server returns.

use std::{fs, path::Path, process::Command};

use pace_core::{
    params::{ListPlans, PlanId},
    Pace, PaceBuilder,
};
use tempfile::TempDir;

const PLAN: &str = "---
id: sql
title: SQL Refresher
created: 2024-03-01T09:00:00Z
updated: 2024-03-01T09:00:00Z
total_hours: 1.75
status: not-started
---

## Chunk 1: Joins {#joins}

**Duration**: 45 min
**Status**: not-started
**Objectives**:
- Write inner and outer joins

---

## Chunk 2: Window functions {#windows}

**Duration**: 1 hour
**Status**: not-started
";

async fn create_test_pace(dir: &Path) -> Pace {
    let pace = PaceBuilder::new()
        .with_database_path(Some(dir.join("test.db")))
        .with_plans_dir(Some(dir.join("plans")))
        .build()
        .await
        .expect("Failed to create pace");

    let source = dir.join("sql.md");
    fs::write(&source, PLAN).expect("Failed to write plan");
    pace.import_plan(&source).await.expect("Failed to import plan");
    pace
}

/// Run a CLI command against the same paths and capture its output
fn run_cli_command(dir: &Path, args: &[&str]) -> String {
    let config = dir.join("config.yaml");
    fs::write(&config, "").expect("Failed to write config");

    let output = Command::new(env!("CARGO_BIN_EXE_pace"))
        .arg("--no-color")
        .arg("--config")
        .arg(&config)
        .arg("--database-file")
        .arg(dir.join("test.db"))
        .arg("--plans-dir")
        .arg(dir.join("plans"))
        .args(args)
        .output()
        .expect("Failed to run CLI command");
    assert!(output.status.success(), "pace {args:?} failed");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_plan_display_consistency() {
    let temp_dir = TempDir::new().unwrap();
    let pace = create_test_pace(temp_dir.path()).await;

    let plan = pace
        .get_plan(&PlanId {
            plan_id: "sql".to_string(),
        })
        .await
        .unwrap();
    let cli_output = run_cli_command(temp_dir.path(), &["plan", "show", "sql"]);

    assert_eq!(cli_output, plan.to_string());
}

#[tokio::test]
async fn test_summary_display_consistency() {
    let temp_dir = TempDir::new().unwrap();
    let pace = create_test_pace(temp_dir.path()).await;

    let summaries = pace
        .list_plans_summary(&ListPlans::default())
        .await
        .unwrap();
    let cli_output = run_cli_command(temp_dir.path(), &["plan", "list"]);

    assert_eq!(cli_output, summaries.to_string());
    assert!(cli_output.contains("- **Remaining**: 1.8 hours"));
}

#[tokio::test]
async fn test_cli_sessions_visible_to_core() {
    let temp_dir = TempDir::new().unwrap();
    let pace = create_test_pace(temp_dir.path()).await;

    run_cli_command(
        temp_dir.path(),
        &["session", "start", "sql", "--chunk", "joins"],
    );

    let active = pace.active_session().await.unwrap().expect("active session");
    assert_eq!(active.plan_id, "sql");
    assert_eq!(active.chunk_id.as_deref(), Some("joins"));

    let cli_output = run_cli_command(temp_dir.path(), &["session", "status"]);
    assert_eq!(cli_output, active.to_string());

    run_cli_command(temp_dir.path(), &["session", "stop"]);
    assert!(pace.active_session().await.unwrap().is_none());
}
