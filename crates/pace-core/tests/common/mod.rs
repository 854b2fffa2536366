use pace_core::{Pace, PaceBuilder};
use tempfile::TempDir;

/// A plan with two chunks: `ownership` (1 hour) and `traits` (1.5 hours).
pub const RUST_BASICS: &str = "---
id: rust-basics
title: Rust Basics
created: 2024-01-15T10:00:00Z
updated: 2024-01-15T10:00:00Z
total_hours: 2.5
status: in-progress
tags:
  - rust
  - programming
---

# Rust Basics

## Chunk 1: Ownership {#ownership}

**Duration**: 1 hour
**Status**: not-started
**Objectives**:
- Explain moves and borrows
- Fix common borrow checker errors
**Resources**:
- https://doc.rust-lang.org/book/ch04-00-understanding-ownership.html
**Deliverable**: A borrow-checker cheat sheet

---

## Chunk 2: Traits {#traits}

**Duration**: 1.5 hours
**Status**: not-started
";

/// Helper function to create a test instance with `RUST_BASICS` imported
pub async fn create_test_pace() -> (TempDir, Pace) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let pace = PaceBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_plans_dir(Some(temp_dir.path().join("plans")))
        .build()
        .await
        .expect("Failed to create pace");

    let source = temp_dir.path().join("rust-basics.md");
    std::fs::write(&source, RUST_BASICS).expect("Failed to write plan");
    pace.import_plan(&source)
        .await
        .expect("Failed to import plan");
    (temp_dir, pace)
}
