//! Markdown presentation of models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Collections and operation outcomes get newtype wrappers so the same data
//! can be framed differently depending on context:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Wrappers       │    │   Formatted     │
//! │ (Plan, Session) │───▶│ (Sessions,      │───▶│    Output       │
//! │                 │    │  StopResult)    │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pace_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Removed plan 'rust-basics'");
//! assert_eq!(status.to_string(), "Success: Removed plan 'rust-basics'\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{PlanSummaries, Sessions};
pub use datetime::{LocalDateTime, Minutes};
pub use results::{StartResult, StatusChange, StopResult};
pub use status::OperationStatus;
