//! Data models for plans, chunks, and sessions.
//!
//! A [`Plan`] is the root aggregate: metadata plus an ordered list of
//! [`Chunk`]s, each a time-boxed unit of work. A [`Session`] records an
//! interval of work against a plan and, optionally, one of its chunks.
//!
//! Everything here is plain data with pure derived computations. Reading and
//! writing plan documents lives in [`crate::codec`], persistence of sessions
//! in [`crate::db`], and Display implementations in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use pace_core::models::{Chunk, ChunkStatus, Plan};
//!
//! let mut plan = Plan::new("rust-basics", "Rust Basics", 3.0, Timestamp::now());
//! plan.chunks.push(Chunk::new("ownership", "Ownership", 60));
//! plan.chunks.push(Chunk::new("traits", "Traits", 90));
//! plan.chunks[0].status = ChunkStatus::Completed;
//!
//! assert!(plan.validate().is_ok());
//! assert_eq!(plan.progress(), 0.5);
//! assert_eq!(plan.next_chunk().map(|c| c.id.as_str()), Some("traits"));
//! ```

pub mod chunk;
pub mod filters;
pub mod plan;
pub mod session;
pub mod status;
pub mod summary;


pub use chunk::Chunk;
pub use filters::{PlanFilter, SessionFilter};
pub use plan::Plan;
pub use session::{Session, elapsed_minutes};
pub use status::{ChunkStatus, PlanStatus};
pub use summary::{PlanSummary, SessionStats};
