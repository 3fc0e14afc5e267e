//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`limiter`]: Bounded permit pool capping concurrent traversal tasks
//! - [`config`]: Worker limit and permit timeout settings
//! - [`orchestrator`]: Concurrent directory size aggregation
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod limiter;
pub mod orchestrator;

pub use config::{SizerConfig, SizerConfigBuilder};
pub use limiter::{PermitPool, TimedSemaphore};
pub use orchestrator::{DirSizer, compute_size};
