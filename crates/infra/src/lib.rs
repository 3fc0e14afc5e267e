// crates/infra/src/lib.rs
//! # Infrastructure
//!
//! Adapters implementing the traversal ports.
//!
//! - [`filesystem`]: Local disk via `std::fs`
//! - [`memory`]: In-memory trees for tests and benchmarks

#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod memory;

pub use filesystem::{LocalDirectory, LocalFile, LocalOptions};
pub use memory::{IoProbe, MemoryDir};
