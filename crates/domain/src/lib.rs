//! # Domain
//!
//! Aggregates produced by directory traversal.

#![allow(clippy::multiple_crate_versions)]

pub mod model;

pub use model::SizeSummary;
