// crates/ports/src/lib.rs
//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`context`]: Cancellation token threaded through every collaborator call
//! - [`filesystem`]: Directory listing and file size capabilities
//!
//! These ports allow the traversal core to remain independent of how
//! directories and files are actually stored.

#![allow(clippy::multiple_crate_versions)]

pub mod context;
pub mod filesystem;

pub use context::Context;
pub use filesystem::{Directory, File, Listing};
