// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    CancellationError, ConfigurationError, DirSizerError, ErrorContext, PermitError, Result,
    TraversalError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{FileCount, FileSize};
