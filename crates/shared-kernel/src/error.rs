// crates/shared-kernel/src/error.rs
use std::{path::PathBuf, time::Duration};

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DirSizerError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<DirSizerError>,
    },

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Permit error: {0}")]
    Permit(#[from] PermitError),

    #[error("Traversal error: {0}")]
    Traversal(#[from] TraversalError),

    #[error(transparent)]
    Cancellation(#[from] CancellationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {format}: {details}")]
    Serialization { format: String, details: String },
}

pub type Result<T> = std::result::Result<T, DirSizerError>;

impl DirSizerError {
    /// Strips any `Context` layers and returns the innermost error.
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// True when the error originates from a cancelled or expired context.
    pub fn is_cancellation(&self) -> bool {
        matches!(self.root_cause(), Self::Cancellation(_))
    }

    /// True for logic errors in permit bookkeeping, as opposed to I/O failures.
    pub fn is_defect(&self) -> bool {
        matches!(self.root_cause(), Self::Permit(PermitError::IllegalRelease { .. }))
    }
}

/// Invalid sizer setup, detected before any traversal starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("unable to traverse directory using 0 workers")]
    ZeroWorkers,

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Failures of the bounded permit pool.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PermitError {
    #[error("no worker available within {timeout:?}")]
    NoPermitAvailable { timeout: Duration },

    #[error("unable to release worker within {timeout:?}: pool is already full")]
    IllegalRelease { timeout: Duration },
}

/// Failures reported by directory/file collaborators.
#[derive(Debug, Error)]
pub enum TraversalError {
    #[error("failed to list directory '{path}': {source}")]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to stat file '{path}': {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TraversalError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Listing { path, .. } | Self::Stat { path, .. } => path,
        }
    }

    pub fn io_kind(&self) -> std::io::ErrorKind {
        match self {
            Self::Listing { source, .. } | Self::Stat { source, .. } => source.kind(),
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CancellationError {
    #[error("operation cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,
}

impl From<serde_json::Error> for DirSizerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for DirSizerError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<DirSizerError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DirSizerError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DirSizerError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
