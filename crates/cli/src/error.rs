// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Sizer(#[from] dirsizer_shared_kernel::DirSizerError),

    #[error("Logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("Signal handler setup failed: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
