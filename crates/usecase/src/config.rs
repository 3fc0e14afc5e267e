// crates/usecase/src/config.rs
use std::time::Duration;

use derive_builder::Builder;
use dirsizer_shared_kernel::ConfigurationError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WORKERS: usize = 3;
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_millis(1);

/// Settings for one [`DirSizer`](crate::DirSizer).
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct SizerConfig {
    /// Upper bound on traversal tasks running at the same time, root included.
    #[builder(default = "DEFAULT_WORKERS")]
    pub workers: usize,
    /// How long a task waits for a permit before processing a subdirectory inline.
    #[builder(default = "DEFAULT_ACQUIRE_TIMEOUT")]
    #[serde(with = "millis")]
    pub acquire_timeout: Duration,
}

impl Default for SizerConfig {
    fn default() -> Self {
        Self { workers: DEFAULT_WORKERS, acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT }
    }
}

impl SizerConfig {
    pub fn with_workers(workers: usize) -> Self {
        Self { workers, ..Self::default() }
    }

    /// # Errors
    /// [`ConfigurationError::ZeroWorkers`] when no worker may run.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.workers == 0 {
            return Err(ConfigurationError::ZeroWorkers);
        }
        Ok(())
    }
}

impl SizerConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.workers == Some(0) {
            return Err(ConfigurationError::ZeroWorkers.to_string());
        }
        Ok(())
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
