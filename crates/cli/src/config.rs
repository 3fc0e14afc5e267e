// crates/cli/src/config.rs
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use dirsizer_infra::LocalOptions;
use dirsizer_shared_kernel::{ConfigurationError, ErrorContext};
use dirsizer_usecase::SizerConfig;
use log::LevelFilter;
use serde::Deserialize;

use crate::{
    args::Args,
    error::{AppError, Result},
    options::OutputFormat,
};

/// Settings read from `--config`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub workers: Option<usize>,
    pub acquire_timeout_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub format: Option<OutputFormat>,
    pub human: Option<bool>,
    pub follow_links: Option<bool>,
}

impl FileConfig {
    /// Loads a JSON or YAML file, picked by extension.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, has an unknown extension,
    /// or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let shown = path.display();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{shown}'"))?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parsed = match ext.as_deref() {
            Some("json") => serde_json::from_str(&text)
                .with_context(|| format!("Invalid config '{shown}'"))?,
            Some("yaml" | "yml") => serde_yaml::from_str(&text)
                .with_context(|| format!("Invalid config '{shown}'"))?,
            _ => {
                let err = ConfigurationError::InvalidValue {
                    field: "config".to_string(),
                    reason: format!("unsupported file '{shown}' (expected .json, .yaml or .yml)"),
                };
                return Err(AppError::Sizer(err.into()));
            }
        };
        Ok(parsed)
    }
}

/// Fully resolved run settings: defaults, then the config file, then flags.
#[derive(Debug, Clone)]
pub struct Config {
    pub paths: Vec<PathBuf>,
    pub sizer: SizerConfig,
    pub timeout: Option<Duration>,
    pub format: OutputFormat,
    pub human: bool,
    pub local: LocalOptions,
    pub log_level: LevelFilter,
}

impl Config {
    /// # Errors
    /// Fails only when `--config` names a file that cannot be loaded.
    pub fn resolve(args: Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::merge(args, file))
    }

    fn merge(args: Args, file: FileConfig) -> Self {
        let defaults = SizerConfig::default();
        // Zero is passed through so the sizer reports it.
        let sizer = SizerConfig {
            workers: args.workers.or(file.workers).unwrap_or_else(num_cpus::get),
            acquire_timeout: args
                .acquire_timeout_ms
                .or(file.acquire_timeout_ms)
                .map_or(defaults.acquire_timeout, Duration::from_millis),
        };
        let timeout = args
            .timeout
            .map(|t| t.0)
            .or_else(|| file.timeout_secs.map(Duration::from_secs));

        Self {
            paths: args.paths,
            sizer,
            timeout,
            format: args.format.or(file.format).unwrap_or_default(),
            human: args.human || file.human.unwrap_or(false),
            local: LocalOptions {
                follow_links: args.follow_links || file.follow_links.unwrap_or(false),
            },
            log_level: log_level(args.verbose, args.quiet),
        }
    }
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
