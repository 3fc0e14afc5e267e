use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::{options::OutputFormat, parsers::DurationArg};

/// Sum file sizes and counts under one or more directories, concurrently.
#[derive(Debug, Clone, Parser)]
#[command(name = "dirsizer", version, about)]
pub struct Args {
    /// Directories to size
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Maximum number of concurrent traversal tasks per directory [default: number of CPUs]
    #[arg(short, long, value_name = "N")]
    pub workers: Option<usize>,

    /// How long a task waits for a free worker before walking a subdirectory itself
    #[arg(long, value_name = "MS")]
    pub acquire_timeout_ms: Option<u64>,

    /// Give up after this long (e.g. 30s, 2m, 500ms)
    #[arg(short, long, value_name = "DURATION")]
    pub timeout: Option<DurationArg>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print sizes in KiB/MiB/GiB instead of bytes (table output)
    #[arg(short = 'H', long)]
    pub human: bool,

    /// Count symlinked files with the size of their target
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// JSON or YAML file with default settings; flags take precedence
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Disable log output
    #[arg(short, long)]
    pub quiet: bool,
}
