// crates/cli/src/runner.rs
use std::path::PathBuf;

use dirsizer_domain::SizeSummary;
use dirsizer_infra::LocalDirectory;
use dirsizer_ports::Context;
use dirsizer_shared_kernel::DirSizerError;
use dirsizer_usecase::DirSizer;
use log::info;
use rayon::prelude::*;

use crate::config::Config;

/// Result of sizing one command-line root.
#[derive(Debug)]
pub struct RootReport {
    pub root: PathBuf,
    pub outcome: Result<SizeSummary, DirSizerError>,
}

impl RootReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Sizes every root in `config.paths`, in parallel, keeping input order.
///
/// Each root gets its own permit pool; a failing root does not stop the others.
pub fn run(config: &Config, ctx: &Context) -> Vec<RootReport> {
    let sizer = DirSizer::new(config.sizer.clone());
    config
        .paths
        .par_iter()
        .map(|root| {
            let dir = LocalDirectory::with_options(root, config.local);
            let outcome = sizer.size(ctx, &dir);
            if let Ok(summary) = &outcome {
                info!("{}: {summary}", root.display());
            }
            RootReport { root: root.clone(), outcome }
        })
        .collect()
}

/// Sum over the roots that succeeded.
pub fn total(reports: &[RootReport]) -> SizeSummary {
    reports.iter().filter_map(|r| r.outcome.as_ref().ok()).copied().sum()
}
