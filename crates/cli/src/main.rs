use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use dirsizer_cli::{
    args::Args,
    config::Config,
    error::{AppError, Result},
    logging, presentation, runner,
};
use dirsizer_ports::Context;
use log::{debug, warn};

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every root was sized.
fn run(args: Args) -> Result<bool> {
    let config = Config::resolve(args)?;
    logging::init(config.log_level)?;
    debug!("resolved config: {config:?}");

    let ctx = match config.timeout {
        Some(timeout) => Context::with_timeout(timeout),
        None => Context::background(),
    };
    let interrupt = ctx.clone();
    ctrlc::set_handler(move || {
        warn!("interrupt received, cancelling");
        interrupt.cancel();
    })?;

    let reports = runner::run(&config, &ctx);
    for report in reports.iter().filter(|r| !r.is_ok()) {
        if let Err(e) = &report.outcome {
            eprintln!("Error sizing {}: {e}", report.root.display());
        }
    }

    let total = runner::total(&reports);
    let text = presentation::render(&reports, total, config.format, config.human)?;
    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        // A closed pipe is not worth a second error message.
        if e.kind() != io::ErrorKind::BrokenPipe {
            return Err(AppError::Output(e));
        }
    }

    Ok(reports.iter().all(runner::RootReport::is_ok))
}
