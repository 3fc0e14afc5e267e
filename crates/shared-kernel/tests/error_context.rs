// crates/shared-kernel/tests/error_context.rs
use std::{io, path::PathBuf, time::Duration};

use dirsizer_shared_kernel::{
    CancellationError, ConfigurationError, DirSizerError, ErrorContext, PermitError, TraversalError,
};

fn boom() -> std::result::Result<(), io::Error> {
    Err(io::Error::other("root-io"))
}

#[test]
fn context_wraps_and_formats() {
    let err = boom().context("reading config").unwrap_err();

    let display = err.to_string();
    assert!(display.contains("reading config"));
    assert!(display.contains("IO error: root-io"));
}

#[test]
fn root_cause_sees_through_context_layers() {
    let err: std::result::Result<(), _> = Err(CancellationError::DeadlineExceeded);
    let err = err
        .context("sizing /data")
        .with_context(|| "run 3".to_string())
        .unwrap_err();

    assert!(err.is_cancellation());
    assert!(!err.is_defect());
    assert!(matches!(
        err.root_cause(),
        DirSizerError::Cancellation(CancellationError::DeadlineExceeded)
    ));
}

#[test]
fn illegal_release_is_a_defect() {
    let err = DirSizerError::from(PermitError::IllegalRelease { timeout: Duration::from_millis(1) });
    assert!(err.is_defect());

    let err = DirSizerError::from(PermitError::NoPermitAvailable { timeout: Duration::from_millis(1) });
    assert!(!err.is_defect());
}

#[test]
fn zero_workers_message() {
    let err = DirSizerError::from(ConfigurationError::ZeroWorkers);
    assert_eq!(
        err.to_string(),
        "Configuration error: unable to traverse directory using 0 workers"
    );
}

#[test]
fn traversal_error_exposes_path_and_kind() {
    let err = TraversalError::Listing {
        path: PathBuf::from("/srv/private"),
        source: io::Error::from(io::ErrorKind::PermissionDenied),
    };
    assert_eq!(err.path(), PathBuf::from("/srv/private"));
    assert_eq!(err.io_kind(), io::ErrorKind::PermissionDenied);
    assert!(err.to_string().starts_with("failed to list directory '/srv/private'"));
}
