use std::{fs, io::Write, path::Path};

use dirsizer_infra::{LocalDirectory, LocalOptions};
use dirsizer_ports::Context;
use dirsizer_shared_kernel::{DirSizerError, TraversalError};
use dirsizer_usecase::compute_size;
use tempfile::TempDir;

fn write_file(path: &Path, len: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; len]).unwrap();
}

#[test]
fn sizes_a_real_tree() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write_file(&root.join("ten"), 10);
    write_file(&root.join("twenty"), 20);
    fs::create_dir_all(root.join("sub/deeper")).unwrap();
    write_file(&root.join("sub/five"), 5);
    write_file(&root.join("sub/deeper/hundred"), 100);
    fs::create_dir(root.join("empty")).unwrap();

    for workers in [1, 2, 4, 16] {
        let total = compute_size(&Context::background(), &LocalDirectory::new(root), workers).unwrap();
        assert_eq!(total.size.bytes(), 135, "workers={workers}");
        assert_eq!(total.count.value(), 4, "workers={workers}");
    }
}

#[test]
fn missing_root_is_reported_verbatim() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("absent");
    let err = compute_size(&Context::background(), &LocalDirectory::new(&missing), 2).unwrap_err();
    match err {
        DirSizerError::Traversal(TraversalError::Listing { path, source }) => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[cfg(unix)]
#[test]
fn symlink_loops_are_not_followed() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write_file(&root.join("data"), 64);
    std::os::unix::fs::symlink(root, root.join("self")).unwrap();
    std::os::unix::fs::symlink(root.join("data"), root.join("alias")).unwrap();

    let plain = compute_size(&Context::background(), &LocalDirectory::new(root), 2).unwrap();
    assert_eq!(plain.count.value(), 1);

    let followed = LocalDirectory::with_options(root, LocalOptions { follow_links: true });
    let total = compute_size(&Context::background(), &followed, 2).unwrap();
    assert_eq!(total.count.value(), 2);
    assert_eq!(total.size.bytes(), 128);
}
