// crates/shared-kernel/tests/counts_sum.rs
use dirsizer_shared_kernel::{FileCount, FileSize};

#[test]
fn filecount_sum() {
    let total = [1u64, 2, 3].into_iter().map(FileCount::from).sum::<FileCount>();
    assert_eq!(u64::from(total), 6);
}

#[test]
fn filecount_sum_ref() {
    let values = [FileCount::from(5), FileCount::from(7)];
    let total: FileCount = values.iter().sum();
    assert_eq!(total, 12);
}

#[test]
fn filecount_increment_and_add_assign() {
    let mut files = FileCount::zero();
    files.increment();
    files.increment();
    files += FileCount::from(3);
    assert_eq!(files, FileCount::new(5));
    assert!(!files.is_zero());
    assert!(FileCount::default().is_zero());
}

#[test]
fn filesize_sum_is_order_independent() {
    let sizes = [10u64, 20, 5, 0, 1024];
    let forward: FileSize = sizes.iter().copied().map(FileSize::from).sum();
    let backward: FileSize = sizes.iter().rev().copied().map(FileSize::from).sum();
    assert_eq!(forward, backward);
    assert_eq!(forward, 1059);
}
