//! End-to-end tests for the `dirsizer` binary.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn dirsizer() -> Command {
    Command::cargo_bin("dirsizer").unwrap()
}

/// 10 + 20 + 5 + 100 bytes in 4 files.
fn sample_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::write(root.join("a"), vec![b'x'; 10]).unwrap();
    fs::write(root.join("b"), vec![b'x'; 20]).unwrap();
    fs::create_dir_all(root.join("sub/deeper")).unwrap();
    fs::write(root.join("sub/c"), vec![b'x'; 5]).unwrap();
    fs::write(root.join("sub/deeper/d"), vec![b'x'; 100]).unwrap();
    tmp
}

fn json_output(args: &[&str], root: &Path) -> serde_json::Value {
    let output = dirsizer().args(args).arg(root).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn table_output_shows_size_and_count() {
    let tmp = sample_tree();
    dirsizer()
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("135"))
        .stdout(predicate::str::contains("FILES"));
}

#[test]
fn json_totals_do_not_depend_on_workers() {
    let tmp = sample_tree();
    for workers in ["1", "2", "8"] {
        let v = json_output(&["--format", "json", "--workers", workers], tmp.path());
        assert_eq!(v["total"]["size"], 135, "workers={workers}");
        assert_eq!(v["total"]["count"], 4, "workers={workers}");
    }
}

#[test]
fn multiple_roots_are_reported_in_order() {
    let tmp = sample_tree();
    let sub = tmp.path().join("sub");
    let output = dirsizer()
        .args(["-f", "jsonl"])
        .arg(tmp.path())
        .arg(&sub)
        .output()
        .unwrap();
    assert!(output.status.success());
    let lines: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["size"], 135);
    assert_eq!(lines[1]["size"], 105);
    assert_eq!(lines[2]["type"], "total");
    assert_eq!(lines[2]["size"], 240);
}

#[test]
fn zero_workers_is_rejected() {
    let tmp = sample_tree();
    dirsizer()
        .args(["--workers", "0"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("0 workers"));
}

#[test]
fn missing_root_fails_but_others_are_sized() {
    let tmp = sample_tree();
    let missing = tmp.path().join("does-not-exist");
    dirsizer()
        .args(["-f", "json"])
        .arg(tmp.path())
        .arg(&missing)
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\""))
        .stdout(predicate::str::contains("135"))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn config_file_supplies_defaults() {
    let tmp = sample_tree();
    let cfg_dir = TempDir::new().unwrap();
    let cfg = cfg_dir.path().join("dirsizer.yaml");
    fs::write(&cfg, "format: json\nworkers: 2\n").unwrap();

    let v = json_output(&["--config", cfg.to_str().unwrap()], tmp.path());
    assert_eq!(v["total"]["count"], 4);
}

#[test]
fn bad_config_file_is_reported() {
    let cfg_dir = TempDir::new().unwrap();
    let cfg = cfg_dir.path().join("dirsizer.json");
    fs::write(&cfg, "{ not json").unwrap();
    dirsizer()
        .arg("--config")
        .arg(&cfg)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn human_sizes() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("big"), vec![0u8; 3 * 1024]).unwrap();
    dirsizer()
        .arg("-H")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("3.0 KiB"));
}

#[test]
fn expired_timeout_cancels() {
    let tmp = sample_tree();
    dirsizer()
        .args(["--timeout", "1ms"])
        .arg(tmp.path())
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .code(predicate::in_iter([0, 1]));
}

#[cfg(unix)]
#[test]
fn symlinks_are_counted_only_when_followed() {
    let tmp = sample_tree();
    std::os::unix::fs::symlink(tmp.path().join("sub/deeper/d"), tmp.path().join("link")).unwrap();
    std::os::unix::fs::symlink(tmp.path(), tmp.path().join("sub/loop")).unwrap();

    let plain = json_output(&["-f", "json"], tmp.path());
    assert_eq!(plain["total"]["count"], 4);
    assert_eq!(plain["total"]["size"], 135);

    let followed = json_output(&["-f", "json", "-L"], tmp.path());
    assert_eq!(followed["total"]["count"], 5);
    assert_eq!(followed["total"]["size"], 235);
}

#[test]
fn version_flag() {
    dirsizer()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
