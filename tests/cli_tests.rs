//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn remove_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("remove").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn populated_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "b").unwrap();
    fs::write(temp_dir.path().join("keep.log"), "log").unwrap();
    fs::create_dir_all(temp_dir.path().join("build/nested")).unwrap();
    fs::write(temp_dir.path().join("build/main.o"), "obj").unwrap();
    fs::write(temp_dir.path().join("build/nested/lib.a"), "lib").unwrap();
    temp_dir
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("remove").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("remove"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("remove").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "deleting files and directories matching glob patterns",
        ));
}

#[test]
fn test_no_arguments_changes_nothing() {
    let temp_dir = populated_dir();

    remove_in(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert!(temp_dir.path().join("a.txt").exists());
    assert!(temp_dir.path().join("build/nested/lib.a").exists());
}

#[test]
fn test_txt_glob_leaves_other_files() {
    let temp_dir = populated_dir();

    remove_in(temp_dir.path())
        .arg("*.txt")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert!(!temp_dir.path().join("a.txt").exists());
    assert!(!temp_dir.path().join("b.txt").exists());
    assert!(temp_dir.path().join("keep.log").exists());
    assert!(temp_dir.path().join("build").is_dir());
}

#[test]
fn test_directory_removed_with_contents() {
    let temp_dir = populated_dir();

    remove_in(temp_dir.path()).arg("build").assert().success();

    assert!(!temp_dir.path().join("build").exists());
    assert!(temp_dir.path().join("keep.log").exists());
}

#[test]
fn test_nonexistent_pattern_succeeds() {
    let temp_dir = populated_dir();

    remove_in(temp_dir.path())
        .arg("nonexistent*")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 4);
}

#[test]
fn test_second_invocation_is_a_no_op() {
    let temp_dir = populated_dir();

    remove_in(temp_dir.path())
        .args(["*.txt", "build"])
        .assert()
        .success();
    remove_in(temp_dir.path())
        .args(["*.txt", "build"])
        .assert()
        .success();

    let remaining: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(remaining, vec!["keep.log"]);
}

#[test]
fn test_multiple_patterns_and_classes() {
    let temp_dir = populated_dir();
    fs::write(temp_dir.path().join("cache-1"), "").unwrap();
    fs::write(temp_dir.path().join("cache-x"), "").unwrap();

    remove_in(temp_dir.path())
        .args(["cache-[0-9]", "?.txt"])
        .assert()
        .success();

    assert!(!temp_dir.path().join("cache-1").exists());
    assert!(temp_dir.path().join("cache-x").exists());
    assert!(!temp_dir.path().join("a.txt").exists());
}

#[test]
fn test_verbose_logs_removals_to_stderr() {
    let temp_dir = populated_dir();

    remove_in(temp_dir.path())
        .args(["--verbose", "a.txt"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Removed File a.txt"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let temp_dir = populated_dir();

    remove_in(temp_dir.path())
        .args(["--dry-run", "*.txt"])
        .assert()
        .failure()
        .code(2);

    assert!(temp_dir.path().join("a.txt").exists());
}

#[cfg(target_os = "linux")]
#[test]
fn test_failed_removal_stops_later_patterns() {
    // procfs entries cannot be unlinked, even by root
    let undeletable = Path::new("/proc/self/status");
    if !undeletable.exists() {
        return;
    }
    let temp_dir = populated_dir();

    remove_in(temp_dir.path())
        .args(["a.txt", "/proc/self/status", "b.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to remove file /proc/self/status"))
        .stderr(predicate::str::contains("\u{1b}[").not());

    assert!(!temp_dir.path().join("a.txt").exists());
    assert!(temp_dir.path().join("b.txt").exists());
}

#[test]
fn test_double_star_inside_component() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("axb"), "").unwrap();
    fs::write(temp_dir.path().join("notes.txt"), "").unwrap();
    fs::write(temp_dir.path().join("keep"), "").unwrap();

    remove_in(temp_dir.path())
        .args(["a**b", "*.tx**"])
        .assert()
        .success();

    assert!(!temp_dir.path().join("axb").exists());
    assert!(!temp_dir.path().join("notes.txt").exists());
    assert!(temp_dir.path().join("keep").exists());
}

#[test]
fn test_double_star_component_empties_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("build/sub/deep")).unwrap();
    fs::write(temp_dir.path().join("build/a.o"), "").unwrap();
    fs::write(temp_dir.path().join("build/sub/deep/x"), "").unwrap();

    remove_in(temp_dir.path())
        .arg("build/**")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert!(temp_dir.path().join("build").is_dir());
    assert_eq!(fs::read_dir(temp_dir.path().join("build")).unwrap().count(), 0);
}

#[cfg(unix)]
#[test]
fn test_symlink_to_directory_removes_link_only() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("target/inner")).unwrap();
    fs::write(temp_dir.path().join("target/inner/file"), "x").unwrap();
    std::os::unix::fs::symlink("target", temp_dir.path().join("link")).unwrap();

    remove_in(temp_dir.path()).arg("link").assert().success();

    assert!(fs::symlink_metadata(temp_dir.path().join("link")).is_err());
    assert!(temp_dir.path().join("target/inner/file").exists());
}
