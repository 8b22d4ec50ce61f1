//! Edge case and error handling tests for pith

mod harness;

use harness::{TestDir, listed_names, run_pith};
use std::os::unix::fs::symlink;
use std::process::Command;

// ============================================================================
// Symlinks
// ============================================================================

#[test]
fn test_symlink_to_file_is_not_indexed() {
    let dir = TestDir::new();
    dir.add_file("target.txt", "12345");
    symlink(dir.path().join("target.txt"), dir.path().join("link.txt"))
        .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_pith(dir.path(), &[]);
    assert!(success);
    assert_eq!(listed_names(&stdout), vec!["target.txt"]);
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("subdir/file.txt", "1");
    symlink("..", dir.path().join("subdir").join("parent")).expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_pith(dir.path(), &["-a"]);
    assert!(success, "pith should not hang on parent symlink");
    assert_eq!(listed_names(&stdout), vec!["file.txt"]);
}

// ============================================================================
// Names outside the indexable alphabet
// ============================================================================

#[test]
fn test_unindexable_names_are_skipped() {
    let dir = TestDir::new();
    dir.add_file("good.txt", "1");
    dir.add_file("snake_case.txt", "1");
    dir.add_file("archive.tar.gz", "1");
    dir.add_file("spaced name.txt", "1");

    let (stdout, _stderr, success) = run_pith(dir.path(), &[]);
    assert!(success);
    assert_eq!(listed_names(&stdout), vec!["good.txt"]);
}

#[test]
fn test_skipped_count_in_json() {
    let dir = TestDir::new();
    dir.add_file("good.txt", "1");
    dir.add_file("not-good.txt", "1");

    let (stdout, _stderr, success) = run_pith(dir.path(), &["--json"]);
    assert!(success);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["stats"]["skipped"], 1);
    assert_eq!(value["stats"]["files"], 1);
}

#[test]
fn test_verbose_reports_skipped_files() {
    let dir = TestDir::new();
    dir.add_file("good.txt", "1");
    dir.add_file("not_good.txt", "1");

    let (_stdout, stderr, success) = run_pith(dir.path(), &["-v"]);
    assert!(success);
    assert!(stderr.contains("skipped 1 files"), "stderr: {}", stderr);

    let (_stdout, quiet, _) = run_pith(dir.path(), &[]);
    assert!(!quiet.contains("skipped"), "default level should be quiet: {}", quiet);
}

#[test]
fn test_log_env_overrides_verbosity() {
    let dir = TestDir::new();
    dir.add_file("good.txt", "1");

    let output = Command::new(env!("CARGO_BIN_EXE_pith"))
        .current_dir(dir.path())
        .env("PITH_LOG", "debug")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run pith");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("index built"), "stderr: {}", stderr);
}

#[test]
fn test_prefix_outside_alphabet_matches_nothing() {
    let dir = TestDir::with_reference_files();

    let (stdout, _stderr, success) = run_pith(dir.path(), &["-p", "a_"]);
    assert!(success);
    assert!(listed_names(&stdout).is_empty());
}

// ============================================================================
// Unusual roots and contents
// ============================================================================

#[test]
fn test_empty_directory() {
    let dir = TestDir::new();

    let (stdout, _stderr, success) = run_pith(dir.path(), &["-s", "0.."]);
    assert!(success);
    assert!(stdout.contains("0 of 0 files, 0 distinct sizes"), "{}", stdout);
}

#[test]
fn test_root_is_a_file() {
    let dir = TestDir::with_reference_files();

    let (stdout, _stderr, success) = run_pith(dir.path(), &["abc.txt", "--no-size"]);
    assert!(success);
    assert!(stdout.starts_with("abc.txt\n"), "{}", stdout);
    assert!(stdout.contains("1 of 1 files"));
}

#[test]
fn test_hidden_files_need_all_flag() {
    let dir = TestDir::new();
    dir.add_file(".env", "SECRET");
    dir.add_file("visible.txt", "1");

    let (stdout, _stderr, _) = run_pith(dir.path(), &[]);
    assert_eq!(listed_names(&stdout), vec!["visible.txt"]);

    let (stdout, _stderr, _) = run_pith(dir.path(), &["-a", "-p", "."]);
    assert_eq!(listed_names(&stdout), vec![".env"]);
}

#[test]
fn test_empty_files_have_size_zero() {
    let dir = TestDir::new();
    dir.add_file("empty.txt", "");
    dir.add_file("full.txt", "x");

    let (stdout, _stderr, success) = run_pith(dir.path(), &["-s", "0"]);
    assert!(success);
    assert_eq!(listed_names(&stdout), vec!["empty.txt"]);
}

#[test]
fn test_same_size_files_keep_path_order() {
    let dir = TestDir::new();
    dir.add_file("c.txt", "123");
    dir.add_file("a.txt", "123");
    dir.add_file("b/b.txt", "123");

    let (stdout, _stderr, success) = run_pith(dir.path(), &["-s", "3", "-j", "1"]);
    assert!(success);
    assert_eq!(listed_names(&stdout), vec!["a.txt", "b.txt", "c.txt"]);
}

#[test]
fn test_open_ended_ranges() {
    let dir = TestDir::with_reference_files();

    let (low, _, _) = run_pith(dir.path(), &["-s", "..2"]);
    assert_eq!(listed_names(&low), vec!["a.txt", "ab.txt"]);

    let (high, _, _) = run_pith(dir.path(), &["-s", "6.."]);
    assert_eq!(listed_names(&high), vec!["AbCd.txt", "B.txt"]);
}

#[test]
fn test_older_filter_excludes_fresh_files() {
    let dir = TestDir::with_reference_files();

    let (stdout, _stderr, success) = run_pith(dir.path(), &["--older", "1d"]);
    assert!(success);
    assert!(listed_names(&stdout).is_empty());

    let (stdout, _stderr, _) = run_pith(dir.path(), &["--newer", "1d"]);
    assert_eq!(listed_names(&stdout).len(), 7);
}
