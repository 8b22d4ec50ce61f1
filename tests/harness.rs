//! Test harness for pith integration tests

use std::path::Path;
use std::process::Command;

pub use pith::test_utils::TestDir;

pub fn run_pith(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_pith");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("PITH_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to run pith");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// File names listed by plain console output, in order (summary excluded).
pub fn listed_names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_whitespace().last())
        .map(|path| path.rsplit('/').next().unwrap_or(path).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_reference_files() {
        let dir = TestDir::with_reference_files();
        assert!(dir.path().join("AbCd.txt").exists());
        assert_eq!(std::fs::read_to_string(dir.path().join("B.txt")).unwrap().len(), 7);
    }

    #[test]
    fn test_listed_names_stops_at_summary() {
        let out = "     2B  ab.txt\n     3B  sub/abc.txt\n\n2 of 7 files, 7 distinct sizes\n";
        assert_eq!(listed_names(out), vec!["ab.txt", "abc.txt"]);
    }
}
