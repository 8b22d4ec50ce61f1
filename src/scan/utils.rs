//! Shared helpers for scanning and display

use std::path::Path;
use std::time::SystemTime;

use glob::Pattern;

use super::config::ScanConfig;

/// Check if a path should be ignored based on name and ignore patterns.
pub fn should_ignore_path(path: &Path, ignore_patterns: &[String]) -> bool {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    // Always ignore .git directory
    if name == ".git" {
        return true;
    }

    ignore_patterns
        .iter()
        .any(|pattern| name == *pattern || glob_match(pattern, &name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Check a modification time against the configured time window.
/// Files with an unknown mtime always pass.
pub fn passes_time_filter(modified: Option<SystemTime>, config: &ScanConfig) -> bool {
    let Some(mtime) = modified else {
        return true;
    };

    if config.newer_than.is_some_and(|newer| mtime < newer) {
        return false;
    }
    if config.older_than.is_some_and(|older| mtime > older) {
        return false;
    }
    true
}
