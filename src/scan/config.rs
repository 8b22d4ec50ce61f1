//! Configuration types for directory scanning

use std::time::SystemTime;

/// Configuration for scanning behavior.
#[derive(Debug, Clone, Default)]
pub struct ScanConfig {
    /// Index everything, ignoring .gitignore/.ignore files and hidden-file rules
    pub show_all: bool,
    pub max_depth: Option<usize>,
    pub ignore_patterns: Vec<String>,
    /// Number of parallel workers for reading file metadata.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub parallel_workers: usize,
    /// Only include files modified after this time
    pub newer_than: Option<SystemTime>,
    /// Only include files modified before this time
    pub older_than: Option<SystemTime>,
}
