//! Scanner - walks a directory and turns its files into records

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use log::{debug, info, warn};
use rayon::prelude::*;

use crate::error::{PithError, Result};
use crate::index::FileIndex;
use crate::record::{FileRecord, FileRef};

use super::config::ScanConfig;
use super::utils::{passes_time_filter, should_ignore_path};

/// Files found under a scan root.
#[derive(Debug)]
pub struct ScanReport {
    pub root: PathBuf,
    /// Indexable files, sorted by path.
    pub files: Vec<FileRef>,
    /// Files whose names cannot be indexed.
    pub skipped: Vec<PathBuf>,
}

impl ScanReport {
    /// Insert every scanned file into a fresh index, in path order.
    pub fn build_index(&self) -> FileIndex {
        self.files.iter().cloned().collect()
    }
}

/// Directory scanner that respects ignore files by default.
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn scan(&self, root: &Path) -> Result<ScanReport> {
        if !root.exists() {
            return Err(PithError::PathNotFound(root.to_path_buf()));
        }

        // Phase 1: collect candidate paths
        let mut paths = self.collect_paths(root);
        paths.sort();
        debug!("found {} candidate files under {}", paths.len(), root.display());

        // Phase 2: read metadata in parallel
        let records = read_records(paths, self.config.parallel_workers);

        let mut files = Vec::new();
        let mut skipped = Vec::new();
        for (path, record) in records {
            match record {
                Ok(record) => {
                    if passes_time_filter(record.modified(), &self.config) {
                        files.push(record.into_ref());
                    }
                }
                Err(PithError::InvalidName { reason, .. }) => {
                    debug!("skipping {}: {}", path.display(), reason);
                    skipped.push(path);
                }
                Err(e) => warn!("cannot read {}: {}", path.display(), e),
            }
        }

        if !skipped.is_empty() {
            info!(
                "skipped {} files with names outside [A-Za-z0-9.] or more than one '.'",
                skipped.len()
            );
        }
        info!("scanned {} files under {}", files.len(), root.display());

        Ok(ScanReport {
            root: root.to_path_buf(),
            files,
            skipped,
        })
    }

    fn collect_paths(&self, root: &Path) -> Vec<PathBuf> {
        let respect_ignores = !self.config.show_all;
        let patterns = self.config.ignore_patterns.clone();

        let walker = WalkBuilder::new(root)
            .follow_links(false)
            .max_depth(self.config.max_depth)
            .require_git(false)
            .hidden(respect_ignores)
            .parents(respect_ignores)
            .ignore(respect_ignores)
            .git_ignore(respect_ignores)
            .git_global(respect_ignores)
            .git_exclude(respect_ignores)
            .filter_entry(move |entry| !should_ignore_path(entry.path(), &patterns))
            .build();

        let mut paths = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    // Symlinks report their own file type and are skipped here.
                    if entry.file_type().is_some_and(|t| t.is_file()) {
                        paths.push(entry.into_path());
                    }
                }
                Err(e) => warn!("walk error: {}", e),
            }
        }
        paths
    }
}

/// Build records for `paths`, preserving their order.
fn read_records(paths: Vec<PathBuf>, workers: usize) -> Vec<(PathBuf, Result<FileRecord>)> {
    let read = |path: PathBuf| {
        let record = FileRecord::from_path(&path);
        (path, record)
    };

    match workers {
        // Auto-detect: use rayon's default thread pool
        0 => paths.into_par_iter().map(read).collect(),
        1 => paths.into_iter().map(read).collect(),
        n => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
            Ok(pool) => pool.install(|| paths.into_par_iter().map(read).collect::<Vec<_>>()),
            Err(e) => {
                // Fall back to rayon's global pool if custom pool creation fails
                debug!("cannot build {} worker pool ({}), using global pool", n, e);
                paths.into_par_iter().map(read).collect()
            }
        },
    }
}
