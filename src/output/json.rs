//! JSON output formatting

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::Result;
use crate::index::IndexStats;
use crate::record::FileRef;
use crate::scan::format_size;

use super::display_path;

#[derive(Debug, Clone, Serialize)]
pub struct JsonFile {
    pub name: String,
    pub path: String,
    pub size_bytes: u64,
    pub size_human: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Local>>,
}

impl JsonFile {
    fn new(root: &Path, file: &FileRef) -> Self {
        Self {
            name: file.name().to_string(),
            path: display_path(root, file),
            size_bytes: file.size(),
            size_human: format_size(file.size()),
            modified: file.modified().map(DateTime::<Local>::from),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonStats {
    #[serde(flatten)]
    pub index: IndexStats,
    pub matched: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub root: PathBuf,
    pub files: Vec<JsonFile>,
    pub stats: JsonStats,
}

impl JsonReport {
    pub fn new(root: &Path, files: &[FileRef], index: IndexStats, skipped: usize) -> Self {
        Self {
            root: root.to_path_buf(),
            files: files.iter().map(|f| JsonFile::new(root, f)).collect(),
            stats: JsonStats {
                index,
                matched: files.len(),
                skipped,
            },
        }
    }
}

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &JsonReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Print a report as pretty-printed JSON to stdout.
pub fn print_json(report: &JsonReport) -> Result<()> {
    println!("{}", render_json(report)?);
    Ok(())
}
