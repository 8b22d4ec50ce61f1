//! Result formatting
//!
//! - `config` - Output configuration types
//! - `console` - Colored line-per-file console output
//! - `json` - JSON output

mod config;
mod console;
mod json;

use std::path::Path;

pub use config::OutputConfig;
pub use console::ConsoleFormatter;
pub use json::{JsonFile, JsonReport, JsonStats, print_json, render_json};

use crate::record::FileRef;

/// Path of `file` relative to `root`, or its bare name when it has no path
/// under `root`.
pub fn display_path(root: &Path, file: &FileRef) -> String {
    file.path()
        .and_then(|p| p.strip_prefix(root).ok())
        .filter(|rel| !rel.as_os_str().is_empty())
        .map(|rel| rel.to_string_lossy().to_string())
        .unwrap_or_else(|| file.name().to_string())
}
