//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Show the human-readable size column
    pub show_size: bool,
    /// Prefix to highlight at the start of each file name
    pub highlight_prefix: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_size: true,
            highlight_prefix: None,
        }
    }
}
