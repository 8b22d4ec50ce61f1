//! Error types shared by the library and the CLI

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PithError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot access '{0}': No such file or directory")]
    PathNotFound(PathBuf),

    #[error("invalid file name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("invalid size range: {0}")]
    SizeParse(String),

    #[error("invalid duration: {0}")]
    Duration(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PithError>;
