//! Errors raised while reading dataset metadata.

use std::path::PathBuf;

/// Errors that can occur while parsing list files and configuration
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("Missing file: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("Parse error in {} at line {line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("Invalid pose record: {0}")]
    InvalidPose(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
