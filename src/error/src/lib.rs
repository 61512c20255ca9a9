//! Compendium error handling.
//!
//! Covers the failures that can happen while writing or reading back a pack
//! file: IO, JSON serialization and malformed lines.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while producing a compendium pack
#[derive(Debug, Error)]
pub enum CompendiumError {
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// A record could not be turned into JSON
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A line of an existing pack is not a valid record
    #[error("Invalid record on line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The destination has no usable parent directory or file name
    #[error("Invalid pack path: {0:?}")]
    InvalidPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, CompendiumError>;

/// Turn an error into a message fit for the terminal
pub fn handle_error(error: &CompendiumError) -> String {
    match error {
        CompendiumError::IoError(e) => match e.kind() {
            std::io::ErrorKind::NotFound => "Pack file or directory does not exist".to_string(),
            std::io::ErrorKind::PermissionDenied => {
                "No permission to write the pack file".to_string()
            }
            _ => format!("IO error: {}", e),
        },
        CompendiumError::InvalidRecord { line, .. } => {
            format!("Pack file is corrupted at line {}", line)
        }
        _ => error.to_string(),
    }
}
