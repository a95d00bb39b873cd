//! Error types for the CLI

use std::path::PathBuf;
use story_types::StoryError;

/// CLI-specific errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The story was rejected by the compiler
    #[error("{}: {}", .0.kind, .0)]
    Story(#[from] StoryError),

    /// The story file could not be read
    #[error("Could not read file '{}': {source}", .path.display())]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be written
    #[error("Could not write file '{}': {source}", .path.display())]
    Write {
        /// File that was being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The scene graph could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No bundled sample story has this name
    #[error("Unknown example '{0}' (try --list-examples)")]
    UnknownExample(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
