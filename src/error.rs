//! Error type for codebundle
//!
//! Only run-level failures live here. A file that cannot be read or a
//! subtree that cannot be walked is recovered where it happens and never
//! reaches this type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Directory {} does not exist", .0.display())]
    RootNotFound(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("No code files found in {}", .0.display())]
    NoCodeFiles(PathBuf),

    #[error("Invalid ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Error writing output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
