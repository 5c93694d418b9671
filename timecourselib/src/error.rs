//! Error types for timecourselib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running the measurement pipeline.
///
/// Every error is fatal to the run: nothing is retried or recovered
/// internally, and no partial output is written.
#[derive(Error, Debug)]
pub enum TimecourseError {
    /// Input directory does not exist or is not a directory
    #[error("directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// A timepoint file could not be loaded as a one-measurement table
    #[error("malformed table '{path}': {message}")]
    MalformedTable { path: PathBuf, message: String },

    /// No tables were provided to the merge step
    #[error("no input tables to merge")]
    EmptyInput,

    /// A table does not carry the configured join key column
    #[error("join key '{key}' missing from table keyed by '{found}'")]
    JoinKeyMissing { key: String, found: String },

    /// Failed to write an output file
    #[error("failed to write '{path}': {source}")]
    WriteError { path: PathBuf, source: csv::Error },
}
