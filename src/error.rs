//! Error types for segprep
//!
//! Every error is fatal to the run: nothing is retried or recovered
//! locally, and each variant carries enough context (paths, counts) to
//! diagnose a failure without re-running.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Segprep error types
#[derive(Error, Debug)]
pub enum Error {
    /// A required input directory is absent
    #[error("Missing required directories: {}", .directories.join(", "))]
    MissingDirectory {
        /// The absent directories, as `name: path` strings
        directories: Vec<String>,
    },

    /// Image/label count mismatch, caught before any split decision
    #[error("Pairing mismatch: {images} images vs {labels} labels")]
    PairingMismatch {
        /// Number of image files found
        images: usize,
        /// Number of label files found
        labels: usize,
    },

    /// Sorted image and label names diverge at an index
    #[error("Stem mismatch at index {index}: image '{image}' does not pair with label '{label}'")]
    StemMismatch {
        /// Position in the sorted listings where the stems diverge
        index: usize,
        /// Image filename at that position
        image: String,
        /// Label filename at that position
        label: String,
    },

    /// An invocation parameter is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// No matching files found where at least one is required
    #[error("Empty corpus: {0}")]
    EmptyCorpus(String),

    /// An individual file copy failed (the run aborts, no rollback)
    #[error("Failed to copy {}: {source}", .path.display())]
    CopyFailure {
        /// Source path of the failed copy
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// A required manifest key is missing
    #[error("Manifest missing required keys: {}", .missing.join(", "))]
    IncompleteManifest {
        /// The absent top-level keys
        missing: Vec<String>,
    },

    /// Manifest write or round-trip verification failed
    #[error("Manifest serialization failed: {0}")]
    SerializationFailure(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
