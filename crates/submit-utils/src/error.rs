//! Error types for submission utilities.

use thiserror::Error;

/// Errors that can occur while staging job dependencies.
#[derive(Debug, Error)]
pub enum StagingError {
    /// A file dependency no longer exists on disk.
    #[error("Missing dependency file: {path}")]
    MissingDependency {
        /// Path that was registered as a dependency.
        path: String,
    },

    /// Filesystem error while copying or writing a dependency.
    #[error("I/O error staging {path}: {source}")]
    Io {
        /// Path being staged when the error occurred.
        path: String,
        /// Underlying filesystem error.
        source: std::io::Error,
    },
}
