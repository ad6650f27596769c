//! # Error Types
//!
//! This module defines custom error types used throughout the [`documents`]
//! module.
//!
//! [`documents`]: crate::documents

use std::{io, path::PathBuf};

/// Errors that abort a cleanup run.
///
/// A missing documents directory is not an error; it is reported through
/// [`Outcome::Failure`](crate::documents::Outcome::Failure).
#[derive(thiserror::Error, Debug)]
pub enum CleanerError {
    /// Failed to list a directory.
    #[error("Failed to read '{path}': {error}")]
    IoRead {
        /// The directory that could not be listed.
        path: PathBuf,
        /// The underlying directory walk error.
        #[source]
        error: walkdir::Error,
    },

    /// Failed to delete a file.
    #[error("Failed to delete '{path}': {error}")]
    IoDelete {
        /// The file that could not be deleted.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },
}

impl CleanerError {
    /// The path the failing operation was applied to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            CleanerError::IoRead { path, .. } | CleanerError::IoDelete { path, .. } => path,
        }
    }
}
