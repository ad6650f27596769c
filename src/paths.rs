//! # Paths
//!
//! Locations of the document storage tree.

use std::path::PathBuf;

/// Storage root used when neither `--storage-root` nor `STORAGE_ROOT` is set.
pub const DEFAULT_STORAGE_ROOT: &str = "storage";

/// Environment variable holding the storage root.
pub const STORAGE_ROOT_ENV: &str = "STORAGE_ROOT";

/// The documents directory, relative to the storage root.
pub const DOCUMENTS_DIRECTORY: &str = "public/documentos";

/// Resolved locations under one storage root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    storage_root: PathBuf,
}

impl StoragePaths {
    /// Creates the paths for the given storage root.
    pub fn new(storage_root: impl Into<PathBuf>) -> Self {
        Self {
            storage_root: storage_root.into(),
        }
    }

    /// The directory whose subfolders hold uploaded documents, i.e.
    /// `<storage_root>/public/documentos`.
    pub fn documents_directory(&self) -> PathBuf {
        self.storage_root.join(DOCUMENTS_DIRECTORY)
    }
}
