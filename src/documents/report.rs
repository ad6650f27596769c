//! # Cleanup Report
//!
//! The structured result of a cleanup run: an [`Outcome`], the
//! [`CleanupEvent`]s emitted along the way and a count of deleted files.
//! Events render as the console messages shown to the operator.

use std::{fmt, path::PathBuf, process::ExitCode};

/// The binary result of one cleanup run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every subfolder was cleaned.
    Success,
    /// The documents directory does not exist; nothing was touched.
    Failure,
}

impl Outcome {
    /// The process exit code for this outcome: 0 on success, 1 on failure.
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure => ExitCode::FAILURE,
        }
    }
}

/// Something that happened during a cleanup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupEvent {
    /// The documents directory is missing or is not a directory.
    RootNotFound {
        /// The path that was checked.
        path: PathBuf,
    },
    /// Every file directly inside `folder` has been deleted.
    FolderCleaned {
        /// The full path of the cleaned subfolder.
        folder: PathBuf,
    },
    /// All subfolders have been processed.
    Completed,
}

impl CleanupEvent {
    /// True for events shown as warnings rather than informational lines.
    pub fn is_warning(&self) -> bool {
        matches!(self, CleanupEvent::RootNotFound { .. })
    }
}

impl fmt::Display for CleanupEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupEvent::RootNotFound { path } => {
                write!(f, "La ruta {} no existe.", path.display())
            }
            CleanupEvent::FolderCleaned { folder } => {
                write!(f, "Archivos eliminados de: {}", folder.display())
            }
            CleanupEvent::Completed => f.write_str("Limpieza de documentos completada."),
        }
    }
}

/// Everything a finished cleanup run reports back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupReport {
    /// Whether the run succeeded.
    pub outcome: Outcome,
    /// Events in the order they were emitted.
    pub events: Vec<CleanupEvent>,
    /// Number of files removed.
    pub files_deleted: usize,
}

impl CleanupReport {
    /// The subfolders named by [`CleanupEvent::FolderCleaned`] events.
    pub fn cleaned_folders(&self) -> impl Iterator<Item = &PathBuf> {
        self.events.iter().filter_map(|event| match event {
            CleanupEvent::FolderCleaned { folder } => Some(folder),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_messages() {
        let missing = CleanupEvent::RootNotFound {
            path: PathBuf::from("/srv/storage/public/documentos"),
        };
        assert_eq!(
            missing.to_string(),
            "La ruta /srv/storage/public/documentos no existe."
        );
        assert!(missing.is_warning());

        let cleaned = CleanupEvent::FolderCleaned {
            folder: PathBuf::from("/srv/storage/public/documentos/42"),
        };
        assert_eq!(
            cleaned.to_string(),
            "Archivos eliminados de: /srv/storage/public/documentos/42"
        );
        assert!(!cleaned.is_warning());

        assert_eq!(
            CleanupEvent::Completed.to_string(),
            "Limpieza de documentos completada."
        );
        assert!(!CleanupEvent::Completed.is_warning());
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(Outcome::Success.exit_code(), ExitCode::SUCCESS);
        assert_eq!(Outcome::Failure.exit_code(), ExitCode::FAILURE);
    }
}
