//! # Document Cleanup
//!
//! Empties the per-record subfolders of the documents directory.
//!
//! Every immediate subfolder of the root keeps existing, but the regular
//! files directly inside it are deleted. Deeper directories and files lying
//! directly in the root are never touched. Symbolic links are not followed
//! below the root.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::documents::{
    errors::CleanerError,
    report::{CleanupEvent, CleanupReport, Outcome},
};

/// Cleans every subfolder of `root` and collects the emitted events.
///
/// # Arguments
///
/// - `root` - The documents directory, typically
///   `<storage_root>/public/documentos`.
///
/// # Returns
///
/// A [`CleanupReport`] whose outcome is [`Outcome::Failure`] when `root` is
/// not an existing directory, or a [`CleanerError`] if listing a directory
/// or deleting a file fails. The run stops at the first such error.
pub fn run(root: &Path) -> Result<CleanupReport, CleanerError> {
    run_with(root, |_| {})
}

/// Like [`run`], but hands each event to `on_event` as soon as it happens.
///
/// # Arguments
///
/// - `root` - The documents directory.
/// - `on_event` - Called once per event, in emission order.
///
/// # Returns
///
/// The same [`CleanupReport`] as [`run`]. If an error aborts the run, the
/// events already passed to `on_event` are the only record of the
/// subfolders that were cleaned.
pub fn run_with<F>(root: &Path, on_event: F) -> Result<CleanupReport, CleanerError>
where
    F: FnMut(&CleanupEvent),
{
    let mut recorder = Recorder::new(on_event);

    if !root.is_dir() {
        warn!(path = %root.display(), "documents directory does not exist");
        recorder.emit(CleanupEvent::RootNotFound {
            path: root.to_path_buf(),
        });
        return Ok(recorder.finish(Outcome::Failure, 0));
    }

    let subfolders: Vec<PathBuf> = list_entries(root)?
        .into_iter()
        .filter(|entry| entry.file_type().is_dir())
        .map(DirEntry::into_path)
        .collect();
    debug!(root = %root.display(), subfolders = subfolders.len(), "cleaning documents");

    let mut files_deleted = 0;
    for folder in subfolders {
        let deleted = clean_folder(&folder)?;
        info!(folder = %folder.display(), files = deleted, "cleaned subfolder");
        files_deleted += deleted;
        recorder.emit(CleanupEvent::FolderCleaned { folder });
    }

    recorder.emit(CleanupEvent::Completed);
    Ok(recorder.finish(Outcome::Success, files_deleted))
}

/// Deletes the regular files directly inside `folder`.
///
/// # Returns
///
/// The number of files deleted.
fn clean_folder(folder: &Path) -> Result<usize, CleanerError> {
    let mut deleted = 0;
    for entry in list_entries(folder)? {
        if !entry.file_type().is_file() {
            continue;
        }
        fs::remove_file(entry.path()).map_err(|error| CleanerError::IoDelete {
            path: entry.path().to_path_buf(),
            error,
        })?;
        debug!(file = %entry.path().display(), "deleted file");
        deleted += 1;
    }
    Ok(deleted)
}

/// Lists the entries directly inside `directory`, sorted by file name.
fn list_entries(directory: &Path) -> Result<Vec<DirEntry>, CleanerError> {
    WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            entry.map_err(|error| CleanerError::IoRead {
                path: directory.to_path_buf(),
                error,
            })
        })
        .collect()
}

/// Forwards events to the caller's sink and keeps them for the report.
struct Recorder<F> {
    on_event: F,
    events: Vec<CleanupEvent>,
}

impl<F: FnMut(&CleanupEvent)> Recorder<F> {
    fn new(on_event: F) -> Self {
        Self {
            on_event,
            events: Vec::new(),
        }
    }

    fn emit(&mut self, event: CleanupEvent) {
        (self.on_event)(&event);
        self.events.push(event);
    }

    fn finish(self, outcome: Outcome, files_deleted: usize) -> CleanupReport {
        CleanupReport {
            outcome,
            events: self.events,
            files_deleted,
        }
    }
}
