//! # Document storage maintenance
//!
//! Console commands for the uploaded-documents storage tree. The only
//! command, `eliminar-documentos`, empties every per-record subfolder of
//! `<storage_root>/public/documentos`.

mod cli;
pub mod documents;
pub mod paths;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, Commands},
    documents::{CleanupEvent, Outcome},
    paths::StoragePaths,
};

/// Runs the command given on the command line.
///
/// Diagnostics are written to stderr through `tracing` when `RUST_LOG`
/// enables them; the operator-facing messages are printed regardless.
///
/// # Returns
///
/// [`ExitCode::SUCCESS`] when the command succeeded and
/// [`ExitCode::FAILURE`] otherwise.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::EliminarDocumentos => eliminar_documentos(&cli.storage_paths()),
    }
}

/// Empties the subfolders of the documents directory and prints each event
/// as it happens.
///
/// # Arguments
///
/// - `paths` - The storage locations to operate on.
///
/// # Returns
///
/// The exit code matching the run's [`Outcome`], or
/// [`ExitCode::FAILURE`] if the run was aborted by an I/O error.
pub fn eliminar_documentos(paths: &StoragePaths) -> ExitCode {
    let root = paths.documents_directory();
    match documents::run_with(&root, print_event) {
        Ok(report) => report.outcome.exit_code(),
        Err(error) => {
            tracing::error!(path = %error.path().display(), "documents cleanup aborted");
            eprintln!("{error}");
            Outcome::Failure.exit_code()
        }
    }
}

fn print_event(event: &CleanupEvent) {
    if event.is_warning() {
        eprintln!("{event}");
    } else {
        println!("{event}");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
