//! # CLI
//!
//! This module defines the data structures used to parse command line
//! arguments when running the program.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::paths::{DEFAULT_STORAGE_ROOT, STORAGE_ROOT_ENV, StoragePaths};

/// This struct represents the top-level CLI entry point for the tool.
#[derive(Parser, Debug)]
#[command(about = "Maintenance commands for stored documents", long_about = None)]
pub struct Cli {
    /// Root of the application storage tree.
    #[arg(
        long,
        global = true,
        env = STORAGE_ROOT_ENV,
        default_value = DEFAULT_STORAGE_ROOT
    )]
    pub storage_root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// The storage locations selected on the command line or environment.
    pub fn storage_paths(&self) -> StoragePaths {
        StoragePaths::new(&self.storage_root)
    }
}

/// This enum represents the different commands available.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Delete the files inside every subfolder of `public/documentos`.
    #[command(name = "eliminar-documentos", visible_alias = "app:eliminar-documentos")]
    EliminarDocumentos,
}
