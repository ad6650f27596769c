//! # Documents
//!
//! Maintenance operations on the uploaded-documents storage tree.

pub mod cleaner;
pub mod errors;
pub mod report;

pub use cleaner::{run, run_with};
pub use errors::CleanerError;
pub use report::{CleanupEvent, CleanupReport, Outcome};
