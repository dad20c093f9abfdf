//! Scanning pipeline
//!
//! Locate the repository root, build the ignore set, walk the tree and extract
//! markers from every candidate. Files that cannot be read as text are
//! reported through [`diagnostics::Diagnostics`] and skipped. Only a missing
//! repository aborts a scan.

pub mod diagnostics;
pub mod scanner;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("not a git repository (or any of the parent directories): {}", .start.display())]
    RepositoryNotFound { start: PathBuf },
}
