//! Scanning building blocks
//!
//! - `core`: shared utilities (pager wrapper)
//! - `root`: repository root detection
//! - `ignore`: ignore rules and their expansion
//! - `marker`: marker comments and their extraction
//! - `scan`: the pipeline tying them together

pub mod core;
pub mod ignore;
pub mod marker;
pub mod root;
pub mod scan;
