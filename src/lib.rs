//! A small marker-comment tracker for Git repositories
//!
//! `bugs` finds the root of the repository containing the current directory,
//! walks its file tree while honoring `.bignore` and `.gitignore`, extracts
//! `TODO:` comments from every text file and keeps them as a flat list in
//! `<root>/bugs`.
//!
//! - `areas`: filesystem access, tree walking, the persisted bug list and the
//!   repository facade used by the commands
//! - `artifacts`: root detection, ignore rules, marker extraction and the
//!   scanning pipeline
//! - `commands`: the `update` and `print` subcommands

/// Debug logging, compiled in only with the `debug_scan` feature
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Rejected candidate {}", path);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "debug_scan")]
        {
            eprintln!($($arg)*);
        }
        #[cfg(not(feature = "debug_scan"))]
        {
            let _ = format_args!($($arg)*);
        }
    }};
}

pub mod areas;
pub mod artifacts;
pub mod commands;

/// How the source path of a marker is rendered in the bug list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PathFormat {
    /// Root-relative path, e.g. `./src/main.c`
    #[default]
    Long,
    /// File name only, e.g. `main.c`
    Short,
    /// No path at all
    None,
}
