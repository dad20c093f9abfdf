//! Repository root detection
//!
//! A repository root is the nearest ancestor of the starting directory that
//! holds a `.git` directory. The search walks the parent chain of the
//! normalized start path and stops at the filesystem root, which is never
//! probed itself.

use crate::areas::filesystem::FileSystem;
use std::path::{Path, PathBuf};

/// Name of the repository marker directory
pub const GIT_DIR: &str = ".git";

/// Decides whether a directory is the root of a repository
pub trait RootDetector {
    fn detect_root(&self, fs: &dyn FileSystem, path: &Path) -> bool;
}

/// Detects Git repositories by their `.git` marker directory
#[derive(Debug, Default, Clone, Copy)]
pub struct GitDetector;

impl RootDetector for GitDetector {
    fn detect_root(&self, fs: &dyn FileSystem, path: &Path) -> bool {
        fs.is_dir(&path.join(GIT_DIR))
    }
}

/// Absolute path of a directory holding the repository marker
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryRoot(Box<Path>);

impl RepositoryRoot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RepositoryRoot(path.into().into_boxed_path())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.0.join(path)
    }
}

impl AsRef<Path> for RepositoryRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for RepositoryRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

pub struct RootLocator<'f, D = GitDetector> {
    fs: &'f dyn FileSystem,
    detector: D,
}

impl<'f> RootLocator<'f> {
    pub fn new(fs: &'f dyn FileSystem) -> Self {
        Self::with_detector(fs, GitDetector)
    }
}

impl<'f, D: RootDetector> RootLocator<'f, D> {
    pub fn with_detector(fs: &'f dyn FileSystem, detector: D) -> Self {
        RootLocator { fs, detector }
    }

    /// Find the repository containing `start`
    ///
    /// Returns `None` when no ancestor below the filesystem root carries the
    /// marker, or when `start` itself does not exist.
    pub fn locate(&self, start: &Path) -> Option<RepositoryRoot> {
        let mut candidate = match self.fs.canonicalize(start) {
            Ok(path) => path,
            Err(_err) => {
                debug_log!("Cannot normalize {}: {}", start.display(), _err);
                return None;
            }
        };

        while candidate.parent().is_some() {
            if self.detector.detect_root(self.fs, &candidate) {
                debug_log!("Repository root found at {}", candidate.display());
                return Some(RepositoryRoot::new(candidate));
            }
            candidate.pop();
        }

        debug_log!("Reached filesystem root from {}", start.display());
        None
    }
}
