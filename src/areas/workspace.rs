//! Working tree enumeration
//!
//! The tree walker lists every file under the repository root that survives
//! the ignore set. Each call to [`TreeWalker::walk`] enumerates the tree from
//! scratch and lazily, so nothing is cached between walks.

use crate::areas::filesystem::FileSystem;
use crate::artifacts::ignore::ignore_set::IgnoreSet;
use crate::artifacts::root::RepositoryRoot;
use std::path::{Component, Path, PathBuf};

/// A file considered for scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePath {
    absolute: PathBuf,
    display: String,
}

impl CandidatePath {
    /// Build a candidate for `absolute`, which must lie under `root`
    pub fn new(root: &Path, absolute: PathBuf) -> Option<Self> {
        let display = display_path(absolute.strip_prefix(root).ok()?);
        Some(CandidatePath { absolute, display })
    }

    pub fn absolute(&self) -> &Path {
        &self.absolute
    }

    /// Root-relative form used for ignore matching and output, e.g. `./src/main.c`
    pub fn display(&self) -> &str {
        &self.display
    }
}

impl std::fmt::Display for CandidatePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display)
    }
}

/// Render a root-relative path as `./a/b`, always with forward slashes
pub fn display_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .fold(String::from("."), |mut display, name| {
            display.push('/');
            display.push_str(&name);
            display
        })
}

pub struct TreeWalker<'f> {
    fs: &'f dyn FileSystem,
    root: RepositoryRoot,
}

impl<'f> TreeWalker<'f> {
    pub fn new(fs: &'f dyn FileSystem, root: RepositoryRoot) -> Self {
        TreeWalker { fs, root }
    }

    pub fn root(&self) -> &RepositoryRoot {
        &self.root
    }

    /// Lazily enumerate every non-directory entry not rejected by `ignore_set`
    pub fn walk<'a>(&'a self, ignore_set: &'a IgnoreSet) -> impl Iterator<Item = CandidatePath> + 'a {
        self.fs
            .walk(self.root.path())
            .filter_map(move |path| self.check_if_not_ignored_file_path(path, ignore_set))
    }

    fn check_if_not_ignored_file_path(
        &self,
        path: PathBuf,
        ignore_set: &IgnoreSet,
    ) -> Option<CandidatePath> {
        if self.fs.is_dir(&path) {
            return None;
        }

        let candidate = CandidatePath::new(self.root.path(), path)?;
        if ignore_set.is_ignored(candidate.display()) {
            debug_log!("Ignoring {}", candidate);
            return None;
        }

        Some(candidate)
    }
}
