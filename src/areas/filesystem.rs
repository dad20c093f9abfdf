//! Filesystem capability
//!
//! Everything the scanner needs from the filesystem goes through the
//! [`FileSystem`] trait: path normalization, directory checks, whole-file reads
//! and recursive enumeration. [`OsFileSystem`] talks to the real disk, while
//! [`MemoryFileSystem`] simulates a tree so scanning can be exercised without
//! touching the disk.

use std::collections::BTreeMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

pub trait FileSystem {
    /// Absolute, normalized form of `path`; fails if the path does not exist
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    fn is_dir(&self, path: &Path) -> bool;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Every entry below `root` (directories included, `root` excluded),
    /// depth-first with siblings sorted by name
    fn walk<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = PathBuf> + 'a>;

    /// Like [`FileSystem::walk`], minus hidden entries and everything below them
    fn walk_visible<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
        let root = root.to_path_buf();
        Box::new(
            self.walk(&root)
                .filter(move |path| !path.strip_prefix(&root).is_ok_and(is_hidden)),
        )
    }
}

/// Whether any component of `relative` is a dot-entry such as `.git` or `.env`
pub fn is_hidden(relative: &Path) -> bool {
    relative.components().any(|component| match component {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn walk<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
        Box::new(
            WalkDir::new(root)
                .min_depth(1)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.into_path()),
        )
    }

    fn walk_visible<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
        Box::new(
            WalkDir::new(root)
                .min_depth(1)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| entry.depth() == 0 || !is_hidden(Path::new(entry.file_name())))
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.into_path()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Directory,
    File(Vec<u8>),
}

/// In-memory file tree keyed by absolute path
///
/// Relative paths are resolved against `/`. `..` and `.` are resolved
/// lexically, which stands in for symlink resolution on a real disk.
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
    nodes: BTreeMap<PathBuf, Node>,
}

impl Default for MemoryFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(PathBuf::from("/"), Node::Directory);
        MemoryFileSystem { nodes }
    }

    /// Add a directory along with all of its missing ancestors
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        let path = normalize(path.as_ref());
        self.insert_ancestors(&path);
        self.nodes.insert(path, Node::Directory);
        self
    }

    /// Add a file along with all of its missing ancestor directories
    pub fn with_file(mut self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) -> Self {
        let path = normalize(path.as_ref());
        self.insert_ancestors(&path);
        self.nodes.insert(path, Node::File(content.into()));
        self
    }

    fn insert_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            self.nodes
                .entry(ancestor.to_path_buf())
                .or_insert(Node::Directory);
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        let path = normalize(path);
        if self.nodes.contains_key(&path) {
            Ok(path)
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {}", path.display()),
            ))
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.nodes.get(&normalize(path)), Some(Node::Directory))
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        match self.nodes.get(&normalize(path)) {
            Some(Node::File(content)) => Ok(content.clone()),
            Some(Node::Directory) => Err(io::Error::new(
                io::ErrorKind::IsADirectory,
                format!("is a directory: {}", path.display()),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file or directory: {}", path.display()),
            )),
        }
    }

    fn walk<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
        let root = normalize(root);

        // component-wise ordering keeps every subtree contiguous and in preorder
        Box::new(
            self.nodes
                .range(root.clone()..)
                .map(|(path, _)| path)
                .skip_while({
                    let root = root.clone();
                    move |path| **path == root
                })
                .take_while(move |path| path.starts_with(&root))
                .cloned(),
        )
    }
}

/// Lexically resolve `path` into an absolute path without `.` or `..`
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::from("/");

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized = PathBuf::from(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(name) => normalized.push(name),
        }
    }

    normalized
}
