//! Persisted bug list
//!
//! The list lives in `<root>/bugs` as a plain task file, one entry per line:
//!
//! ```text
//! ./src/main.c: fix race | id:3f786850e387550fdab836ed7e6dc881de23001b
//! ```
//!
//! The id is the SHA-1 of the entry text, so identical entries collapse into
//! one. Lines starting with `#` and carrying no metadata are comments; any
//! other line without metadata gets its id computed on load. Reads take a
//! shared lock on the file and writes an exclusive one.

use crate::artifacts::root::RepositoryRoot;
use anyhow::Context;
use derive_new::new;
use file_guard::Lock;
use sha1::{Digest, Sha1};
use std::collections::HashSet;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;

/// Name of the bug list file under the repository root
pub const BUG_LIST_FILE: &str = "bugs";

const METADATA_SEPARATOR: char = '|';
const COMMENT_PREFIX: char = '#';

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct BugEntry {
    id: String,
    text: String,
}

impl BugEntry {
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        BugEntry::new(hash_text(&text), text)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn parse(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }

        // entries always carry metadata, so only bare `#` lines are comments
        let Some((text, metadata)) = line.rsplit_once(METADATA_SEPARATOR) else {
            if line.trim_start().starts_with(COMMENT_PREFIX) {
                return None;
            }
            return Some(Self::from_text(line.trim()));
        };

        let text = text.trim().to_string();
        let id = metadata
            .split(',')
            .filter_map(|pair| pair.split_once(':'))
            .find(|(key, _)| key.trim() == "id")
            .map(|(_, value)| value.trim().to_string())
            .unwrap_or_else(|| hash_text(&text));

        Some(BugEntry::new(id, text))
    }

    fn serialize(&self) -> String {
        format!("{} {} id:{}", self.text, METADATA_SEPARATOR, self.id)
    }
}

fn hash_text(text: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// What [`BugList::write`] did to the backing file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(usize),
    Deleted,
}

#[derive(Debug, Clone)]
pub struct BugList {
    /// Path to the bug list file (typically `<root>/bugs`)
    path: Box<Path>,
    entries: Vec<BugEntry>,
    ids: HashSet<String>,
}

impl BugList {
    /// Load the bug list of `root`; a missing file is an empty list
    pub fn open(root: &RepositoryRoot) -> anyhow::Result<Self> {
        let mut bug_list = Self::empty(root);
        if !bug_list.path.exists() {
            return Ok(bug_list);
        }

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .open(bug_list.path())
            .with_context(|| format!("failed to open bug list at {:?}", bug_list.path))?;
        let mut lock = file_guard::lock(&mut file, Lock::Shared, 0, 1)?;

        let mut content = String::new();
        lock.deref_mut()
            .read_to_string(&mut content)
            .with_context(|| format!("failed to read bug list at {:?}", bug_list.path))?;

        for entry in content.lines().filter_map(BugEntry::parse) {
            bug_list.insert(entry);
        }

        Ok(bug_list)
    }

    /// Delete the bug list of `root`, if any, and start an empty one
    pub fn reset(root: &RepositoryRoot) -> anyhow::Result<Self> {
        let bug_list = Self::empty(root);
        bug_list.remove_file()?;
        Ok(bug_list)
    }

    fn empty(root: &RepositoryRoot) -> Self {
        BugList {
            path: root.join(BUG_LIST_FILE).into_boxed_path(),
            entries: Vec::new(),
            ids: HashSet::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> impl Iterator<Item = &BugEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry; returns false if an identical entry is already listed
    pub fn add(&mut self, text: impl Into<String>) -> bool {
        self.insert(BugEntry::from_text(text))
    }

    fn insert(&mut self, entry: BugEntry) -> bool {
        if !self.ids.insert(entry.id.clone()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Persist the entries in insertion order
    ///
    /// An empty list with `delete_if_empty` set removes the file instead.
    pub fn write(&self, delete_if_empty: bool) -> anyhow::Result<WriteOutcome> {
        if delete_if_empty && self.is_empty() {
            self.remove_file()?;
            return Ok(WriteOutcome::Deleted);
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())
            .with_context(|| format!("failed to open bug list at {:?}", self.path))?;
        let mut lock = file_guard::lock(&mut file, Lock::Exclusive, 0, 1)?;

        for entry in &self.entries {
            writeln!(lock.deref_mut(), "{}", entry.serialize())
                .with_context(|| format!("failed to write bug list at {:?}", self.path))?;
        }

        Ok(WriteOutcome::Written(self.len()))
    }

    fn remove_file(&self) -> anyhow::Result<()> {
        match std::fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err)
                .with_context(|| format!("failed to remove bug list at {:?}", self.path)),
        }
    }
}
