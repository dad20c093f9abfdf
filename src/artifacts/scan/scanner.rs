use crate::areas::filesystem::FileSystem;
use crate::areas::workspace::TreeWalker;
use crate::artifacts::ignore::ignore_set::IgnoreSet;
use crate::artifacts::marker::extractor::{ExtractError, MarkerExtractor};
use crate::artifacts::marker::marker::Marker;
use crate::artifacts::root::{RepositoryRoot, RootLocator};
use crate::artifacts::scan::ScanError;
use crate::artifacts::scan::diagnostics::{Diagnostics, ScanWarning};
use derive_new::new;
use std::path::Path;

/// Result of a full scan: the repository root and its markers in walk order
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Scan {
    root: RepositoryRoot,
    markers: Vec<Marker>,
}

impl Scan {
    pub fn root(&self) -> &RepositoryRoot {
        &self.root
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn into_markers(self) -> Vec<Marker> {
        self.markers
    }
}

pub struct Scanner<'f> {
    fs: &'f dyn FileSystem,
    locator: RootLocator<'f>,
    extractor: MarkerExtractor<'f>,
}

impl<'f> Scanner<'f> {
    pub fn new(fs: &'f dyn FileSystem) -> anyhow::Result<Self> {
        Ok(Scanner {
            fs,
            locator: RootLocator::new(fs),
            extractor: MarkerExtractor::new(fs)?,
        })
    }

    pub fn locate_root(&self, start: &Path) -> Result<RepositoryRoot, ScanError> {
        self.locator
            .locate(start)
            .ok_or_else(|| ScanError::RepositoryNotFound {
                start: start.to_path_buf(),
            })
    }

    /// Scan the repository containing `start`
    ///
    /// Per-file read and decode failures go to `diagnostics`; the scan goes on.
    pub fn run(&self, start: &Path, diagnostics: &mut dyn Diagnostics) -> Result<Scan, ScanError> {
        let root = self.locate_root(start)?;
        let ignore_set = IgnoreSet::build(self.fs, &root);
        let walker = TreeWalker::new(self.fs, root);

        let mut markers = Vec::new();
        for candidate in walker.walk(&ignore_set) {
            match self.extractor.extract(&candidate) {
                Ok(found) => markers.extend(found),
                Err(ExtractError::Decode { path, .. }) => {
                    diagnostics.warn(ScanWarning::Undecodable { path })
                }
                Err(ExtractError::Io { path, source }) => diagnostics.warn(ScanWarning::Unreadable {
                    path,
                    reason: source.to_string(),
                }),
            }
        }

        let root = walker.root().clone();
        debug_log!("Found {} markers under {}", markers.len(), root);

        Ok(Scan::new(root, markers))
    }
}
