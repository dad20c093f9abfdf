//! Compiled ignore rules for one walk
//!
//! Literal rules reject any candidate path that contains them. Glob rules are
//! expanded up front: each is compiled as `**/<rule>` and matched against
//! every entry under the root, and the matching entries become literal
//! rejections in their `./<relative>` form. Candidate paths are compared in
//! that same form, so a rejected directory also rejects everything below it.
//!
//! Expansion follows shell globbing conventions:
//! - a rule ending in `/` only matches directories, which expand as `./<relative>/`
//! - wildcards never match hidden entries; a hidden component is only reached
//!   by a rule with a segment spelled with a leading `.`

use crate::areas::filesystem::{FileSystem, is_hidden};
use crate::areas::workspace::display_path;
use crate::artifacts::ignore::ignore_rule::IgnoreRule;
use crate::artifacts::ignore::{DEFAULT_REJECTIONS, IGNORE_FILES};
use crate::artifacts::root::RepositoryRoot;
use globset::{GlobBuilder, GlobMatcher};
use std::collections::BTreeSet;
use std::io;
use std::path::Path;

const DIRECTORY_SUFFIX: char = '/';
const HIDDEN_PREFIX: char = '.';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    literals: Vec<String>,
    expanded: BTreeSet<String>,
}

impl Default for IgnoreSet {
    fn default() -> Self {
        IgnoreSet {
            literals: DEFAULT_REJECTIONS.iter().map(|r| r.to_string()).collect(),
            expanded: BTreeSet::new(),
        }
    }
}

/// A glob rule ready to be matched against walked entries
#[derive(Debug, Clone)]
struct ExpansionGlob {
    matcher: GlobMatcher,
    directory_only: bool,
    matches_hidden: bool,
}

impl ExpansionGlob {
    fn compile(pattern: &str) -> Result<Self, globset::Error> {
        let directory_only = pattern.ends_with(DIRECTORY_SUFFIX);
        let pattern = pattern.trim_end_matches(DIRECTORY_SUFFIX);
        let matcher = GlobBuilder::new(&format!("**/{}", pattern))
            .literal_separator(true)
            .build()?
            .compile_matcher();

        Ok(ExpansionGlob {
            matcher,
            directory_only,
            matches_hidden: pattern
                .split(DIRECTORY_SUFFIX)
                .any(|segment| segment.starts_with(HIDDEN_PREFIX)),
        })
    }

    /// Expanded form of `relative` if this glob selects it
    fn expand(&self, relative: &Path, hidden: bool, is_dir: impl FnOnce() -> bool) -> Option<String> {
        if hidden && !self.matches_hidden {
            return None;
        }
        if self.directory_only && !is_dir() {
            return None;
        }
        if !self.matcher.is_match(relative) {
            return None;
        }

        let mut expanded = display_path(relative);
        if self.directory_only {
            expanded.push(DIRECTORY_SUFFIX);
        }
        Some(expanded)
    }
}

impl IgnoreSet {
    /// Load `.bignore` and `.gitignore` under `root` and compile them
    ///
    /// Missing ignore files contribute no rules.
    pub fn build(fs: &dyn FileSystem, root: &RepositoryRoot) -> Self {
        let rules = IGNORE_FILES
            .iter()
            .flat_map(|name| read_ignore_file(fs, &root.join(name)))
            .collect::<Vec<_>>();

        Self::from_rules(fs, root, rules)
    }

    /// Compile `rules` on top of the built-in rejections
    pub fn from_rules(
        fs: &dyn FileSystem,
        root: &RepositoryRoot,
        rules: impl IntoIterator<Item = IgnoreRule>,
    ) -> Self {
        let mut ignore_set = Self::default();
        let mut globs = Vec::new();

        for rule in rules {
            match rule {
                IgnoreRule::Literal(literal) => ignore_set.literals.push(literal),
                IgnoreRule::Glob(pattern) => match ExpansionGlob::compile(&pattern) {
                    Ok(glob) => globs.push(glob),
                    Err(_err) => {
                        debug_log!("Keeping invalid glob {:?} as a literal: {}", pattern, _err);
                        ignore_set.literals.push(pattern);
                    }
                },
            }
        }

        if !globs.is_empty() {
            ignore_set.expand(fs, root, &globs);
        }

        ignore_set
    }

    fn expand(&mut self, fs: &dyn FileSystem, root: &RepositoryRoot, globs: &[ExpansionGlob]) {
        // hidden subtrees such as `.git` are only entered when some rule can match them
        let entries = if globs.iter().any(|glob| glob.matches_hidden) {
            fs.walk(root.path())
        } else {
            fs.walk_visible(root.path())
        };

        for path in entries {
            let Ok(relative) = path.strip_prefix(root.path()) else {
                continue;
            };
            let hidden = is_hidden(relative);

            for glob in globs {
                if let Some(rejected) = glob.expand(relative, hidden, || fs.is_dir(&path)) {
                    debug_log!("Glob rejects {}", rejected);
                    self.expanded.insert(rejected);
                }
            }
        }
    }

    /// Whether a candidate path, in its `./<relative>` form, is rejected
    pub fn is_ignored(&self, candidate: &str) -> bool {
        self.literals
            .iter()
            .chain(self.expanded.iter())
            .any(|rule| candidate.contains(rule.as_str()))
    }

    /// Literal rules, built-in rejections first
    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.literals.iter().map(String::as_str)
    }

    /// Concrete paths produced by glob expansion
    pub fn expanded(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}

fn read_ignore_file(fs: &dyn FileSystem, path: &Path) -> Vec<IgnoreRule> {
    match fs.read(path) {
        Ok(content) => IgnoreRule::parse_all(&String::from_utf8_lossy(&content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
        Err(_err) => {
            debug_log!("Skipping unreadable ignore file {}: {}", path.display(), _err);
            Vec::new()
        }
    }
}
