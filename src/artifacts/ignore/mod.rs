//! Ignore rules
//!
//! Rules come from `<root>/.bignore` and `<root>/.gitignore` plus a few
//! built-in rejections. Both files are unioned; neither overrides the other.
//! Every non-empty line is a rule: `#` comments and negations carry no special
//! meaning.

pub mod ignore_rule;
pub mod ignore_set;

/// Tool-specific ignore file, read first
pub const BIGNORE_FILE: &str = ".bignore";
/// VCS ignore file, read second
pub const GITIGNORE_FILE: &str = ".gitignore";
/// Ignore files in the order they are read
pub const IGNORE_FILES: [&str; 2] = [BIGNORE_FILE, GITIGNORE_FILE];
/// Rejections present regardless of the ignore files: the marker directory
/// and backup files
pub const DEFAULT_REJECTIONS: [&str; 2] = [".git/", "~"];
