//! Marker extraction
//!
//! A single compiled pattern recognizes the comment leaders of several
//! languages (`;;`, `%`, `#`, `/*`, `//`) followed by optional whitespace and
//! the case-sensitive `TODO:` tag. The rest of the line is the marker text.
//! Only the first match of a line counts. This is a text search, so a leader
//! inside a string literal matches too.

use crate::areas::filesystem::FileSystem;
use crate::areas::workspace::CandidatePath;
use crate::artifacts::marker::marker::Marker;
use regex::Regex;

const MARKER_REGEX: &str = r"(?P<leader>;;|%|#|/(?P<style>\*|/))\s*TODO:\s*(?P<text>.*)";

/// Closing sequence stripped from the text of `/*` comments
const BLOCK_CLOSER: &str = " */";

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("could not decode file {path:?} as text")]
    Decode {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("could not read file {path:?}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub struct MarkerExtractor<'f> {
    fs: &'f dyn FileSystem,
    pattern: Regex,
}

impl<'f> MarkerExtractor<'f> {
    pub fn new(fs: &'f dyn FileSystem) -> anyhow::Result<Self> {
        Ok(MarkerExtractor {
            fs,
            pattern: Regex::new(MARKER_REGEX)?,
        })
    }

    /// Read `candidate` in full and extract its markers in line order
    pub fn extract(&self, candidate: &CandidatePath) -> Result<Vec<Marker>, ExtractError> {
        let bytes = self
            .fs
            .read(candidate.absolute())
            .map_err(|source| ExtractError::Io {
                path: candidate.display().to_string(),
                source,
            })?;
        let content = String::from_utf8(bytes).map_err(|source| ExtractError::Decode {
            path: candidate.display().to_string(),
            source,
        })?;

        Ok(self.extract_from_str(candidate.display(), &content))
    }

    /// Extract the markers of already decoded file content
    pub fn extract_from_str(&self, source_path: &str, content: &str) -> Vec<Marker> {
        content
            .lines()
            .enumerate()
            .filter_map(|(index, line)| {
                self.extract_line(line)
                    .map(|text| Marker::new(source_path.to_string(), Some(index + 1), text))
            })
            .collect()
    }

    /// Marker text of a single line, if it holds one
    pub fn extract_line(&self, line: &str) -> Option<String> {
        let captures = self.pattern.captures(line)?;
        let text = captures.name("text").map_or("", |m| m.as_str());
        let is_block_comment = captures.name("style").is_some_and(|m| m.as_str() == "*");

        let text = match text.strip_suffix(BLOCK_CLOSER) {
            Some(stripped) if is_block_comment => stripped,
            _ => text,
        };

        Some(text.to_string())
    }
}
