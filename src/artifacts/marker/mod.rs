//! Marker comments
//!
//! - `marker`: the extracted annotation and its rendering as a bug list entry
//! - `extractor`: line-by-line scanning of a file for `TODO:` comments

pub mod extractor;
pub mod marker;
