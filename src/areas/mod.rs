//! Repository areas
//!
//! - `filesystem`: filesystem capability with an on-disk and an in-memory implementation
//! - `workspace`: working tree enumeration filtered by the ignore set
//! - `bug_list`: the persisted list of markers (`<root>/bugs`)
//! - `repository`: the facade the commands run against

pub mod bug_list;
pub mod filesystem;
pub mod repository;
pub mod workspace;
