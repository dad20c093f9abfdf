//! Command implementations
//!
//! - `update`: rescan the repository and rewrite its bug list
//! - `print`: show the persisted bug list
//!
//! Both are implemented as methods on [`crate::areas::repository::Repository`].

pub mod print;
pub mod update;
