//! Fuzzy file-path matching and ranking for `@mention` autocomplete.
//!
//! The core is [`match_one`], which scores one text against a query, and
//! [`rank_candidates`], which applies it to a list of [`Candidate`]s. The
//! [`scanner`] produces candidates from a directory tree and
//! [`MentionFinder`] ties scanning, ranking and paging together.

pub mod config;
pub mod ffi;
pub mod finder;
pub mod matcher;
pub mod model;
pub mod scanner;
pub mod search;

pub use config::{ConfigError, MentionConfig, RankOptions, ScanOptions};
pub use finder::MentionFinder;
pub use matcher::match_one;
pub use model::*;
pub use scanner::{scan_directory, ScanError};
pub use search::{paginate, rank_candidates, MentionPage};

uniffi::setup_scaffolding!();
