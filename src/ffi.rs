//! UniFFI bindings for desktop and mobile hosts.
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! Paths cross the boundary as plain strings and indices as `u32`.

use crate::config::{ConfigError, MentionConfig, RankOptions, ScanOptions};
use crate::finder::MentionFinder;
use crate::matcher::match_one;
use crate::model::{Candidate, MatchedField, RankedCandidate};
use crate::scanner::{scan_directory as scan_internal, ScanError};
use crate::search::{paginate, rank_candidates, MentionPage};
use camino::Utf8Path;

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum MentionError {
    #[error("Directory not found: {message}")]
    NotFound { message: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },

    #[error("Config error: {message}")]
    ConfigError { message: String },

    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

impl From<ScanError> for MentionError {
    fn from(e: ScanError) -> Self {
        match e {
            ScanError::DirectoryNotFound(p) => MentionError::NotFound {
                message: p.to_string(),
            },
            ScanError::NotADirectory(p) => MentionError::InvalidPath {
                message: format!("not a directory: {p}"),
            },
            ScanError::PatternError(e) => MentionError::InvalidPath {
                message: e.to_string(),
            },
        }
    }
}

impl From<ConfigError> for MentionError {
    fn from(e: ConfigError) -> Self {
        MentionError::ConfigError {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for MentionError {
    fn from(e: serde_json::Error) -> Self {
        MentionError::SerializationError {
            message: e.to_string(),
        }
    }
}

/// FFI-safe representation of a candidate.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiCandidate {
    pub full_path: String,
    pub name: String,
    pub relative_path: String,
    pub is_directory: bool,
}

impl From<&Candidate> for FfiCandidate {
    fn from(c: &Candidate) -> Self {
        FfiCandidate {
            full_path: c.full_path.to_string(),
            name: c.name.clone(),
            relative_path: c.relative_path.clone(),
            is_directory: c.is_directory,
        }
    }
}

impl From<FfiCandidate> for Candidate {
    fn from(c: FfiCandidate) -> Self {
        Candidate {
            full_path: c.full_path.into(),
            name: c.name,
            relative_path: c.relative_path,
            is_directory: c.is_directory,
        }
    }
}

/// Which candidate field produced the winning score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiMatchedField {
    Name,
    RelativePath,
    FullPath,
}

impl From<MatchedField> for FfiMatchedField {
    fn from(f: MatchedField) -> Self {
        match f {
            MatchedField::Name => FfiMatchedField::Name,
            MatchedField::RelativePath => FfiMatchedField::RelativePath,
            MatchedField::FullPath => FfiMatchedField::FullPath,
        }
    }
}

/// Result of matching a query against one text.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiMatch {
    /// -1 when the text does not match
    pub score: f64,
    pub matched_positions: Vec<u32>,
}

/// FFI-safe representation of a ranked candidate.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiRankedCandidate {
    pub candidate: FfiCandidate,
    pub score: f64,
    /// Character indices into `matched_text`
    pub matched_positions: Vec<u32>,
    pub matched_field: FfiMatchedField,
    pub matched_text: String,
}

impl From<&RankedCandidate> for FfiRankedCandidate {
    fn from(r: &RankedCandidate) -> Self {
        FfiRankedCandidate {
            candidate: FfiCandidate::from(&r.candidate),
            score: r.result.score,
            matched_positions: to_u32(&r.result.matched_positions),
            matched_field: r.matched_field.into(),
            matched_text: r.matched_text.clone(),
        }
    }
}

/// FFI-safe page of ranked candidates.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiMentionPage {
    pub visible: Vec<FfiRankedCandidate>,
    /// Count for the "show K more" row
    pub remaining: u32,
}

impl From<&MentionPage> for FfiMentionPage {
    fn from(p: &MentionPage) -> Self {
        FfiMentionPage {
            visible: p.visible.iter().map(FfiRankedCandidate::from).collect(),
            remaining: p.remaining.try_into().unwrap_or(u32::MAX),
        }
    }
}

fn to_u32(positions: &[usize]) -> Vec<u32> {
    positions
        .iter()
        .map(|&p| p.try_into().unwrap_or(u32::MAX))
        .collect()
}

fn rank_options(limit: u32, empty_query_limit: u32) -> RankOptions {
    RankOptions {
        limit: limit as usize,
        empty_query_limit: empty_query_limit as usize,
        ..RankOptions::default()
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Scores a single text against a query.
#[uniffi::export]
pub fn match_text(query: String, text: String) -> FfiMatch {
    let result = match_one(&query, &text);
    FfiMatch {
        score: result.score,
        matched_positions: to_u32(&result.matched_positions),
    }
}

/// Ranks candidates supplied by the host.
///
/// # Arguments
/// * `query` - Text typed after the `@`
/// * `candidates` - Entries to rank
/// * `limit` - Maximum number of ranked results
/// * `empty_query_limit` - Number of candidates returned, in input order, when `query` is empty
#[uniffi::export]
pub fn rank(
    query: String,
    candidates: Vec<FfiCandidate>,
    limit: u32,
    empty_query_limit: u32,
) -> Vec<FfiRankedCandidate> {
    let candidates: Vec<Candidate> = candidates.into_iter().map(Candidate::from).collect();
    rank_candidates(&query, &candidates, &rank_options(limit, empty_query_limit))
        .iter()
        .map(FfiRankedCandidate::from)
        .collect()
}

/// Ranks candidates and splits them into visible rows and a remainder count.
#[uniffi::export]
pub fn rank_page(
    query: String,
    candidates: Vec<FfiCandidate>,
    limit: u32,
    visible_rows: u32,
) -> FfiMentionPage {
    let candidates: Vec<Candidate> = candidates.into_iter().map(Candidate::from).collect();
    let options = RankOptions {
        limit: limit as usize,
        visible_rows: visible_rows as usize,
        ..RankOptions::default()
    };
    let ranked = rank_candidates(&query, &candidates, &options);
    FfiMentionPage::from(&paginate(ranked, options.visible_rows))
}

/// Walks a directory and returns its entries as candidates.
///
/// # Arguments
/// * `root` - Directory to scan
/// * `config_yaml` - Optional YAML overriding the default scan options
#[uniffi::export]
pub fn scan_directory(
    root: String,
    config_yaml: Option<String>,
) -> Result<Vec<FfiCandidate>, MentionError> {
    let scan = match config_yaml {
        Some(yaml) => MentionConfig::from_yaml_str(&yaml)?.scan,
        None => ScanOptions::default(),
    };
    let candidates = scan_internal(Utf8Path::new(&root), &scan)?;
    Ok(candidates.iter().map(FfiCandidate::from).collect())
}

/// Scans `root` and answers `query` in one call.
#[uniffi::export]
pub fn find_mentions(
    root: String,
    query: String,
    config_yaml: Option<String>,
) -> Result<FfiMentionPage, MentionError> {
    let config = match config_yaml {
        Some(yaml) => MentionConfig::from_yaml_str(&yaml)?,
        None => MentionConfig::default(),
    };
    let finder = MentionFinder::scan(Utf8Path::new(&root), config)?;
    Ok(FfiMentionPage::from(&finder.query(&query)))
}

/// Ranks candidates and returns the result as a JSON array.
#[uniffi::export]
pub fn ranked_to_json(
    query: String,
    candidates: Vec<FfiCandidate>,
    limit: u32,
) -> Result<String, MentionError> {
    let candidates: Vec<Candidate> = candidates.into_iter().map(Candidate::from).collect();
    let options = RankOptions {
        limit: limit as usize,
        ..RankOptions::default()
    };
    let ranked = rank_candidates(&query, &candidates, &options);
    Ok(serde_json::to_string(&ranked)?)
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn ffi_file(relative_path: &str) -> FfiCandidate {
        FfiCandidate::from(&Candidate::new(
            format!("/work/app/{relative_path}"),
            relative_path,
            false,
        ))
    }

    fn sample() -> Vec<FfiCandidate> {
        vec![
            ffi_file("src/index.ts"),
            ffi_file("src/tests/test.ts"),
            ffi_file("readme.md"),
        ]
    }

    #[test]
    fn test_match_text() {
        let result = match_text("foo".to_string(), "src/foo.ts".to_string());
        assert_eq!(result.matched_positions, vec![4, 5, 6]);
        assert!(result.score > 0.0);

        let result = match_text("xyz".to_string(), "abc".to_string());
        assert_eq!(result.score, -1.0);
        assert!(result.matched_positions.is_empty());
    }

    #[test]
    fn test_rank() {
        let ranked = rank("ts".to_string(), sample(), 20, 15);
        let names: Vec<&str> = ranked.iter().map(|r| r.candidate.name.as_str()).collect();
        assert_eq!(names, vec!["test.ts", "index.ts"]);
        assert_eq!(ranked[0].matched_field, FfiMatchedField::RelativePath);

        let ranked = rank(String::new(), sample(), 20, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].candidate.name, "index.ts");
    }

    #[test]
    fn test_rank_page() {
        let page = rank_page("e".to_string(), sample(), 20, 1);
        assert_eq!(page.visible.len(), 1);
        assert_eq!(page.remaining, 2);
    }

    #[test]
    fn test_candidate_round_trip() {
        let original = Candidate::new("/work/app/src/lib.rs", "src/lib.rs", false);
        let back = Candidate::from(FfiCandidate::from(&original));
        assert_eq!(back, original);
    }

    #[test]
    fn test_scan_directory() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path().to_str().unwrap();
        fs::create_dir_all(format!("{temp_path}/deep/er")).unwrap();
        fs::write(format!("{temp_path}/deep/er/file.txt"), "").unwrap();

        let all = scan_directory(temp_path.to_string(), None).unwrap();
        assert_eq!(all.len(), 3);

        let shallow =
            scan_directory(temp_path.to_string(), Some("scan:\n  max_depth: 1\n".to_string()))
                .unwrap();
        assert_eq!(shallow.len(), 1);
        assert_eq!(shallow[0].name, "deep");
        assert!(shallow[0].is_directory);
    }

    #[test]
    fn test_scan_errors() {
        let result = scan_directory("/nonexistent/directory".to_string(), None);
        assert!(matches!(result, Err(MentionError::NotFound { .. })));

        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path().to_str().unwrap();
        let result = scan_directory(temp_path.to_string(), Some("scan: [".to_string()));
        assert!(matches!(result, Err(MentionError::ConfigError { .. })));
    }

    #[test]
    fn test_find_mentions() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path().to_str().unwrap();
        fs::write(format!("{temp_path}/notes.md"), "").unwrap();
        fs::write(format!("{temp_path}/main.rs"), "").unwrap();

        let page = find_mentions(temp_path.to_string(), "notes".to_string(), None).unwrap();
        assert_eq!(page.visible[0].candidate.name, "notes.md");
    }

    #[test]
    fn test_ranked_to_json() {
        let json = ranked_to_json("ind".to_string(), sample(), 20).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let results = value.as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["candidate"]["name"], "index.ts");
        assert_eq!(results[0]["matched_field"], "relativePath");
    }

    #[test]
    fn test_library_version() {
        let version = library_version();
        assert!(!version.is_empty());
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
    }
}
