//! Directory walking that feeds the matcher.
//!
//! Per-entry failures (unreadable directories, names that are not UTF-8)
//! skip the entry; only an unusable root is an error.

use crate::config::ScanOptions;
use crate::model::Candidate;
use camino::{Utf8Path, Utf8PathBuf};
use glob::{MatchOptions, Pattern};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(Utf8PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(Utf8PathBuf),

    #[error("Failed to create glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),
}

/// Collect files and directories below `root` as match candidates.
///
/// Entries come out depth-first with each directory ahead of its children,
/// siblings in sorted order.
#[tracing::instrument(skip_all, fields(root = %root))]
pub fn scan_directory(root: &Utf8Path, options: &ScanOptions) -> Result<Vec<Candidate>, ScanError> {
    if !root.exists() {
        return Err(ScanError::DirectoryNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut candidates = Vec::new();
    walk(root, root, 1, options, &mut candidates)?;

    tracing::debug!(found = candidates.len(), "scanned mention candidates");
    Ok(candidates)
}

fn walk(
    root: &Utf8Path,
    dir: &Utf8Path,
    depth: usize,
    options: &ScanOptions,
    candidates: &mut Vec<Candidate>,
) -> Result<(), ScanError> {
    if depth > options.max_depth {
        return Ok(());
    }

    let pattern = format!("{}/*", Pattern::escape(dir.as_str()));
    let match_options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: !options.include_hidden,
    };

    let mut listed = 0;
    for entry in glob::glob_with(&pattern, match_options)? {
        if listed >= options.max_items_per_directory {
            tracing::debug!(dir = %dir, "directory item cap reached");
            break;
        }
        if candidates.len() >= options.max_total_items {
            return Ok(());
        }

        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let path = match Utf8PathBuf::from_path_buf(path) {
            Ok(path) => path,
            Err(path) => {
                tracing::debug!(path = %path.display(), "skipping non UTF-8 path");
                continue;
            }
        };

        let Some(name) = path.file_name() else {
            continue;
        };
        if options.is_skipped(name) {
            continue;
        }

        let is_directory = path.is_dir();
        let Some(candidate) = Candidate::from_root(root, path.clone(), is_directory) else {
            continue;
        };
        candidates.push(candidate);
        listed += 1;

        if is_directory {
            walk(root, &path, depth + 1, options, candidates)?;
        }
    }

    Ok(())
}
