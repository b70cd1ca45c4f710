//! A scanned candidate list paired with the options used to query it.
//!
//! This is the shape a picker holds while it is open: scan once, then call
//! [`MentionFinder::query`] on every keystroke. Each query recomputes over the
//! full candidate list.

use crate::config::MentionConfig;
use crate::model::Candidate;
use crate::scanner::{scan_directory, ScanError};
use crate::search::{paginate, rank_candidates, MentionPage};
use camino::{Utf8Path, Utf8PathBuf};

#[derive(Debug, Clone)]
pub struct MentionFinder {
    root: Option<Utf8PathBuf>,
    candidates: Vec<Candidate>,
    config: MentionConfig,
}

impl MentionFinder {
    /// Scans `root` with `config.scan` and keeps the result.
    pub fn scan(root: &Utf8Path, config: MentionConfig) -> Result<Self, ScanError> {
        let candidates = scan_directory(root, &config.scan)?;
        Ok(MentionFinder {
            root: Some(root.to_path_buf()),
            candidates,
            config,
        })
    }

    /// Wraps candidates produced elsewhere, e.g. by the host application.
    pub fn from_candidates(candidates: Vec<Candidate>, config: MentionConfig) -> Self {
        MentionFinder {
            root: None,
            candidates,
            config,
        }
    }

    pub fn root(&self) -> Option<&Utf8Path> {
        self.root.as_deref()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn config(&self) -> &MentionConfig {
        &self.config
    }

    /// Ranks the candidates for `query` and cuts the pool down to the
    /// configured number of visible rows.
    pub fn query(&self, query: &str) -> MentionPage {
        let ranked = rank_candidates(query, &self.candidates, &self.config.rank);
        paginate(ranked, self.config.rank.visible_rows)
    }
}
