use super::Candidate;
use serde::{Deserialize, Serialize};

/// Score reported for a text that does not contain the query as a subsequence.
pub const NO_MATCH: f64 = -1.0;

/// Outcome of matching one query against one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Relevance, higher is better. [`NO_MATCH`] means the text did not match;
    /// any other value (zero and negative included) is a genuine match.
    pub score: f64,
    /// Zero-based character indices of the matched characters, ascending
    pub matched_positions: Vec<usize>,
}

impl MatchResult {
    pub(crate) fn empty_query() -> Self {
        MatchResult {
            score: 0.0,
            matched_positions: Vec::new(),
        }
    }

    pub(crate) fn no_match() -> Self {
        MatchResult {
            score: NO_MATCH,
            matched_positions: Vec::new(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.score != NO_MATCH
    }
}

/// Which candidate field produced the winning score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchedField {
    Name,
    RelativePath,
    FullPath,
}

impl MatchedField {
    /// Fields in evaluation order; earlier fields win ties.
    pub const ALL: [MatchedField; 3] = [
        MatchedField::Name,
        MatchedField::RelativePath,
        MatchedField::FullPath,
    ];

    pub fn text_of<'a>(&self, candidate: &'a Candidate) -> &'a str {
        match self {
            MatchedField::Name => &candidate.name,
            MatchedField::RelativePath => &candidate.relative_path,
            MatchedField::FullPath => candidate.full_path_str(),
        }
    }
}

/// A candidate together with its best match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    #[serde(flatten)]
    pub result: MatchResult,
    pub matched_field: MatchedField,
    /// The text `result.matched_positions` index into
    pub matched_text: String,
}

impl RankedCandidate {
    pub fn score(&self) -> f64 {
        self.result.score
    }

    pub fn name(&self) -> &str {
        &self.candidate.name
    }

    pub fn is_directory(&self) -> bool {
        self.candidate.is_directory
    }
}
