//! Data types shared by the matcher, the ranker and the scanner.

mod candidate;
mod match_result;

pub use candidate::Candidate;
pub use match_result::{MatchResult, MatchedField, RankedCandidate, NO_MATCH};
