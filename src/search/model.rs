use crate::RankedCandidate;
use serde::{Deserialize, Serialize};

/// The slice of a ranked pool a picker actually shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentionPage {
    pub visible: Vec<RankedCandidate>,
    /// How many ranked candidates were left out of `visible`
    pub remaining: usize,
}

impl MentionPage {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn total(&self) -> usize {
        self.visible.len() + self.remaining
    }
}
