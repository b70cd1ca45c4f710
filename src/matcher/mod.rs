//! Fuzzy subsequence matching of a query against a single path string.
//!
//! The matcher is a pure function: it performs no I/O and keeps no state
//! between calls, so it can be run on every keystroke.

use crate::model::MatchResult;

const CONSECUTIVE_WEIGHT: f64 = 3.0;
const BOUNDARY_BONUS: f64 = 10.0;
const SEGMENT_START_BONUS: f64 = 15.0;
const LENGTH_PENALTY: f64 = 0.05;
const SUBSTRING_BONUS: f64 = 20.0;
const FILE_NAME_SUBSTRING_BONUS: f64 = 25.0;

/// Lower-cases one char at a time so indices into the folded text line up
/// with indices into the original.
fn fold_case(s: &str) -> Vec<char> {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

fn is_boundary(c: char) -> bool {
    matches!(c, '/' | '_' | '-' | '.')
}

fn contains(haystack: &[char], needle: &[char]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}

/// Scores `text` against `query`.
///
/// Every query character has to appear in `text` in order (case-insensitive),
/// otherwise the result carries the [`NO_MATCH`](crate::NO_MATCH) sentinel.
/// Matches are found with a single greedy left-to-right scan; runs of
/// consecutive matches, matches on word boundaries and matches at the start
/// of the final path segment are rewarded, long texts are penalised slightly,
/// and contiguous occurrences of the query earn flat bonuses.
///
/// An empty query matches everything with a score of zero.
pub fn match_one(query: &str, text: &str) -> MatchResult {
    if query.is_empty() {
        return MatchResult::empty_query();
    }

    let query = fold_case(query);
    let text = fold_case(text);

    let mut score = 0.0;
    let mut positions = Vec::with_capacity(query.len());
    let mut consecutive = 0u32;

    for (i, &c) in text.iter().enumerate() {
        if positions.len() < query.len() && c == query[positions.len()] {
            positions.push(i);
            consecutive += 1;
            score += f64::from(consecutive) * CONSECUTIVE_WEIGHT;

            let prev = i.checked_sub(1).map(|p| text[p]);
            if prev.map_or(true, is_boundary) {
                score += BOUNDARY_BONUS;
            }
            if prev == Some('/') {
                score += SEGMENT_START_BONUS;
            }
        } else {
            consecutive = 0;
        }
    }

    if positions.len() < query.len() {
        return MatchResult::no_match();
    }

    score -= LENGTH_PENALTY * text.len() as f64;

    if contains(&text, &query) {
        score += SUBSTRING_BONUS;
    }

    let file_name_start = text
        .iter()
        .rposition(|&c| c == '/')
        .map_or(0, |slash| slash + 1);
    if contains(&text[file_name_start..], &query) {
        score += FILE_NAME_SUBSTRING_BONUS;
    }

    MatchResult {
        score,
        matched_positions: positions,
    }
}
