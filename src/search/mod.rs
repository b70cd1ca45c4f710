use crate::config::RankOptions;
use crate::matcher::match_one;
use crate::model::{Candidate, MatchResult, MatchedField, RankedCandidate};
use std::cmp::Ordering;

mod model;

pub use model::MentionPage;

/// Scores closer than this are treated as tied.
pub const SCORE_TOLERANCE: f64 = 1.0;

/// Rank `candidates` against `query`.
///
/// An empty query skips ranking entirely and returns the first
/// `options.empty_query_limit` candidates in input order. Otherwise every
/// candidate is matched against its name, relative path and full path, the
/// best of the three is kept, non-matches are dropped and the rest are
/// ordered by [`score_bands`] and truncated to `options.limit`.
pub fn rank_candidates(
    query: &str,
    candidates: &[Candidate],
    options: &RankOptions,
) -> Vec<RankedCandidate> {
    if query.is_empty() {
        return unranked(candidates, options.empty_query_limit);
    }

    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .filter_map(|candidate| best_match(query, candidate))
        .collect();

    sort_ranked(&mut ranked);
    ranked.truncate(options.limit);

    tracing::debug!(
        query,
        candidates = candidates.len(),
        ranked = ranked.len(),
        "ranked mention candidates"
    );

    ranked
}

/// Split a ranked pool into the rows a picker shows and a "K more" count.
pub fn paginate(mut ranked: Vec<RankedCandidate>, visible_rows: usize) -> MentionPage {
    let remaining = ranked.len().saturating_sub(visible_rows);
    ranked.truncate(visible_rows);
    MentionPage {
        visible: ranked,
        remaining,
    }
}

fn unranked(candidates: &[Candidate], limit: usize) -> Vec<RankedCandidate> {
    candidates
        .iter()
        .take(limit)
        .map(|candidate| RankedCandidate {
            candidate: candidate.clone(),
            result: MatchResult::empty_query(),
            matched_field: MatchedField::Name,
            matched_text: candidate.name.clone(),
        })
        .collect()
}

/// Match every field of `candidate` and keep the strictly best one.
fn best_match(query: &str, candidate: &Candidate) -> Option<RankedCandidate> {
    let mut best: Option<(MatchedField, MatchResult)> = None;

    for field in MatchedField::ALL {
        let result = match_one(query, field.text_of(candidate));
        let improves = best
            .as_ref()
            .map_or(true, |(_, current)| result.score > current.score);
        if improves {
            best = Some((field, result));
        }
    }

    let (field, result) = best?;
    if !result.is_match() {
        return None;
    }

    Some(RankedCandidate {
        matched_text: field.text_of(candidate).to_string(),
        candidate: candidate.clone(),
        result,
        matched_field: field,
    })
}

/// Group results, sorted by descending score, into tolerance bands.
///
/// A band opens at its highest score and takes every following result that
/// lies within [`SCORE_TOLERANCE`] of it. The band index is the primary sort
/// key, which keeps the ordering total while treating near-equal scores as
/// ties.
pub fn score_bands(scores_descending: &[f64]) -> Vec<usize> {
    let mut bands = Vec::with_capacity(scores_descending.len());
    let mut band = 0;
    let mut band_top = None;

    for &score in scores_descending {
        match band_top {
            Some(top) if top - score <= SCORE_TOLERANCE => {}
            Some(_) => {
                band += 1;
                band_top = Some(score);
            }
            None => band_top = Some(score),
        }
        bands.push(band);
    }

    bands
}

/// Order two results that share a score band: files before directories,
/// then by name ignoring case.
pub fn compare_within_band(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    a.is_directory()
        .cmp(&b.is_directory())
        .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
}

fn sort_ranked(ranked: &mut Vec<RankedCandidate>) {
    ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));

    let scores: Vec<f64> = ranked.iter().map(RankedCandidate::score).collect();
    let mut banded: Vec<(usize, RankedCandidate)> =
        score_bands(&scores).into_iter().zip(ranked.drain(..)).collect();

    banded.sort_by(|(band_a, a), (band_b, b)| {
        band_a.cmp(band_b).then_with(|| compare_within_band(a, b))
    });

    ranked.extend(banded.into_iter().map(|(_, r)| r));
}
