//! Ranking a full index against a query.

use super::index::SymbolIndex;
use super::query::SearchQuery;
use super::scoring::{MatchCandidate, score_record};
use crate::config::ScoringPolicy;
use crate::types::SymbolRecord;

/// Score every record and return the matches, best first.
///
/// Order is descending score, then ascending name length. The sort is stable,
/// so records that tie on both keep their index order and the output is fully
/// deterministic. A blank query yields no candidates.
pub fn rank_candidates<'a>(
    index: &'a SymbolIndex,
    raw_query: &str,
    policy: &ScoringPolicy,
) -> Vec<MatchCandidate<'a>> {
    let Some(query) = SearchQuery::parse(raw_query) else {
        return Vec::new();
    };

    let mut candidates: Vec<MatchCandidate<'a>> = index
        .iter()
        .filter_map(|record| score_record(record, &query, policy))
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.record.name_len().cmp(&b.record.name_len()))
    });

    tracing::debug!(
        "Query '{}' matched {} of {} symbols ({} by prefix or substring)",
        query.text(),
        candidates.len(),
        index.len(),
        candidates.iter().filter(|c| c.tier.is_substring()).count()
    );

    candidates
}

/// Rank an index against a query, returning records only.
pub fn rank<'a>(
    index: &'a SymbolIndex,
    raw_query: &str,
    policy: &ScoringPolicy,
) -> Vec<&'a SymbolRecord> {
    rank_candidates(index, raw_query, policy)
        .into_iter()
        .map(|candidate| candidate.record)
        .collect()
}
