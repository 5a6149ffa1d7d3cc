//! Per-record match tiers and scores.
//!
//! A record is tested against the exact tiers first. The prefix and substring
//! tiers are only consulted when no exact tier fired for that same record and the
//! query is long enough; whatever other records matched is irrelevant.

use super::query::SearchQuery;
use crate::config::ScoringPolicy;
use crate::types::SymbolRecord;

/// How a record matched a query, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchTier {
    /// Name or qualified name equals the query.
    Exact,
    /// Name equals the library prefix followed by the query (`dart:` + `async`).
    LibraryExact,
    /// Case-insensitive form of [`MatchTier::LibraryExact`].
    LibraryCaseInsensitive,
    /// Name or qualified name equals the query, ignoring case.
    CaseInsensitiveExact,
    Prefix,
    CaseInsensitivePrefix,
    Contains,
    CaseInsensitiveContains,
}

impl MatchTier {
    /// Base score for this tier under the given policy.
    pub const fn base_score(self, policy: &ScoringPolicy) -> i64 {
        let tiers = &policy.tiers;
        match self {
            Self::Exact => tiers.exact,
            Self::LibraryExact => tiers.library_exact,
            Self::LibraryCaseInsensitive => tiers.library_case_insensitive,
            Self::CaseInsensitiveExact => tiers.case_insensitive_exact,
            Self::Prefix => tiers.prefix,
            Self::CaseInsensitivePrefix => tiers.case_insensitive_prefix,
            Self::Contains => tiers.contains,
            Self::CaseInsensitiveContains => tiers.case_insensitive_contains,
        }
    }

    /// Whether this tier only fires for queries past the substring threshold.
    pub const fn is_substring(self) -> bool {
        matches!(
            self,
            Self::Prefix | Self::CaseInsensitivePrefix | Self::Contains | Self::CaseInsensitiveContains
        )
    }
}

/// A record that matched a query, with its final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchCandidate<'a> {
    pub record: &'a SymbolRecord,
    pub tier: MatchTier,
    pub score: i64,
}

/// Determine which tier, if any, a record matches.
pub fn match_tier(
    record: &SymbolRecord,
    query: &SearchQuery<'_>,
    policy: &ScoringPolicy,
) -> Option<MatchTier> {
    let q = query.text();
    let lower_q = query.lower();
    let name = record.name.as_str();
    let qualified = record.qualified_name.as_str();
    let lower_name = name.to_lowercase();
    let lower_qualified = qualified.to_lowercase();
    let prefix = policy.library_prefix.as_str();

    if name == q || qualified == q {
        return Some(MatchTier::Exact);
    }
    if name.strip_prefix(prefix) == Some(q) {
        return Some(MatchTier::LibraryExact);
    }
    if lower_name.strip_prefix(prefix.to_lowercase().as_str()) == Some(lower_q) {
        return Some(MatchTier::LibraryCaseInsensitive);
    }
    if lower_name == lower_q || lower_qualified == lower_q {
        return Some(MatchTier::CaseInsensitiveExact);
    }

    if query.len() < policy.min_substring_query_len {
        return None;
    }

    if name.starts_with(q) || qualified.starts_with(q) {
        Some(MatchTier::Prefix)
    } else if lower_name.starts_with(lower_q) || lower_qualified.starts_with(lower_q) {
        Some(MatchTier::CaseInsensitivePrefix)
    } else if name.contains(q) || qualified.contains(q) {
        Some(MatchTier::Contains)
    } else if lower_name.contains(lower_q) || lower_qualified.contains(lower_q) {
        Some(MatchTier::CaseInsensitiveContains)
    } else {
        None
    }
}

/// Final score for a record that matched at `tier`.
///
/// The tier score is lowered by the depth penalty once per overridden ancestor,
/// then floor-divided by the kind weight. The coarse division puts near-equal
/// matches into shared buckets that the name-length tie-break then orders.
///
/// The penalty saturates, so an oversized `depth_penalty` pins deep overrides
/// at the bottom instead of overflowing.
pub fn tier_score(record: &SymbolRecord, tier: MatchTier, policy: &ScoringPolicy) -> i64 {
    let penalty = i64::from(record.overridden_depth).saturating_mul(policy.depth_penalty);
    let adjusted = tier.base_score(policy).saturating_sub(penalty);
    let weight = policy.weights.weight(&record.kind);
    debug_assert!(weight > 0, "kind weight for '{}' must be positive, got {}", record.kind, weight);
    adjusted.div_euclid(weight.max(1))
}

/// Score a single record against a query, or `None` if it does not match.
pub fn score_record<'a>(
    record: &'a SymbolRecord,
    query: &SearchQuery<'_>,
    policy: &ScoringPolicy,
) -> Option<MatchCandidate<'a>> {
    let tier = match_tier(record, query, policy)?;
    Some(MatchCandidate {
        record,
        tier,
        score: tier_score(record, tier, policy),
    })
}
