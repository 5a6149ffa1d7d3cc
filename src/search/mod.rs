//! Symbol search infrastructure for generated API documentation.
//!
//! This module provides the immutable symbol index, query normalization,
//! tiered per-record scoring, and whole-index ranking.

// Module declarations
pub(crate) mod index;
pub(crate) mod query;
pub(crate) mod ranker;
pub(crate) mod scoring;

// Public re-exports (used via lib.rs)
pub use index::SymbolIndex;
pub use query::SearchQuery;
pub use ranker::{rank, rank_candidates};
pub use scoring::{MatchCandidate, MatchTier, match_tier, score_record, tier_score};
