//! The incremental query and selection protocol around the ranker.
//!
//! Every submitted query is issued a ticket from a monotonically increasing
//! counter. A ranked response is only rendered if its ticket is the latest one
//! issued, so a slow response for an old query can never overwrite the results
//! of a newer one.

use crate::config::Config;
use crate::search::{SymbolIndex, rank};
use crate::types::SymbolRecord;
use std::fmt;
use std::sync::Arc;

/// Sequence number attached to a submitted query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QueryTicket(u64);

impl QueryTicket {
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

/// Where a query session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Scoring,
    Ranked,
    Rendered,
    NavigatedAway,
}

/// One entry of the suggestion dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub display_name: String,
    pub kind: String,
    pub enclosing_scope_name: Option<String>,
    /// Navigation target, already resolved against the base href.
    pub target: String,
}

impl Suggestion {
    fn from_record(record: &SymbolRecord, config: &Config) -> Self {
        Self {
            display_name: record.name.clone(),
            kind: record.kind.label().to_string(),
            enclosing_scope_name: record.enclosing_scope_name().map(str::to_string),
            target: config.resolve_target(&record.target).into_owned(),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_name, self.kind)?;
        if let Some(scope) = &self.enclosing_scope_name {
            write!(f, " (from {})", scope)?;
        }
        Ok(())
    }
}

/// The full ranked result for one ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedResponse {
    pub ticket: QueryTicket,
    pub query: String,
    pub suggestions: Vec<Suggestion>,
}

/// What the dropdown currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub ticket: QueryTicket,
    pub query: String,
    /// At most `display_limit` entries, best first.
    pub suggestions: Vec<Suggestion>,
    /// Number of matches before truncation.
    pub total_matches: usize,
}

impl Rendered {
    /// An empty rendering must be shown as "no results", replacing any prior list.
    pub fn is_no_results(&self) -> bool {
        self.suggestions.is_empty()
    }
}

/// A request to leave the page for a symbol's documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub symbol: String,
    pub target: String,
}

/// State for one search input.
///
/// Several sessions may share one index; each keeps its own ticket counter,
/// rendered list and highlighted suggestion.
#[derive(Debug)]
pub struct SearchSession {
    index: Arc<SymbolIndex>,
    config: Arc<Config>,
    last_issued: u64,
    phase: SessionPhase,
    rendered: Option<Rendered>,
    highlighted: Option<usize>,
}

impl SearchSession {
    pub fn new(index: Arc<SymbolIndex>, config: Arc<Config>) -> Self {
        Self {
            index,
            config,
            last_issued: 0,
            phase: SessionPhase::Idle,
            rendered: None,
            highlighted: None,
        }
    }

    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub const fn rendered(&self) -> Option<&Rendered> {
        self.rendered.as_ref()
    }

    /// Position of the highlighted suggestion in the rendered list.
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// The ticket most recently issued, if any.
    pub const fn latest_ticket(&self) -> Option<QueryTicket> {
        if self.last_issued == 0 {
            None
        } else {
            Some(QueryTicket(self.last_issued))
        }
    }

    fn issue(&mut self) -> QueryTicket {
        self.last_issued += 1;
        QueryTicket(self.last_issued)
    }

    fn ranked_suggestions(&self, query: &str) -> Vec<Suggestion> {
        rank(&self.index, query, &self.config.scoring)
            .into_iter()
            .map(|record| Suggestion::from_record(record, &self.config))
            .collect()
    }

    /// Incremental mode: rank a query and return the complete result list.
    ///
    /// Supersedes every earlier ticket. A blank query yields an empty response.
    pub fn submit(&mut self, query: &str) -> RankedResponse {
        let ticket = self.issue();
        self.phase = SessionPhase::Scoring;
        let suggestions = self.ranked_suggestions(query);
        self.phase = SessionPhase::Ranked;

        RankedResponse {
            ticket,
            query: query.to_string(),
            suggestions,
        }
    }

    /// Render a response if it belongs to the latest ticket.
    ///
    /// Stale responses are discarded and `None` is returned; the current
    /// rendering stays untouched.
    pub fn present(&mut self, response: RankedResponse) -> Option<&Rendered> {
        if Some(response.ticket) != self.latest_ticket() {
            tracing::debug!(
                "Discarding stale results for '{}' (ticket {}, latest {})",
                response.query,
                response.ticket.sequence(),
                self.last_issued
            );
            return None;
        }

        let total_matches = response.suggestions.len();
        let mut suggestions = response.suggestions;
        suggestions.truncate(self.config.display_limit);

        self.phase = SessionPhase::Rendered;
        self.highlighted = None;
        self.rendered = Some(Rendered {
            ticket: response.ticket,
            query: response.query,
            suggestions,
            total_matches,
        });
        self.rendered.as_ref()
    }

    /// Submit and immediately render a query.
    pub fn update(&mut self, query: &str) -> Option<&Rendered> {
        let response = self.submit(query);
        self.present(response)
    }

    /// Navigate to the rendered suggestion at `position`.
    pub fn select(&mut self, position: usize) -> Option<Navigation> {
        let suggestion = self.rendered.as_ref()?.suggestions.get(position)?;
        let navigation = Navigation {
            symbol: suggestion.display_name.clone(),
            target: suggestion.target.clone(),
        };
        self.phase = SessionPhase::NavigatedAway;
        Some(navigation)
    }

    /// Move the highlight to the rendered suggestion at `position`.
    ///
    /// Out-of-range positions leave the current highlight unchanged.
    pub fn highlight(&mut self, position: usize) -> Option<&Suggestion> {
        let suggestion = self.rendered.as_ref()?.suggestions.get(position)?;
        self.highlighted = Some(position);
        Some(suggestion)
    }

    /// Navigate to the highlighted suggestion, or the top one if none is highlighted.
    pub fn enter(&mut self) -> Option<Navigation> {
        self.select(self.highlighted.unwrap_or(0))
    }

    /// Direct-navigation mode: rank once and navigate to the best match.
    ///
    /// Returns `None` when nothing matched; the session then stays available for
    /// incremental queries.
    pub fn direct_navigation(&mut self, query: &str) -> Option<Navigation> {
        let response = self.submit(query);
        let Some(best) = response.suggestions.into_iter().next() else {
            tracing::debug!("No direct match for '{}', falling back to incremental search", query);
            self.phase = SessionPhase::Idle;
            return None;
        };

        tracing::info!("Navigating directly to '{}' for query '{}'", best.display_name, query);
        self.phase = SessionPhase::NavigatedAway;
        Some(Navigation {
            symbol: best.display_name,
            target: best.target,
        })
    }
}
