pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod search;
pub mod session;
pub mod tracing;
pub mod types;

pub use config::{Config, KindWeights, ScoringPolicy, TierScores};
pub use error::{ConfigError, IndexError};
pub use loader::{IndexLoader, SearchInput};
pub use search::{MatchCandidate, MatchTier, SymbolIndex, rank, rank_candidates};
pub use session::{Navigation, QueryTicket, Rendered, SearchSession, SessionPhase, Suggestion};
pub use types::{EnclosingScope, SymbolKind, SymbolRecord};
