//! Index acquisition.
//!
//! The index is read once, asynchronously, before any search input is enabled.
//! A failed load leaves the input in a degraded state instead of failing the host.

use crate::error::IndexError;
use crate::search::SymbolIndex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Placeholder shown once the index is ready.
pub const READY_PLACEHOLDER: &str = "Search API Docs";
/// Placeholder shown when the index could not be loaded.
pub const ERROR_PLACEHOLDER: &str = "Error loading search index";
/// Placeholder shown while the index is loading.
pub const LOADING_PLACEHOLDER: &str = "Loading search index";

/// Reads a serialized index from disk.
#[derive(Debug, Clone)]
pub struct IndexLoader {
    path: PathBuf,
}

impl IndexLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the index.
    pub async fn load(&self) -> Result<SymbolIndex, IndexError> {
        let start = std::time::Instant::now();
        let source = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| IndexError::Io {
                path: self.path.clone(),
                source,
            })?;

        let index = SymbolIndex::load(&source)?;
        tracing::info!(
            "Loaded search index from {} ({} symbols) in {:?}",
            self.path.display(),
            index.len(),
            start.elapsed()
        );
        Ok(index)
    }
}

/// Availability of a search input, driven by the index load.
#[derive(Debug, Clone)]
pub enum SearchInput {
    /// Index fetch in flight; the input stays disabled.
    Loading,
    Ready(Arc<SymbolIndex>),
    /// The index could not be acquired; search is disabled for the session.
    Unavailable { reason: String },
}

impl SearchInput {
    /// Turn a load result into an input state. Never fails.
    pub fn from_load(result: Result<SymbolIndex, IndexError>) -> Self {
        match result {
            Ok(index) => Self::Ready(Arc::new(index)),
            Err(e) => {
                tracing::error!("Search disabled: {}", e);
                Self::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Load through `loader` and return the resulting input state.
    pub async fn acquire(loader: &IndexLoader) -> Self {
        Self::from_load(loader.load().await)
    }

    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Loading => LOADING_PLACEHOLDER,
            Self::Ready(_) => READY_PLACEHOLDER,
            Self::Unavailable { .. } => ERROR_PLACEHOLDER,
        }
    }

    /// The shared index, if loaded.
    pub fn index(&self) -> Option<&Arc<SymbolIndex>> {
        match self {
            Self::Ready(index) => Some(index),
            _ => None,
        }
    }
}
