//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `docs_index`: A realistic game-engine API index, loaded in memory
//! - `docs_workspace`: The same index written to `index.json` in a temp directory,
//!   for tests that exercise async index acquisition
//!
//! [`TempWorkspace`] provides the temp directory abstraction; it is cleaned up
//! when dropped.

use docsearch::{Config, SearchSession, SymbolIndex};
use rstest::fixture;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A dartdoc-style index: `type`, `href` and `enclosedBy` keys, as the
/// documentation generator emits them.
pub const DOCS_INDEX: &str = r#"[
  {"name": "flame", "qualifiedName": "flame", "href": "flame/flame-library.html", "type": "library", "overriddenDepth": 0},
  {"name": "dart:async", "qualifiedName": "dart:async", "href": "dart-async/dart-async-library.html", "type": "library", "overriddenDepth": 0},
  {"name": "Game", "qualifiedName": "flame.Game", "href": "flame/Game-class.html", "type": "class", "overriddenDepth": 0,
   "enclosedBy": {"name": "flame", "type": "library", "href": "flame/flame-library.html"}},
  {"name": "FlameGame", "qualifiedName": "flame.FlameGame", "href": "flame/FlameGame-class.html", "type": "class", "overriddenDepth": 0,
   "enclosedBy": {"name": "flame", "type": "library"}},
  {"name": "update", "qualifiedName": "flame.Game.update", "href": "flame/Game/update.html", "type": "method", "overriddenDepth": 0,
   "enclosedBy": {"name": "Game", "type": "class"}},
  {"name": "update", "qualifiedName": "flame.FlameGame.update", "href": "flame/FlameGame/update.html", "type": "method", "overriddenDepth": 1,
   "enclosedBy": {"name": "FlameGame", "type": "class"}},
  {"name": "onGameResize", "qualifiedName": "flame.Game.onGameResize", "href": "flame/Game/onGameResize.html", "type": "method", "overriddenDepth": 0,
   "enclosedBy": {"name": "Game", "type": "class"}},
  {"name": "Draw", "qualifiedName": "flame.Draw", "href": "flame/Draw-class.html", "type": "class", "overriddenDepth": 0,
   "enclosedBy": {"name": "flame", "type": "library"}},
  {"name": "draw", "qualifiedName": "flame.Sprite.draw", "href": "flame/Sprite/draw.html", "type": "method", "overriddenDepth": 0,
   "enclosedBy": {"name": "Sprite", "type": "class"}},
  {"name": "run", "qualifiedName": "test.run", "href": "test/run.html", "type": "method", "overriddenDepth": 0},
  {"name": "runAll", "qualifiedName": "test.runAll", "href": "test/runAll.html", "type": "method", "overriddenDepth": 0},
  {"name": "GameWidget", "qualifiedName": "flame.GameWidget", "href": "flame/GameWidget-class.html", "type": "class", "overriddenDepth": 0},
  {"name": "GameWidget", "qualifiedName": "flame.GameWidget.GameWidget", "href": "flame/GameWidget/GameWidget.html", "type": "constructor", "overriddenDepth": 0,
   "enclosedBy": {"name": "GameWidget", "type": "class"}},
  {"name": "OverlayBuilderMap", "qualifiedName": "flame.OverlayBuilderMap", "href": "flame/OverlayBuilderMap.html", "type": "typedef", "overriddenDepth": 0},
  {"name": "isMounted", "qualifiedName": "flame.Component.isMounted", "href": "flame/Component/isMounted.html", "type": "property", "overriddenDepth": 0},
  {"name": "HasGameRef", "qualifiedName": "flame.HasGameRef", "href": "flame/HasGameRef-mixin.html", "type": "mixin", "overriddenDepth": 0}
]"#;

/// A temporary directory for test isolation.
#[allow(dead_code)] // Methods used across different integration test crates
pub struct TempWorkspace {
    _temp: TempDir,
    root: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl TempWorkspace {
    /// Creates a new empty temporary workspace.
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().to_path_buf();
        Self { _temp: temp, root }
    }

    /// Returns the root path of this workspace.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Creates a file with the given content within this workspace.
    ///
    /// Parent directories are created automatically if they don't exist.
    ///
    /// # Panics
    /// Panics if file creation fails.
    pub fn create_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("Failed to create parent directory for '{}': {}", path, e)
            });
        }
        std::fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("Failed to write file '{}': {}", path, e));
        full_path
    }
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// A temp directory holding `index.json` and `docsearch.toml`.
#[allow(dead_code)] // Fields used across different integration test crates
pub struct DocsWorkspace {
    pub workspace: TempWorkspace,
    pub index_path: PathBuf,
}

/// The documentation index, parsed in memory.
#[fixture]
pub fn docs_index() -> Arc<SymbolIndex> {
    Arc::new(SymbolIndex::load(DOCS_INDEX).expect("Fixture index must parse"))
}

/// The documentation index written to disk.
#[allow(dead_code)] // Used in session_test.rs
#[fixture]
pub fn docs_workspace() -> DocsWorkspace {
    let workspace = TempWorkspace::new();
    let index_path = workspace.create_file("api/index.json", DOCS_INDEX);
    DocsWorkspace {
        workspace,
        index_path,
    }
}

/// A session over the fixture index with default configuration.
#[allow(dead_code)] // Used in session_test.rs
pub fn session(index: Arc<SymbolIndex>) -> SearchSession {
    docsearch::tracing::init(false);
    SearchSession::new(index, Arc::new(Config::default()))
}

/// Names of ranked records, for order assertions.
#[allow(dead_code)] // Used in search_test.rs
pub fn qualified_names(records: &[&docsearch::SymbolRecord]) -> Vec<String> {
    records.iter().map(|r| r.qualified_name.clone()).collect()
}
