//! Symbol records as they appear in a documentation search index.

use serde::Deserialize;
use std::fmt;

/// The kind of a documented symbol.
///
/// Parsed case-insensitively from the index. Unknown kinds keep their label so they
/// can still be displayed, and rank with the default weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum SymbolKind {
    Library,
    Class,
    Typedef,
    Method,
    Accessor,
    Operator,
    Property,
    Constructor,
    Other(String),
}

impl SymbolKind {
    /// Lower-case label used when rendering suggestions.
    pub fn label(&self) -> &str {
        match self {
            Self::Library => "library",
            Self::Class => "class",
            Self::Typedef => "typedef",
            Self::Method => "method",
            Self::Accessor => "accessor",
            Self::Operator => "operator",
            Self::Property => "property",
            Self::Constructor => "constructor",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for SymbolKind {
    fn from(raw: String) -> Self {
        match raw.to_lowercase().as_str() {
            "library" => Self::Library,
            "class" => Self::Class,
            "typedef" => Self::Typedef,
            "method" => Self::Method,
            "accessor" => Self::Accessor,
            "operator" => Self::Operator,
            "property" => Self::Property,
            "constructor" => Self::Constructor,
            lower => Self::Other(lower.to_string()),
        }
    }
}

impl From<&str> for SymbolKind {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The library or class that contains a symbol. Display only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnclosingScope {
    pub name: String,
    #[serde(default, alias = "type")]
    pub kind: Option<SymbolKind>,
    #[serde(default, alias = "href")]
    pub target: Option<String>,
}

/// One documented entity in the search index.
///
/// Accepts both the canonical keys (`kind`, `target`, `enclosingScope`) and the
/// dartdoc `index.json` keys (`type`, `href`, `enclosedBy`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolRecord {
    pub name: String,
    pub qualified_name: String,
    #[serde(alias = "type")]
    pub kind: SymbolKind,
    #[serde(default, alias = "enclosedBy")]
    pub enclosing_scope: Option<EnclosingScope>,
    #[serde(default)]
    pub overridden_depth: u32,
    #[serde(alias = "href")]
    pub target: String,
}

impl SymbolRecord {
    /// Build a record with no enclosing scope and no override depth.
    pub fn new(
        name: impl Into<String>,
        qualified_name: impl Into<String>,
        kind: impl Into<SymbolKind>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            qualified_name: qualified_name.into(),
            kind: kind.into(),
            enclosing_scope: None,
            overridden_depth: 0,
            target: target.into(),
        }
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.overridden_depth = depth;
        self
    }

    pub fn with_scope(mut self, scope: EnclosingScope) -> Self {
        self.enclosing_scope = Some(scope);
        self
    }

    /// Name of the enclosing library or class, if any.
    pub fn enclosing_scope_name(&self) -> Option<&str> {
        self.enclosing_scope.as_ref().map(|scope| scope.name.as_str())
    }

    /// Length of the simple name in characters, used as the ranking tie-break.
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }
}
