//! Search configuration: the scoring policy and the front-end settings around it.

use crate::error::ConfigError;
use crate::types::SymbolKind;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Number of suggestions shown in the dropdown.
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Base scores for each match tier, strongest first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TierScores {
    pub exact: i64,
    pub library_exact: i64,
    pub library_case_insensitive: i64,
    pub case_insensitive_exact: i64,
    pub prefix: i64,
    pub case_insensitive_prefix: i64,
    pub contains: i64,
    pub case_insensitive_contains: i64,
}

impl Default for TierScores {
    fn default() -> Self {
        Self {
            exact: 2000,
            library_exact: 2000,
            library_case_insensitive: 1800,
            case_insensitive_exact: 1700,
            prefix: 750,
            case_insensitive_prefix: 650,
            contains: 500,
            case_insensitive_contains: 400,
        }
    }
}

/// Per-kind divisors applied to the adjusted tier score.
///
/// Every weight must be positive. [`ScoringPolicy::validate`] enforces this for
/// loaded configuration; a hand-built policy that skips validation trips a debug
/// assertion when scored, and release builds divide by 1 instead.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KindWeights {
    pub library: i64,
    pub class: i64,
    pub typedef: i64,
    pub method: i64,
    pub accessor: i64,
    pub operator: i64,
    pub property: i64,
    pub constructor: i64,
    /// Used for any kind not listed above.
    pub other: i64,
}

impl Default for KindWeights {
    fn default() -> Self {
        Self {
            library: 2,
            class: 2,
            typedef: 3,
            method: 4,
            accessor: 4,
            operator: 4,
            property: 4,
            constructor: 4,
            other: 4,
        }
    }
}

impl KindWeights {
    pub fn weight(&self, kind: &SymbolKind) -> i64 {
        match kind {
            SymbolKind::Library => self.library,
            SymbolKind::Class => self.class,
            SymbolKind::Typedef => self.typedef,
            SymbolKind::Method => self.method,
            SymbolKind::Accessor => self.accessor,
            SymbolKind::Operator => self.operator,
            SymbolKind::Property => self.property,
            SymbolKind::Constructor => self.constructor,
            SymbolKind::Other(_) => self.other,
        }
    }

    fn entries(&self) -> [(&'static str, i64); 9] {
        [
            ("library", self.library),
            ("class", self.class),
            ("typedef", self.typedef),
            ("method", self.method),
            ("accessor", self.accessor),
            ("operator", self.operator),
            ("property", self.property),
            ("constructor", self.constructor),
            ("other", self.other),
        ]
    }
}

/// Everything that determines how a record is scored against a query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    pub tiers: TierScores,
    pub weights: KindWeights,
    /// Subtracted from the tier score once per overridden ancestor. Must not be negative.
    pub depth_penalty: i64,
    /// Prefix and substring tiers only apply to queries at least this many characters long.
    pub min_substring_query_len: usize,
    /// Prefix carried by library names, e.g. `dart:` in `dart:async`.
    pub library_prefix: String,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            tiers: TierScores::default(),
            weights: KindWeights::default(),
            depth_penalty: 10,
            min_substring_query_len: 3,
            library_prefix: "dart:".to_string(),
        }
    }
}

impl ScoringPolicy {
    /// Reject policies that would divide by zero or invert the ranking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (kind, weight) in self.weights.entries() {
            if weight <= 0 {
                return Err(ConfigError::ZeroWeight {
                    kind: kind.to_string(),
                });
            }
        }
        if self.depth_penalty < 0 {
            return Err(ConfigError::NegativeDepthPenalty(self.depth_penalty));
        }
        Ok(())
    }
}

/// Top-level configuration for the search front end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scoring: ScoringPolicy,
    /// Maximum number of suggestions rendered per query.
    pub display_limit: usize,
    /// Prefix for navigation targets when pages are served without a `<base>` tag.
    pub base_href: Option<String>,
    /// Location of the serialized symbol index.
    pub index_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringPolicy::default(),
            display_limit: DEFAULT_DISPLAY_LIMIT,
            base_href: None,
            index_path: PathBuf::from("index.json"),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let path = expand_tilde(path);
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("Invalid config at {}", path.display()))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(raw).context("Failed to parse TOML")?;
        config.index_path = expand_tilde(&config.index_path).into_owned();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_limit == 0 {
            return Err(ConfigError::ZeroDisplayLimit);
        }
        self.scoring.validate()
    }

    /// Prefix a navigation target with the configured base href.
    pub fn resolve_target<'a>(&self, target: &'a str) -> Cow<'a, str> {
        match self.base_href.as_deref() {
            Some(base) if !base.is_empty() => Cow::Owned(format!("{}{}", base, target)),
            _ => Cow::Borrowed(target),
        }
    }
}

/// Expands a leading `~` in a path to the user's home directory.
///
/// Returns `Cow::Borrowed` if no expansion is needed.
pub fn expand_tilde(path: &Path) -> Cow<'_, Path> {
    if let Ok(stripped) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.join(stripped));
    }
    Cow::Borrowed(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn test_defaults_match_weight_table() {
        let policy = ScoringPolicy::default();
        check!(policy.weights.weight(&SymbolKind::Library) == 2);
        check!(policy.weights.weight(&SymbolKind::Class) == 2);
        check!(policy.weights.weight(&SymbolKind::Typedef) == 3);
        check!(policy.weights.weight(&SymbolKind::Constructor) == 4);
        check!(policy.weights.weight(&SymbolKind::Other("mixin".into())) == 4);
        check!(policy.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
display_limit = 5
base_href = "../"

[scoring]
depth_penalty = 20

[scoring.weights]
method = 8
"#,
        )
        .unwrap();

        check!(config.display_limit == 5);
        check!(config.scoring.depth_penalty == 20);
        check!(config.scoring.weights.method == 8);
        check!(config.scoring.weights.class == 2);
        check!(config.scoring.tiers == TierScores::default());
        check!(config.scoring.library_prefix == "dart:");
    }

    #[test]
    fn test_zero_weight_is_rejected() {
        let err = Config::from_toml("[scoring.weights]\nclass = 0\n").unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>();
        check!(
            config_err
                == Some(&ConfigError::ZeroWeight {
                    kind: "class".to_string()
                })
        );
    }

    #[test]
    fn test_negative_depth_penalty_is_rejected() {
        let err = Config::from_toml("[scoring]\ndepth_penalty = -10\n").unwrap_err();
        check!(err.downcast_ref::<ConfigError>() == Some(&ConfigError::NegativeDepthPenalty(-10)));

        let policy = ScoringPolicy {
            depth_penalty: 0,
            ..ScoringPolicy::default()
        };
        check!(policy.validate().is_ok());
    }

    #[test]
    fn test_resolve_target() {
        let mut config = Config::default();
        check!(config.resolve_target("flame/Game-class.html") == "flame/Game-class.html");

        config.base_href = Some("../../".to_string());
        check!(config.resolve_target("flame/Game-class.html") == "../../flame/Game-class.html");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docsearch.toml");
        std::fs::write(&path, "display_limit = 3\n").unwrap();

        let config = Config::load(&path).unwrap();
        check!(config.display_limit == 3);
        check!(config.index_path == PathBuf::from("index.json"));
    }
}
