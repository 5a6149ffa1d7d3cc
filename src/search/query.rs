//! Query normalization.
//!
//! A query is trimmed once and its lower-case form and character length are
//! computed up front, so scoring a record never re-derives them.

/// A user query prepared for scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery<'q> {
    text: &'q str,
    lower: String,
    char_len: usize,
}

impl<'q> SearchQuery<'q> {
    /// Prepare a raw query. Returns `None` when nothing is left after trimming.
    pub fn parse(raw: &'q str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text,
            lower: text.to_lowercase(),
            char_len: text.chars().count(),
        })
    }

    /// The trimmed query text.
    pub fn text(&self) -> &'q str {
        self.text
    }

    /// Lower-case form used by the case-insensitive tiers.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.char_len == 0
    }
}
