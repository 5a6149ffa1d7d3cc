//! The immutable symbol index loaded once per session.

use crate::error::IndexError;
use crate::types::SymbolRecord;
use serde_json::Value;
use std::io::Read;

/// An ordered, read-only collection of symbol records.
///
/// Iteration order is load order. Ranking relies on it to break ties
/// reproducibly, so the index never reorders or mutates its records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolIndex {
    records: Vec<SymbolRecord>,
}

impl SymbolIndex {
    /// Parse a serialized index.
    ///
    /// The source must be a JSON array. Entries that are not well-formed records
    /// (missing a required field, empty name, negative depth) are dropped and the
    /// rest of the index still loads.
    pub fn load(source: &str) -> Result<Self, IndexError> {
        let entries: Vec<Value> =
            serde_json::from_str(source).map_err(|e| IndexError::Malformed(e.to_string()))?;
        Ok(Self::from_entries(entries))
    }

    /// Same as [`SymbolIndex::load`], reading from any byte source.
    pub fn from_reader(reader: impl Read) -> Result<Self, IndexError> {
        let entries: Vec<Value> =
            serde_json::from_reader(reader).map_err(|e| IndexError::Malformed(e.to_string()))?;
        Ok(Self::from_entries(entries))
    }

    fn from_entries(entries: Vec<Value>) -> Self {
        let total = entries.len();
        let records: Vec<SymbolRecord> = entries
            .into_iter()
            .enumerate()
            .filter_map(|(position, entry)| match parse_record(entry) {
                Ok(record) => Some(record),
                Err(reason) => {
                    tracing::warn!("Dropping index entry {}: {}", position, reason);
                    None
                }
            })
            .collect();

        tracing::debug!(
            "Loaded {} symbols ({} dropped)",
            records.len(),
            total - records.len()
        );
        Self { records }
    }

    /// All records in load order.
    pub fn all(&self) -> &[SymbolRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SymbolRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<SymbolRecord> for SymbolIndex {
    fn from_iter<I: IntoIterator<Item = SymbolRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SymbolIndex {
    type Item = &'a SymbolRecord;
    type IntoIter = std::slice::Iter<'a, SymbolRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn parse_record(entry: Value) -> Result<SymbolRecord, String> {
    let record: SymbolRecord = serde_json::from_value(entry).map_err(|e| e.to_string())?;
    if record.name.is_empty() {
        return Err("empty name".to_string());
    }
    if record.qualified_name.is_empty() {
        return Err(format!("empty qualifiedName for '{}'", record.name));
    }
    Ok(record)
}
