//! Insertion-ordered key/value configuration maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A string map preserving insertion order with last-write-wins keys.
///
/// Compiled command lines must be reproducible for a given configuration
/// sequence, so iteration follows insertion order. Re-setting an existing
/// key overwrites its value in place and keeps the key's original position.
///
/// Names and values are accepted verbatim; no validation is applied, even
/// for values containing the delimiter characters used during argument
/// serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedParams(IndexMap<String, String>);

impl OrderedParams {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
