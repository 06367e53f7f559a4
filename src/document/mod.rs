//! API documentation documents
//!
//! A documentation file is one JSON object mapping symbol names such as
//! `@luau/global/print` to their entries. Key order from the source file is
//! kept through load, filter and save.

pub mod filter;
pub mod io;

pub use filter::{filter, LUAU_PREFIX};
pub use io::{load, save};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Full documentation object as loaded from disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    entries: Map<String, Value>,
}

/// Subset of a [`Document`] whose keys matched a prefix
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilteredDocument {
    entries: Map<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Keys in source order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

impl FilteredDocument {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Keys in source order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

impl From<Map<String, Value>> for Document {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

impl From<FilteredDocument> for Document {
    fn from(filtered: FilteredDocument) -> Self {
        Self {
            entries: filtered.entries,
        }
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl FromIterator<(String, Value)> for FilteredDocument {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl AsRef<Map<String, Value>> for Document {
    fn as_ref(&self) -> &Map<String, Value> {
        &self.entries
    }
}

impl AsRef<Map<String, Value>> for FilteredDocument {
    fn as_ref(&self) -> &Map<String, Value> {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_keys_follow_insertion_order() {
        let doc: Document = [
            ("zeta".to_string(), json!(1)),
            ("alpha".to_string(), json!(2)),
            ("mid".to_string(), json!(3)),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = doc.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let doc: Document = [("@luau/global/print".to_string(), json!({"params": []}))]
            .into_iter()
            .collect();

        let text = serde_json::to_string(&doc).expect("serialize document");
        assert_eq!(text, r#"{"@luau/global/print":{"params":[]}}"#);
    }
}
