//! Export documents and deep merge.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Recursively merge `source` into `target`.
///
/// Objects merge key by key; any other value in `source` (including arrays)
/// replaces what is in `target`. Later merges win at identical paths.
pub fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => merge_maps(target, source),
        (target, source) => *target = source,
    }
}

fn merge_maps(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match target.get_mut(&key) {
            Some(existing) => deep_merge(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}

/// A nested mapping of export tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExportDocument(Map<String, Value>);

impl ExportDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding a single path of nested mappings ending in `leaf`.
    pub fn from_path<S: AsRef<str>>(segments: &[S], leaf: Value) -> Self {
        let value = segments
            .iter()
            .rev()
            .fold(leaf, |inner, segment| {
                let mut map = Map::new();
                map.insert(segment.as_ref().to_string(), inner);
                Value::Object(map)
            });
        match value {
            Value::Object(map) => Self(map),
            // An empty path has no key to hang the leaf on
            _ => Self::default(),
        }
    }

    /// Deep-merge `other` into this document.
    pub fn merge(&mut self, other: ExportDocument) {
        merge_maps(&mut self.0, other.0);
    }

    /// Look up the value at a path of keys.
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.0.get(*first)?, |value, key| value.get(*key))
    }

    /// Top-level keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.0)
    }
}
