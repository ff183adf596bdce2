use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// URL of an empty tab.
pub const BLANK_URL: &str = "about:blank";
/// URL of the welcome page shown on first launch.
pub const WELCOME_URL: &str = "about:welcome";

/// Well-known metadata keys. Anything else is accepted and carried as-is.
pub mod meta_keys {
    pub const CATEGORY: &str = "category";
    pub const AI_ANALYZED: &str = "aiAnalyzed";
    pub const BOOKMARKED: &str = "bookmarked";
    pub const LOADING: &str = "loading";
    pub const SUMMARY: &str = "summary";
}

/// A logical browsing unit shown as a bubble in the workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub created_at: i64,
    pub position: Position,
    #[serde(default)]
    pub metadata: TabMetadata,
}

/// Position of a tab bubble inside the workspace, in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Open attribute map attached to a tab.
///
/// A missing key reads as "unknown" (or `false` for flags), never as an error.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct TabMetadata(BTreeMap<String, Value>);

impl TabMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Reads a boolean flag; absent or non-boolean values are `false`.
    pub fn flag(&self, key: &str) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Merges `patch` into the map. A `null` value removes the key.
    pub fn apply(&mut self, patch: MetadataPatch) {
        for (key, value) in patch.0 {
            if value.is_null() {
                self.0.remove(&key);
            } else {
                self.0.insert(key, value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A set of metadata changes applied through the tab store.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(transparent)]
pub struct MetadataPatch(BTreeMap<String, Value>);

impl MetadataPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn remove(mut self, key: &str) -> Self {
        self.0.insert(key.to_string(), Value::Null);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<serde_json::Map<String, Value>> for MetadataPatch {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(map.into_iter().collect())
    }
}
