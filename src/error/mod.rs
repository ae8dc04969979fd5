//! Error types and handling infrastructure for key recasing
//!
//! Recasing never short-circuits: strategies accumulate failures into a
//! string-keyed [`ErrorMap`] and keep walking siblings. The typed errors here
//! exist for callers who want `?`-style propagation at the outer boundary;
//! their display strings are the exact messages stored in the map.

use anyhow::Error;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Core error kinds produced during recasing
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecaseErrorKind {
    #[error("data was not an instance of an array")]
    NotAnArray,

    #[error("data was not an object but was trying to be normalized as an object")]
    NotAnObject,
}

/// String-keyed error accumulator.
///
/// Merging is key-based last-write-wins: a later error under the same key
/// replaces the earlier one instead of aborting the traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    /// Create an empty error map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map holding a single entry
    pub fn single(key: impl Into<String>, message: impl Into<String>) -> Self {
        let mut map = Self::new();
        map.insert(key, message);
        map
    }

    /// Insert an entry, replacing any existing entry under the same key
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.insert(key.into(), message.into());
    }

    /// Merge another map into this one, last-write-wins per key
    pub fn merge(&mut self, other: ErrorMap) {
        self.0.extend(other.0);
    }

    /// Look up the message stored under a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// True when no errors have been recorded
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded errors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over (key, message) pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", key, message)?;
            first = false;
        }
        Ok(())
    }
}

impl From<BTreeMap<String, String>> for ErrorMap {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl IntoIterator for ErrorMap {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Main error type for recasing operations
#[derive(Debug, thiserror::Error)]
pub enum RecaseError {
    #[error("recasing failed: {0}")]
    Aggregate(ErrorMap),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Other(#[from] Error),
}

impl RecaseError {
    pub fn aggregate(errors: ErrorMap) -> Self {
        Self::Aggregate(errors)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// Result type for recasing operations
pub type RecaseResult<T> = Result<T, RecaseError>;
