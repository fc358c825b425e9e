// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Named argument maps for event dispatch

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// An ordered mapping of argument names to values.
///
/// Bound arguments are captured when a handler is registered and replayed on
/// every fire; fire arguments are supplied at the moment of firing and apply
/// to every handler in that pass. [`EventArgs::merged_with`] combines the
/// two with fire-time values taking precedence on key collision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventArgs(BTreeMap<String, Value>);

impl EventArgs {
    /// An empty argument map
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add an argument, returning the map for chaining
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Add or replace an argument in place
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Look up an argument by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Argument names in map order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Name/value pairs in map order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the map holds no arguments
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names present in both maps, in map order
    pub fn conflicting_keys(&self, other: &EventArgs) -> Vec<String> {
        self.0
            .keys()
            .filter(|k| other.0.contains_key(*k))
            .cloned()
            .collect()
    }

    /// Merge `fire` over these bound arguments into a new map.
    ///
    /// Fire-time values win on key collision; neither input is mutated.
    pub fn merged_with(&self, fire: &EventArgs) -> EventArgs {
        let mut merged = self.0.clone();
        for (name, value) in &fire.0 {
            merged.insert(name.clone(), value.clone());
        }
        Self(merged)
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for EventArgs {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for EventArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
