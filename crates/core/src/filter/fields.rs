// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Insertion-ordered match-field mapping.
//!
//! Clause order in a built query follows field insertion order, so the
//! mapping is an association list rather than a hash map. Iteration order
//! is an observable contract of the query builder.

use super::value::MatchValue;

/// Mapping from field path to match value, preserving insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchFields {
    entries: Vec<(String, MatchValue)>,
}

impl MatchFields {
    pub fn new() -> Self {
        MatchFields::default()
    }

    /// Insert or replace a field. Replacing keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MatchValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MatchValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MatchValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<MatchValue>> FromIterator<(K, V)> for MatchFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = MatchFields::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

impl<'a> IntoIterator for &'a MatchFields {
    type Item = &'a (String, MatchValue);
    type IntoIter = std::slice::Iter<'a, (String, MatchValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
