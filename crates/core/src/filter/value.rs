// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed filter values.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::time::to_iso_utc;

/// A single match-field value, as inferred from an untyped token string.
///
/// A two-element [`MatchValue::List`] whose first element is date-shaped is
/// treated as range bounds by the query builder; any other list is a
/// multi-value containment set.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchValue {
    /// A bare `name` token with no value: field presence requested with no
    /// constraint.
    Absent,
    Bool(bool),
    Number(f64),
    Date(DateTime<Utc>),
    Text(String),
    /// A nested JSON object.
    Json(Value),
    List(Vec<MatchValue>),
}

impl MatchValue {
    /// The "has content" test.
    ///
    /// `Absent`, an empty string, and a list with no content-bearing entries
    /// have no content; `false` and `0` do. The query builder never emits a
    /// clause for a no-content value.
    pub fn has_content(&self) -> bool {
        match self {
            MatchValue::Absent => false,
            MatchValue::Text(s) => !s.is_empty(),
            MatchValue::List(items) => items.iter().any(MatchValue::has_content),
            _ => true,
        }
    }

    /// Render this value as a query parameter value.
    ///
    /// Dates render in the canonical UTC ISO form; non-finite numbers
    /// degrade to null (they cannot occur via inference, which only accepts
    /// finite numbers).
    pub fn to_json(&self) -> Value {
        match self {
            MatchValue::Absent => Value::Null,
            MatchValue::Bool(b) => Value::Bool(*b),
            MatchValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            MatchValue::Date(dt) => Value::String(to_iso_utc(*dt)),
            MatchValue::Text(s) => Value::String(s.clone()),
            MatchValue::Json(v) => v.clone(),
            MatchValue::List(items) => Value::Array(items.iter().map(MatchValue::to_json).collect()),
        }
    }
}

impl From<&str> for MatchValue {
    fn from(s: &str) -> Self {
        MatchValue::Text(s.to_string())
    }
}

impl From<String> for MatchValue {
    fn from(s: String) -> Self {
        MatchValue::Text(s)
    }
}

impl From<bool> for MatchValue {
    fn from(b: bool) -> Self {
        MatchValue::Bool(b)
    }
}

impl From<f64> for MatchValue {
    fn from(n: f64) -> Self {
        MatchValue::Number(n)
    }
}

impl From<DateTime<Utc>> for MatchValue {
    fn from(dt: DateTime<Utc>) -> Self {
        MatchValue::Date(dt)
    }
}

impl<T: Into<MatchValue>> From<Vec<T>> for MatchValue {
    fn from(items: Vec<T>) -> Self {
        MatchValue::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
