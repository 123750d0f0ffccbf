// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for raw filter tokens.
//!
//! Turns `"name:value"` tokens into a typed [`MatchFields`] mapping. Values
//! are untyped strings; their type is inferred by an ordered chain of
//! fallible parsers (see [`infer_value`]).

use serde_json::Value;

use crate::config::default_zone;
use crate::time::to_utc;

use super::fields::MatchFields;
use super::value::MatchValue;

type ValueParser = fn(&str) -> Option<MatchValue>;

/// The inference chain, applied in order; first success wins.
///
/// The order is a contract: the number parser must run before the date
/// parser so that `"33"` becomes the number 33, never a date.
const INFERENCE_CHAIN: &[ValueParser] = &[json_structure, boolean, number, date];

/// Parse raw filter tokens into a typed field mapping.
///
/// Each token is a comma-joined list of `name:value` sub-tokens; a bare
/// `name` maps to [`MatchValue::Absent`] (field presence requested with no
/// constraint). Empty input yields an empty mapping; this never fails.
pub fn parse_properties<T: AsRef<str>>(tokens: &[T]) -> MatchFields {
    let mut fields = MatchFields::new();

    for token in tokens {
        for sub in token.as_ref().split(',') {
            let (name, value) = match sub.split_once(':') {
                Some((name, value)) => (name, Some(value)),
                None => (sub, None),
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            fields.insert(name, infer_value(value));
        }
    }

    fields
}

/// Infer the type of a single raw value string.
///
/// Supports JSON structure, boolean, number, date, and string, in that
/// order. `None` means the value was absent entirely.
pub fn infer_value(raw: Option<&str>) -> MatchValue {
    let Some(raw) = raw else {
        return MatchValue::Absent;
    };

    for parse in INFERENCE_CHAIN {
        if let Some(value) = parse(raw) {
            return value;
        }
    }

    MatchValue::Text(raw.to_string())
}

/// JSON objects and arrays only; scalars fall through to the typed rules.
fn json_structure(raw: &str) -> Option<MatchValue> {
    match serde_json::from_str::<Value>(raw).ok()? {
        Value::Object(map) => Some(MatchValue::Json(Value::Object(map))),
        Value::Array(items) => Some(MatchValue::List(
            items.iter().map(from_json_element).collect(),
        )),
        _ => None,
    }
}

fn boolean(raw: &str) -> Option<MatchValue> {
    match raw {
        "true" => Some(MatchValue::Bool(true)),
        "false" => Some(MatchValue::Bool(false)),
        _ => None,
    }
}

/// Finite numbers only; `inf`/`NaN` spellings fall through to text.
fn number(raw: &str) -> Option<MatchValue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(MatchValue::Number)
}

fn date(raw: &str) -> Option<MatchValue> {
    to_utc(raw, default_zone()).ok().map(MatchValue::Date)
}

fn from_json_element(value: &Value) -> MatchValue {
    match value {
        Value::Null => MatchValue::Absent,
        Value::Bool(b) => MatchValue::Bool(*b),
        Value::Number(n) => MatchValue::Number(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => MatchValue::Text(s.clone()),
        other => MatchValue::Json(other.clone()),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
