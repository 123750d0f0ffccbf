// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The filter-spec query builder.
//!
//! A pure, stateless transform: one [`FilterSpec`] in, one parameterized
//! query out. No I/O happens here; executing the result belongs to the
//! storage collaborator.

use chrono::Utc;
use serde_json::Value;

use crate::config::default_zone;
use crate::error::Result;
use crate::filter::{MatchFields, MatchValue};
use crate::order::{parse_order_properties, OrderToken};
use crate::time::{is_date_time_format, to_iso_utc, to_utc};

/// A client-supplied filter/search/sort specification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    /// Free-text search value, matched case-insensitively.
    pub search_value: String,
    /// Fields eligible for free-text substring search.
    pub search_fields: Vec<String>,
    /// Field path to match value; insertion order drives clause order.
    /// A path may carry a leading `!` (negation) and a single `.`
    /// (property of an element inside an array field).
    pub match_fields: MatchFields,
    /// Compact order-by token, e.g. `"!firstName,lastName"`.
    pub order_by: String,
}

/// One named query parameter, `@`-prefixed.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParameter {
    pub name: String,
    pub value: Value,
}

impl QueryParameter {
    fn new(name: impl Into<String>, value: Value) -> Self {
        QueryParameter {
            name: name.into(),
            value,
        }
    }
}

/// A query string plus the parameters it references.
///
/// Every placeholder in `query` has exactly one matching entry in
/// `parameters`; names are derived deterministically from field paths.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub query: String,
    pub parameters: Vec<QueryParameter>,
}

/// Compile a filter specification into a parameterized query.
///
/// Match fields whose value fails the has-content test are dropped; an
/// entirely empty spec yields the unfiltered `SELECT * FROM c`.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`](crate::Error::InvalidDate) when a range
/// bound looks date-shaped but fails strict parsing; there is no silent
/// fallback that would compare against an unparsable value.
pub fn build(spec: &FilterSpec) -> Result<BuiltQuery> {
    let mut query = String::from("SELECT * FROM c");
    let mut parameters: Vec<QueryParameter> = Vec::new();
    let mut or_ops: Vec<String> = Vec::new();
    let mut and_ops: Vec<String> = Vec::new();

    if !spec.search_value.is_empty() && !spec.search_fields.is_empty() {
        parameters.push(QueryParameter::new(
            "@q",
            Value::String(spec.search_value.to_lowercase()),
        ));
        for field in &spec.search_fields {
            or_ops.push(format!("CONTAINS(LOWER(c.{field}), @q)"));
        }
    }

    for (key, value) in spec.match_fields.iter() {
        if !value.has_content() {
            continue;
        }
        and_ops.push(render_field(key, value, &mut parameters)?);
    }

    if !or_ops.is_empty() || !and_ops.is_empty() {
        // The 1=1 sentinel lets every clause be uniformly AND-prefixed.
        query.push_str(" WHERE 1=1");
    }

    if !or_ops.is_empty() {
        if or_ops.len() == 1 {
            query.push_str(" AND ");
            query.push_str(&or_ops[0]);
        } else {
            query.push_str(" AND (");
            query.push_str(&or_ops.join(" OR "));
            query.push(')');
        }
    }

    for clause in &and_ops {
        query.push_str(" AND ");
        query.push_str(clause);
    }

    let order_tokens = parse_order_properties(&spec.order_by);
    if !order_tokens.is_empty() {
        let rendered: Vec<String> = order_tokens.iter().map(render_order).collect();
        query.push_str(" ORDER BY ");
        query.push_str(&rendered.join(", "));
    }

    tracing::debug!(query = %query, parameters = parameters.len(), "built query");

    Ok(BuiltQuery { query, parameters })
}

/// Render one match field into a clause, pushing its parameters.
///
/// Negation is recognized on the field key only (`!field`); a value
/// beginning with `!` is a literal value.
fn render_field(
    key: &str,
    value: &MatchValue,
    parameters: &mut Vec<QueryParameter>,
) -> Result<String> {
    let (field, negated) = match key.strip_prefix('!') {
        Some(field) => (field, true),
        None => (key, false),
    };
    let param_key = field.replace('.', "_");

    if let MatchValue::List(items) = value {
        if is_date_range(items) {
            return render_date_range(field, &param_key, items, negated, parameters);
        }
        parameters.push(QueryParameter::new(format!("@{param_key}"), value.to_json()));
        return Ok(format!("ARRAY_CONTAINS(@{param_key}, c.{field})"));
    }

    parameters.push(QueryParameter::new(format!("@{param_key}"), value.to_json()));

    if negated {
        return Ok(format!("c.{field} != @{param_key}"));
    }

    if let Some((collection, property)) = field.split_once('.') {
        // Any element of the collection with the property equal to the
        // parameter (exact-match, case-sensitive).
        return Ok(format!(
            "ARRAY_CONTAINS(c.{collection}, {{\"{property}\": @{param_key}}}, true)"
        ));
    }

    Ok(format!("c.{field} = @{param_key}"))
}

/// A two-element list whose first element is date-shaped is a range.
fn is_date_range(items: &[MatchValue]) -> bool {
    match items.first() {
        Some(MatchValue::Date(_)) => true,
        Some(MatchValue::Text(s)) => is_date_time_format(s),
        _ => false,
    }
}

fn render_date_range(
    field: &str,
    param_key: &str,
    items: &[MatchValue],
    negated: bool,
    parameters: &mut Vec<QueryParameter>,
) -> Result<String> {
    parameters.push(QueryParameter::new(
        format!("@from_{param_key}"),
        range_bound(items.first())?,
    ));
    parameters.push(QueryParameter::new(
        format!("@to_{param_key}"),
        range_bound(items.get(1))?,
    ));

    if negated {
        // A missing field counts as matching when negated-range filtering
        // is requested.
        Ok(format!(
            "(NOT IS_DEFINED(c.{field}) OR (c.{field} >= @from_{param_key}) AND c.{field} <= @to_{param_key})"
        ))
    } else {
        Ok(format!(
            "c.{field} >= @from_{param_key} AND c.{field} <= @to_{param_key}"
        ))
    }
}

/// Render a range bound, defaulting a missing bound to "now".
///
/// Date-shaped strings are strictly validated but emitted verbatim.
fn range_bound(bound: Option<&MatchValue>) -> Result<Value> {
    match bound {
        None => Ok(Value::String(to_iso_utc(Utc::now()))),
        Some(value) if !value.has_content() => Ok(Value::String(to_iso_utc(Utc::now()))),
        Some(MatchValue::Text(s)) => {
            if is_date_time_format(s) {
                to_utc(s, default_zone())?;
            }
            Ok(Value::String(s.clone()))
        }
        Some(value) => Ok(value.to_json()),
    }
}

fn render_order(token: &OrderToken) -> String {
    let property = &token.property;
    let direction = token.direction.as_str();

    if token.collection {
        if token.optional {
            format!(
                "CASE WHEN IS_DEFINED(c.{property}) THEN ARRAY_LENGTH(c.{property}) ELSE 0 END {direction}"
            )
        } else {
            format!("ARRAY_LENGTH(c.{property}) {direction}")
        }
    } else {
        format!("c.{property} {direction}")
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
