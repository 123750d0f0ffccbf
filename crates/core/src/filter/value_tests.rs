// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;

// ─────────────────────────────────────────────────────────────────────────────
// Has-content rule
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn absent_has_no_content() {
    assert!(!MatchValue::Absent.has_content());
}

#[test]
fn empty_string_has_no_content() {
    assert!(!MatchValue::Text(String::new()).has_content());
    assert!(MatchValue::Text("x".to_string()).has_content());
}

#[test]
fn false_and_zero_have_content() {
    assert!(MatchValue::Bool(false).has_content());
    assert!(MatchValue::Number(0.0).has_content());
}

#[test]
fn empty_list_has_no_content() {
    assert!(!MatchValue::List(vec![]).has_content());
}

#[test]
fn list_of_empty_entries_has_no_content() {
    let list = MatchValue::List(vec![
        MatchValue::Text(String::new()),
        MatchValue::Absent,
        MatchValue::List(vec![]),
    ]);
    assert!(!list.has_content());
}

#[test]
fn list_with_one_real_entry_has_content() {
    let list = MatchValue::List(vec![
        MatchValue::Text(String::new()),
        MatchValue::Text("real".to_string()),
    ]);
    assert!(list.has_content());
}

// ─────────────────────────────────────────────────────────────────────────────
// Parameter rendering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn scalars_render_as_json() {
    assert_eq!(MatchValue::Bool(false).to_json(), json!(false));
    assert_eq!(MatchValue::Number(30.0).to_json(), json!(30.0));
    assert_eq!(
        MatchValue::Text("info@mail.com".to_string()).to_json(),
        json!("info@mail.com")
    );
}

#[test]
fn dates_render_canonical_iso() {
    let dt = "2025-01-17T22:18:54.245Z"
        .parse::<chrono::DateTime<chrono::Utc>>()
        .unwrap();
    assert_eq!(
        MatchValue::Date(dt).to_json(),
        json!("2025-01-17T22:18:54.245Z")
    );
}

#[test]
fn lists_render_as_arrays() {
    let list = MatchValue::List(vec![
        MatchValue::Text("a".to_string()),
        MatchValue::Text("b".to_string()),
    ]);
    assert_eq!(list.to_json(), json!(["a", "b"]));
}

#[test]
fn nested_json_passes_through() {
    let value = MatchValue::Json(json!({"name": "Microtema"}));
    assert_eq!(value.to_json(), json!({"name": "Microtema"}));
}

#[test]
fn from_impls_build_expected_variants() {
    assert_eq!(MatchValue::from("x"), MatchValue::Text("x".to_string()));
    assert_eq!(MatchValue::from(true), MatchValue::Bool(true));
    assert_eq!(MatchValue::from(3.5), MatchValue::Number(3.5));
    assert_eq!(
        MatchValue::from(vec!["a", "b"]),
        MatchValue::List(vec![
            MatchValue::Text("a".to_string()),
            MatchValue::Text("b".to_string()),
        ])
    );
}
