// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn iteration_preserves_insertion_order() {
    let mut fields = MatchFields::new();
    fields.insert("jobTitle", "Consultant");
    fields.insert("type", "internal");
    fields.insert("projects.name", "Microtema");

    let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["jobTitle", "type", "projects.name"]);
}

#[test]
fn replacing_keeps_original_position() {
    let mut fields = MatchFields::new();
    fields.insert("a", "1");
    fields.insert("b", "2");
    fields.insert("a", "3");

    let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(fields.get("a"), Some(&MatchValue::Text("3".to_string())));
    assert_eq!(fields.len(), 2);
}

#[test]
fn get_misses_return_none() {
    let fields = MatchFields::new();
    assert!(fields.get("missing").is_none());
    assert!(fields.is_empty());
}

#[test]
fn from_iterator_collects_in_order() {
    let fields: MatchFields = [("x", "1"), ("y", "2")].into_iter().collect();
    let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["x", "y"]);
}
