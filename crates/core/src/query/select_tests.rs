// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn bare_instance_selects_all() {
    assert_eq!(instance().build(), "SELECT * FROM c");
}

#[test]
fn columns_are_aliased() {
    let query = instance().columns(&["id", "mail"]).build();
    assert_eq!(query, "SELECT c.id, c.mail FROM c");
}

#[test]
fn distinct_and_top_render_in_order() {
    let query = instance().distinct().top(25).columns(&["mail"]).build();
    assert_eq!(query, "SELECT DISTINCT TOP 25 c.mail FROM c");
}

#[test]
fn where_body_is_combined_verbatim() {
    let query = instance()
        .filter("c.markAsDeleted = false AND c.type = 'internal'")
        .build();
    assert_eq!(
        query,
        "SELECT * FROM c WHERE c.markAsDeleted = false AND c.type = 'internal'"
    );
}

#[test]
fn empty_where_body_is_skipped() {
    assert_eq!(instance().filter("").build(), "SELECT * FROM c");
}

#[test]
fn sort_with_direction() {
    let query = instance().sort(&["mail", "id"]).asc().build();
    assert_eq!(query, "SELECT * FROM c ORDER BY c.mail ASC, c.id ASC");
}

#[test]
fn sort_without_direction_renders_bare_properties() {
    let query = instance().sort(&["mail"]).build();
    assert_eq!(query, "SELECT * FROM c ORDER BY c.mail");
}

#[test]
fn empty_sort_copies_column_list() {
    let query = instance().columns(&["id", "mail"]).sort(&[]).desc().build();
    assert_eq!(
        query,
        "SELECT c.id, c.mail FROM c ORDER BY c.id DESC, c.mail DESC"
    );
}

#[test]
fn full_composition() {
    let query = instance()
        .distinct()
        .top(10)
        .columns(&["id", "mail"])
        .filter("c.type = 'internal'")
        .sort(&["mail"])
        .asc()
        .build();
    assert_eq!(
        query,
        "SELECT DISTINCT TOP 10 c.id, c.mail FROM c WHERE c.type = 'internal' ORDER BY c.mail ASC"
    );
}
