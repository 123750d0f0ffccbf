// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono_tz::Europe::Berlin;
use yare::parameterized;

// ─────────────────────────────────────────────────────────────────────────────
// Shape classifiers
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    full_iso = { "2025-01-17T22:18:54Z", true },
    full_iso_millis = { "2025-01-17T22:18:54.245Z", true },
    bare_date = { "2025-01-17", false },
    no_zone_suffix = { "2025-01-17T22:18:54", false },
    offset_instead_of_z = { "2025-01-17T22:18:54+01:00", false },
    plain_number = { "33", false },
    empty = { "", false },
)]
fn iso8601_shape(value: &str, expected: bool) {
    assert_eq!(is_iso8601(value), expected);
}

#[parameterized(
    bare_date = { "2025-01-17", true },
    full_iso = { "2025-01-17T22:18:54Z", false },
    short_year = { "25-01-17", false },
    trailing_text = { "2025-01-17x", false },
)]
fn date_shape(value: &str, expected: bool) {
    assert_eq!(is_date_format(value), expected);
}

#[test]
fn date_time_shape_accepts_either() {
    assert!(is_date_time_format("2025-01-17"));
    assert!(is_date_time_format("2025-01-17T22:18:54.245Z"));
    assert!(!is_date_time_format("not a date"));
    assert!(!is_date_time_format("33"));
}

// ─────────────────────────────────────────────────────────────────────────────
// to_utc
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn to_utc_bare_date_is_zone_local_midnight() {
    // Berlin is UTC+1 in January.
    let dt = to_utc("2025-01-02", Berlin).unwrap();
    assert_eq!(to_iso_utc(dt), "2025-01-01T23:00:00.000Z");
}

#[test]
fn to_utc_bare_date_in_summer_uses_dst_offset() {
    // Berlin is UTC+2 in July.
    let dt = to_utc("2025-07-02", Berlin).unwrap();
    assert_eq!(to_iso_utc(dt), "2025-07-01T22:00:00.000Z");
}

#[test]
fn to_utc_naive_timestamp_interpreted_in_zone() {
    let dt = to_utc("2025-01-02T10:30:00", Berlin).unwrap();
    assert_eq!(to_iso_utc(dt), "2025-01-02T09:30:00.000Z");
}

#[test]
fn to_utc_sql_style_timestamp() {
    let dt = to_utc("2025-01-02 10:30:00", Berlin).unwrap();
    assert_eq!(to_iso_utc(dt), "2025-01-02T09:30:00.000Z");
}

#[test]
fn to_utc_explicit_offset_wins_over_zone() {
    let dt = to_utc("2025-01-02T10:30:00+05:00", Berlin).unwrap();
    assert_eq!(to_iso_utc(dt), "2025-01-02T05:30:00.000Z");
}

#[test]
fn to_utc_z_suffix_is_utc() {
    let dt = to_utc("2025-01-17T22:18:54.245Z", Berlin).unwrap();
    assert_eq!(to_iso_utc(dt), "2025-01-17T22:18:54.245Z");
}

#[parameterized(
    nonsense = { "not a date" },
    bad_month = { "2025-13-02" },
    bad_day = { "2025-02-30" },
    empty = { "" },
)]
fn to_utc_rejects_invalid(value: &str) {
    let err = to_utc(value, Berlin).unwrap_err();
    assert!(matches!(err, crate::error::Error::InvalidDate { .. }));
}

// ─────────────────────────────────────────────────────────────────────────────
// to_local_time
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn to_local_time_inverts_to_utc() {
    let local = to_local_time("2025-01-01T23:00:00.000Z", Berlin).unwrap();
    assert_eq!(local.to_rfc3339(), "2025-01-02T00:00:00+01:00");
}

#[test]
fn to_local_time_naive_input_is_utc() {
    let local = to_local_time("2025-01-01T23:00:00", Berlin).unwrap();
    assert_eq!(local.to_rfc3339(), "2025-01-02T00:00:00+01:00");
}

#[test]
fn to_local_time_rejects_invalid() {
    let err = to_local_time("garbage", Berlin).unwrap_err();
    assert!(matches!(err, crate::error::Error::InvalidDate { .. }));
}

// ─────────────────────────────────────────────────────────────────────────────
// Canonical rendering
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn to_iso_utc_always_renders_millis() {
    let dt = to_utc("2025-01-02T10:00:00Z", Berlin).unwrap();
    assert_eq!(to_iso_utc(dt), "2025-01-02T10:00:00.000Z");
}
