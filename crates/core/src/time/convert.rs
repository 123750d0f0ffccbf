// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date/zone conversion primitives and date-shape classifiers.
//!
//! A "zone-local" value is a timestamp interpreted relative to a specific
//! IANA zone before being converted to UTC for storage and comparison.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

// Pre-compiled shape classifiers. Hard-coded patterns, verified at test time.
static ISO8601_RE: LazyLock<Regex> = LazyLock::new(
    || match Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d+)?Z$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    },
);
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^\d{4}-\d{2}-\d{2}$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Whether a value is shaped like a full ISO-8601 UTC timestamp
/// (`2025-01-17T22:18:54.245Z`).
pub fn is_iso8601(value: &str) -> bool {
    ISO8601_RE.is_match(value)
}

/// Whether a value is shaped like a bare calendar date (`2025-01-17`).
pub fn is_date_format(value: &str) -> bool {
    DATE_RE.is_match(value)
}

/// Whether a value matches either date shape.
///
/// This is the classifier the query builder uses to decide whether a field
/// should be treated as date-ranged. Shape only - a matching value may still
/// fail strict parsing.
pub fn is_date_time_format(value: &str) -> bool {
    is_iso8601(value) || is_date_format(value)
}

/// Convert a local datetime string to a UTC instant.
///
/// Accepts RFC 3339 (an explicit offset wins over the zone), a naive ISO or
/// SQL-style timestamp, or a bare `YYYY-MM-DD` date; naive values are
/// interpreted in `zone`.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if no format yields a valid calendar
/// instant (including zone-local times skipped by a DST transition).
pub fn to_utc(local: &str, zone: Tz) -> Result<DateTime<Utc>> {
    let local = local.trim();

    // Explicit offset: the value already names its instant.
    if let Ok(dt) = DateTime::parse_from_rfc3339(local) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(naive) = parse_naive(local) {
        return from_local(naive, zone, local);
    }

    Err(Error::InvalidDate {
        value: local.to_string(),
    })
}

/// Convert a UTC datetime string to the equivalent zone-local instant.
///
/// Naive input is interpreted as UTC. Inverse companion to [`to_utc`].
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] if the value does not parse.
pub fn to_local_time(utc: &str, zone: Tz) -> Result<DateTime<Tz>> {
    let utc = utc.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(utc) {
        return Ok(dt.with_timezone(&zone));
    }

    if let Some(naive) = parse_naive(utc) {
        return Ok(Utc.from_utc_datetime(&naive).with_timezone(&zone));
    }

    Err(Error::InvalidDate {
        value: utc.to_string(),
    })
}

/// Render a UTC instant in the canonical millisecond ISO form
/// (`2025-01-01T23:00:00.000Z`).
pub fn to_iso_utc(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Try the supported naive timestamp shapes, most specific first.
fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    const FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ];

    for fmt in FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(naive);
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Anchor a naive local timestamp in `zone`.
///
/// Ambiguous wall-clock times (DST fall-back) take the earlier offset;
/// nonexistent times (spring-forward gap) are invalid.
fn from_local(naive: NaiveDateTime, zone: Tz, original: &str) -> Result<DateTime<Utc>> {
    zone.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| Error::InvalidDate {
            value: original.to_string(),
        })
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
