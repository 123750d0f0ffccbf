// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Order specification parser.
//!
//! A compact order-by token encodes direction, collection and optional
//! markers around a property name:
//!
//! ```text
//! firstName      # c.firstName DESC (descending is the default)
//! !firstName     # ascending
//! [projects]     # collection: ordered by element count
//! ![projects]?   # ascending, by element count, tolerating absent fields
//! ```
//!
//! `parse_order_properties` handles the comma-joined form
//! (`"![projects]?,!count?"`), each segment parsed independently.

/// Sort direction. Absence of a leading `!` means descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// One parsed ordering descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderToken {
    pub property: String,
    pub direction: Direction,
    /// Order by element count rather than value.
    pub collection: bool,
    /// Ordering must tolerate the field being absent on some documents.
    pub optional: bool,
}

/// Parse a single order token.
///
/// Markers are stripped in sequence: leading `!` (ascending), trailing `?`
/// (optional), surrounding `[` `]` (collection); the remainder is the
/// property name. Blank input returns a degenerate descriptor carrying the
/// original token as property - callers use it as a no-op sentinel.
pub fn parse_order_property(token: &str) -> OrderToken {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return OrderToken {
            property: token.to_string(),
            direction: Direction::Desc,
            collection: false,
            optional: false,
        };
    }

    let (rest, direction) = match trimmed.strip_prefix('!') {
        Some(rest) => (rest, Direction::Asc),
        None => (trimmed, Direction::Desc),
    };

    let (rest, optional) = match rest.strip_suffix('?') {
        Some(rest) => (rest, true),
        None => (rest, false),
    };

    let (rest, collection) = match rest
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
    {
        Some(inner) => (inner, true),
        None => (rest, false),
    };

    OrderToken {
        property: rest.to_string(),
        direction,
        collection,
        optional,
    }
}

/// Parse a comma-joined order token list.
///
/// Blank input yields an empty sequence; blank segments are skipped. Each
/// segment keeps its own direction - mixed directions are preserved.
pub fn parse_order_properties(csv: &str) -> Vec<OrderToken> {
    csv.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_order_property)
        .collect()
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
