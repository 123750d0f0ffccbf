// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query-pair façade.
//!
//! Convenience entry point for callers holding raw query-string pairs:
//! extracts paging hints, the sort token, repeated `p` filter tokens and the
//! free-text search value in one step. The continuation token is an opaque
//! cursor issued by the storage collaborator; it is carried, never
//! interpreted.

use super::fields::MatchFields;
use super::parser::parse_properties;

const DEFAULT_ROWS_PER_PAGE: u32 = 25;

/// Paging hints extracted from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pageable {
    /// 1-based page index, clamped to at least 1.
    pub page_index: u32,
    pub rows_per_page: u32,
    /// Opaque storage cursor, passed through unchanged.
    pub continuation_token: Option<String>,
}

/// A fully parsed filter/search/sort request.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    pub pageable: Pageable,
    pub match_fields: MatchFields,
    pub order_by: String,
    pub search_value: String,
}

/// Parse raw query-string pairs into a [`ParsedQuery`].
///
/// Recognized keys: `page`, `limit`, `sort`, `q`, and repeated `p` filter
/// tokens. Unknown keys are ignored; missing keys take defaults (page 1,
/// 25 rows). The search value is lowercased for case-insensitive matching.
pub fn parse_query(pairs: &[(String, String)], continuation: Option<&str>) -> ParsedQuery {
    let page_index = first(pairs, "page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(1)
        .max(1);
    let rows_per_page = first(pairs, "limit")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(DEFAULT_ROWS_PER_PAGE);

    let order_by = first(pairs, "sort").unwrap_or_default().to_string();
    let search_value = first(pairs, "q").unwrap_or_default().to_lowercase();

    let tokens: Vec<&str> = pairs
        .iter()
        .filter(|(k, _)| k == "p")
        .map(|(_, v)| v.as_str())
        .collect();

    ParsedQuery {
        pageable: Pageable {
            page_index,
            rows_per_page,
            continuation_token: continuation.map(str::to_string),
        },
        match_fields: parse_properties(&tokens),
        order_by,
        search_value,
    }
}

fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
