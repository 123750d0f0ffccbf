// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the dq-core library.
///
/// Most malformed input is handled by total, defined fallback behavior
/// (empty input yields empty output); only values that look date-shaped but
/// fail strict parsing are fatal to the call.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid date: '{value}' is not a valid calendar instant")]
    InvalidDate { value: String },

    #[error("unsupported range keyword: '{keyword}'")]
    UnsupportedRangeKeyword { keyword: String },

    #[error("unknown time zone: '{zone}'\n  hint: use an IANA zone name like 'Europe/Berlin'")]
    UnknownZone { zone: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for dq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
