// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Time-range resolution and zone-aware conversion.
//!
//! Two pieces live here:
//!
//! - [`convert`] - the date/zone conversion primitives ([`to_utc`],
//!   [`to_local_time`]) and the shape classifiers used to decide whether a
//!   raw string should be treated as a date at all.
//! - [`range`] - the textual time-range grammar (`today`, `last quarter`,
//!   `2025-01-02,2025-03-02`, ...) resolved into UTC boundary pairs.

mod convert;
mod range;

pub use convert::{is_date_format, is_date_time_format, is_iso8601, to_iso_utc, to_local_time, to_utc};
pub use range::{resolve, resolve_in};
