// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter tokens and their typed values.
//!
//! Raw `name:value` filter tokens (typically from query-string repetition)
//! are parsed into an insertion-ordered mapping of field path to inferred
//! value. Inference is an ordered chain of fallible parsers, first success
//! wins:
//!
//! 1. JSON object or array
//! 2. `true` / `false`
//! 3. Number
//! 4. Date/time
//! 5. The original string
//!
//! The order is a contract: `"33"` must become the number 33, not a date.
//!
//! # Examples
//!
//! ```text
//! p=jobTitle:Consultant,type:internal
//! p=age:30
//! p=updatedDate:2025-01-17T22:18:54.245Z
//! p=markAsDeleted:false
//! ```

mod fields;
mod parser;
mod request;
mod value;

pub use fields::MatchFields;
pub use parser::{infer_value, parse_properties};
pub use request::{parse_query, Pageable, ParsedQuery};
pub use value::MatchValue;
