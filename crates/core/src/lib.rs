// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dq-core - query DSL compiler for a schemaless document store.
//!
//! Translates a client-supplied filter/search/sort specification into a
//! parameterized query in the SQL-like dialect the store accepts over JSON
//! documents aliased as `c`, and resolves a compact textual time-range
//! grammar into timezone-correct UTC boundaries.
//!
//! # Main Components
//!
//! - [`filter`] - raw `name:value` token parsing with type inference
//! - [`order`] - compact order-by token parsing (`"![projects]?,!count?"`)
//! - [`time`] - time-range keywords (`today`, `last quarter`, ...) and
//!   zone-aware conversion
//! - [`query`] - the query builder producing [`BuiltQuery`]
//!
//! Everything here is a pure, synchronous, call-scoped transform; executing
//! the built query against the store belongs to the storage collaborator.
//!
//! # Example
//!
//! ```rust,ignore
//! use dq_core::{build, FilterSpec, MatchFields};
//!
//! let mut match_fields = MatchFields::new();
//! match_fields.insert("jobTitle", "Consultant");
//!
//! let built = build(&FilterSpec {
//!     search_value: "foo".to_string(),
//!     search_fields: vec!["firstName".to_string()],
//!     match_fields,
//!     order_by: "!firstName".to_string(),
//! })?;
//! // built.query, built.parameters -> storage collaborator
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod order;
pub mod query;
pub mod time;

pub use config::Config;
pub use error::{Error, Result};
pub use filter::{infer_value, parse_properties, parse_query, MatchFields, MatchValue};
pub use order::{parse_order_properties, parse_order_property, Direction, OrderToken};
pub use query::{build, instance, BuiltQuery, FilterSpec, QueryParameter, SelectBuilder};
pub use time::{resolve, resolve_in, to_local_time, to_utc};
