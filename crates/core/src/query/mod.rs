// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Query construction for the document store.
//!
//! [`build`] compiles a [`FilterSpec`] - free-text search, typed match
//! fields and an order token - into the SQL-like dialect the store accepts
//! over JSON documents aliased as `c`, together with its parameter list.
//!
//! [`SelectBuilder`] is the lower-level escape hatch for callers needing an
//! explicit column list, `DISTINCT`, a row cap or a pre-formed WHERE body.

mod builder;
mod select;

pub use builder::{build, BuiltQuery, FilterSpec, QueryParameter};
pub use select::{instance, SelectBuilder};
