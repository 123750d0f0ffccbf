// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fluent SELECT escape hatch.
//!
//! For callers needing full control instead of the field-filter DSL:
//! explicit columns, `DISTINCT`, a `TOP n` row cap, a pre-formed WHERE body
//! combined verbatim, and an ordering clause. Pure template substitution -
//! no semantic validation.

use crate::order::Direction;

/// Start a fluent SELECT build.
pub fn instance() -> SelectBuilder {
    SelectBuilder::default()
}

#[derive(Debug, Clone, Default)]
pub struct SelectBuilder {
    distinct: bool,
    top: Option<u32>,
    columns: Vec<String>,
    where_body: Option<String>,
    sort_properties: Vec<String>,
    sort_direction: Option<Direction>,
}

impl SelectBuilder {
    /// Add columns to the projection. No columns means `*`.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns.extend(columns.iter().map(|c| c.to_string()));
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Cap the result set at `n` rows.
    pub fn top(mut self, n: u32) -> Self {
        self.top = Some(n);
        self
    }

    /// Set a pre-formed WHERE body, combined verbatim.
    pub fn filter(mut self, where_body: &str) -> Self {
        self.where_body = Some(where_body.to_string());
        self
    }

    /// Add sort properties. With no arguments, sorts by the column list.
    pub fn sort(mut self, columns: &[&str]) -> Self {
        if columns.is_empty() {
            self.sort_properties.extend(self.columns.iter().cloned());
        } else {
            self.sort_properties
                .extend(columns.iter().map(|c| c.to_string()));
        }
        self
    }

    pub fn asc(mut self) -> Self {
        self.sort_direction = Some(Direction::Asc);
        self
    }

    pub fn desc(mut self) -> Self {
        self.sort_direction = Some(Direction::Desc);
        self
    }

    /// Render the query string.
    pub fn build(self) -> String {
        let mut parts: Vec<String> = vec!["SELECT".to_string()];

        if self.distinct {
            parts.push("DISTINCT".to_string());
        }
        if let Some(n) = self.top {
            parts.push(format!("TOP {n}"));
        }

        if self.columns.is_empty() {
            parts.push("*".to_string());
        } else {
            let projected: Vec<String> =
                self.columns.iter().map(|c| format!("c.{c}")).collect();
            parts.push(projected.join(", "));
        }

        parts.push("FROM c".to_string());

        if let Some(body) = self.where_body.as_deref().filter(|b| !b.is_empty()) {
            parts.push(format!("WHERE {body}"));
        }

        if !self.sort_properties.is_empty() {
            let rendered: Vec<String> = self
                .sort_properties
                .iter()
                .map(|p| match self.sort_direction {
                    Some(direction) => format!("c.{p} {}", direction.as_str()),
                    None => format!("c.{p}"),
                })
                .collect();
            parts.push(format!("ORDER BY {}", rendered.join(", ")));
        }

        parts.join(" ")
    }
}

#[cfg(test)]
#[path = "select_tests.rs"]
mod tests;
