//! Column-level matching: dedup, match once per distinct value, broadcast.
//!
//! Tabular inputs are full of repeats — the same handful of region spellings
//! across thousands of rows. These adapters reduce the work from
//! O(rows × catalog) to O(distinct values × catalog) by caching one match
//! result per distinct cell text and broadcasting it back across the column.
//!
//! Cells are `serde_json::Value`s so that nulls, numbers, and other
//! non-string garbage flow through as absent matches instead of errors.

use std::collections::HashMap;

use serde_json::Value as JsonValue;

use crate::config::MatchOptions;
use crate::matcher::{BestMatch, RegionMatcher};
use crate::normalize::cell_text;

/// Per-row match output for one column.
///
/// `names` and `scores` are parallel to the input column. An absent match
/// keeps `None` in `names` but renders as `0.0` in `scores`, so the score
/// column is always numeric.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedColumn {
    pub names: Vec<Option<String>>,
    pub scores: Vec<f64>,
}

/// One attached attribute column, parallel to the input column.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedColumn {
    /// The etalon field this column carries (`"name_eng"`, `"okato"`, …).
    pub field: String,
    /// Attribute value per row; `None` for unmatched rows and absent fields.
    pub values: Vec<Option<JsonValue>>,
}

impl RegionMatcher {
    /// Matches every cell of a column, invoking the engine once per distinct
    /// cell text and broadcasting the result to every row sharing it.
    pub fn match_column(&self, values: &[JsonValue], options: &MatchOptions) -> MatchedColumn {
        let mut cache: HashMap<&str, Option<BestMatch>> = HashMap::new();
        let mut names = Vec::with_capacity(values.len());
        let mut scores = Vec::with_capacity(values.len());

        for value in values {
            let text = cell_text(value);
            let result = cache
                .entry(text)
                .or_insert_with(|| self.find_best_match(text, options));
            names.push(result.as_ref().map(|m| m.name.clone()));
            scores.push(result.as_ref().map_or(0.0, |m| m.score));
        }

        MatchedColumn { names, scores }
    }

    /// Attaches several etalon attribute columns in one pass.
    ///
    /// Fuzzy matching runs once per distinct cell text no matter how many
    /// fields are requested. Rows without a confident match get `None` in
    /// every attached column, as do matched rows whose record lacks a field.
    pub fn attach_fields(
        &self,
        values: &[JsonValue],
        fields: &[&str],
        options: &MatchOptions,
    ) -> Vec<AttachedColumn> {
        let mut cache: HashMap<&str, Option<String>> = HashMap::new();
        let mut columns: Vec<AttachedColumn> = fields
            .iter()
            .map(|field| AttachedColumn {
                field: field.to_string(),
                values: Vec::with_capacity(values.len()),
            })
            .collect();

        for value in values {
            let text = cell_text(value);
            let matched = cache
                .entry(text)
                .or_insert_with(|| self.find_best_match(text, options).map(|m| m.name))
                .clone();
            let record = matched
                .as_deref()
                .and_then(|name| self.catalog().record_by_name(name));

            for column in &mut columns {
                let cell = record.and_then(|r| r.attributes.get(&column.field).cloned());
                column.values.push(cell);
            }
        }

        columns
    }

    /// Single-field convenience wrapper around
    /// [`attach_fields`](Self::attach_fields).
    pub fn attach_field(
        &self,
        values: &[JsonValue],
        field: &str,
        options: &MatchOptions,
    ) -> AttachedColumn {
        self.attach_fields(values, &[field], options)
            .into_iter()
            .next()
            .unwrap_or_else(|| AttachedColumn {
                field: field.to_string(),
                values: vec![None; values.len()],
            })
    }
}
