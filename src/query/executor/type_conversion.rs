// Type Conversion Utilities for the Execution Engine
//
// Values are stored as text; this module decides when a column is treated as
// numeric and converts cells accordingly.

use crate::common::types::Dataset;
use crate::query::executor::result::{QueryError, QueryResult};

/// Parse a raw cell as a number, ignoring surrounding whitespace
pub fn parse_numeric(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

/// Parse a cell of `column` that must be numeric
pub fn to_numeric(column: &str, raw: &str) -> QueryResult<f64> {
    parse_numeric(raw).ok_or_else(|| QueryError::MalformedNumericValue {
        column: column.to_string(),
        value: raw.to_string(),
    })
}

/// Decide whether `column` holds numbers.
///
/// Only the first row is inspected, and that answer holds for the whole
/// column even if later rows contain text. An empty dataset is never numeric.
pub fn is_numeric_column(dataset: &Dataset, column: &str) -> QueryResult<bool> {
    let Some(first) = dataset.first_row() else {
        return Ok(false);
    };

    let value = first
        .get(column)
        .ok_or_else(|| QueryError::ColumnNotFound(column.to_string()))?;

    Ok(parse_numeric(value).is_some())
}
