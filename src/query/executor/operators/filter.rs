// Filter Operator Implementation
//
// This module implements the filter operator for filtering rows based on a
// single column comparison.

use log::{debug, trace};

use crate::common::types::{Dataset, Row};
use crate::query::executor::result::{QueryError, QueryResult};
use crate::query::executor::type_conversion::{is_numeric_column, to_numeric};
use crate::query::parser::ast::FilterSpec;

/// How cells of the filter column are compared with the literal
#[derive(Debug, Clone, PartialEq)]
enum ComparisonMode {
    /// Literal already parsed as a number
    Numeric(f64),
    Text,
}

/// Filter operator that keeps rows satisfying a FilterSpec
#[derive(Debug)]
pub struct FilterOperator<'a> {
    spec: &'a FilterSpec,
    mode: ComparisonMode,
}

impl<'a> FilterOperator<'a> {
    /// Create a filter for `dataset`, deciding once whether the comparison is numeric
    pub fn new(spec: &'a FilterSpec, dataset: &Dataset) -> QueryResult<Self> {
        let numeric = match is_numeric_column(dataset, &spec.column) {
            Ok(numeric) => numeric,
            // Rows without the column are skipped anyway
            Err(QueryError::ColumnNotFound(column)) => {
                debug!("Filter column '{}' not present in first row", column);
                false
            }
            Err(err) => return Err(err),
        };

        let mode = if numeric {
            ComparisonMode::Numeric(to_numeric(&spec.column, &spec.literal)?)
        } else {
            ComparisonMode::Text
        };
        debug!("Filter {} uses {:?} comparison", spec, mode);

        Ok(FilterOperator { spec, mode })
    }

    /// Whether the operator compares numerically
    pub fn is_numeric(&self) -> bool {
        matches!(self.mode, ComparisonMode::Numeric(_))
    }

    /// Evaluate the predicate on a row. Rows missing the column never match.
    pub fn evaluate_predicate(&self, row: &Row) -> QueryResult<bool> {
        let Some(cell) = row.get(&self.spec.column) else {
            trace!("Skipping row without column '{}'", self.spec.column);
            return Ok(false);
        };

        match &self.mode {
            ComparisonMode::Numeric(literal) => {
                let value = to_numeric(&self.spec.column, cell)?;
                Ok(self.spec.operator.matches(&value, literal))
            }
            ComparisonMode::Text => Ok(self.spec.operator.matches(cell, self.spec.literal.as_str())),
        }
    }
}

/// Keep the rows of `dataset` that satisfy `spec`, preserving their order.
///
/// Without a spec the dataset is returned as-is. In numeric mode a cell that
/// does not parse fails the whole filter.
pub fn apply_filter(dataset: Dataset, spec: Option<&FilterSpec>) -> QueryResult<Dataset> {
    let Some(spec) = spec else {
        return Ok(dataset);
    };

    let operator = FilterOperator::new(spec, &dataset)?;
    let input_count = dataset.row_count();
    let (columns, rows) = dataset.into_parts();

    let mut kept = Vec::new();
    for row in rows {
        if operator.evaluate_predicate(&row)? {
            kept.push(row);
        }
    }

    debug!("Filter {} kept {} of {} rows", spec, kept.len(), input_count);
    Ok(Dataset::from_rows(columns, kept))
}
