// Aggregation Operator
//
// Computes AVG, MIN or MAX over one numeric column of a dataset.

use log::debug;

use crate::common::types::Dataset;
use crate::query::executor::result::{AggregateResult, QueryError, QueryResult};
use crate::query::executor::type_conversion::{is_numeric_column, to_numeric};
use crate::query::parser::ast::{AggregateFunction, AggregateSpec};

/// Running state of an aggregate
#[derive(Debug, Clone)]
struct AggregateValue {
    /// Function being computed
    function: AggregateFunction,
    /// Number of samples seen
    count: usize,
    /// Sum for AVG
    sum: f64,
    /// Min value for MIN
    min: Option<f64>,
    /// Max value for MAX
    max: Option<f64>,
}

impl AggregateValue {
    fn new(function: AggregateFunction) -> Self {
        AggregateValue {
            function,
            count: 0,
            sum: 0.0,
            min: None,
            max: None,
        }
    }

    /// Update the aggregate with a new sample
    fn update(&mut self, value: f64) {
        self.count += 1;
        match self.function {
            AggregateFunction::Avg => self.sum += value,
            AggregateFunction::Min => self.update_min(value),
            AggregateFunction::Max => self.update_max(value),
        }
    }

    fn update_min(&mut self, value: f64) {
        match self.min {
            Some(current) if current <= value => {}
            _ => self.min = Some(value),
        }
    }

    fn update_max(&mut self, value: f64) {
        match self.max {
            Some(current) if current >= value => {}
            _ => self.max = Some(value),
        }
    }

    /// Get the final aggregate value
    fn get_result(&self) -> AggregateResult {
        if self.count == 0 {
            return AggregateResult::Empty;
        }
        let value = match self.function {
            AggregateFunction::Avg => Some(self.sum / self.count as f64),
            AggregateFunction::Min => self.min,
            AggregateFunction::Max => self.max,
        };
        value.map_or(AggregateResult::Empty, AggregateResult::Number)
    }
}

/// Compute the aggregate described by `spec` over `dataset`.
///
/// An empty dataset or missing spec gives `Empty`. A column that is not
/// numeric (judged by its first row, or absent from it) gives `NonNumeric`.
/// Rows missing the column are skipped; a cell that is not a number fails.
pub fn aggregate(dataset: &Dataset, spec: Option<&AggregateSpec>) -> QueryResult<AggregateResult> {
    let Some(spec) = spec else {
        return Ok(AggregateResult::Empty);
    };
    if dataset.is_empty() {
        return Ok(AggregateResult::Empty);
    }

    let numeric = match is_numeric_column(dataset, &spec.column) {
        Ok(numeric) => numeric,
        Err(QueryError::ColumnNotFound(column)) => {
            debug!("Aggregate column '{}' not present in first row", column);
            false
        }
        Err(err) => return Err(err),
    };
    if !numeric {
        return Ok(AggregateResult::NonNumeric);
    }

    let mut state = AggregateValue::new(spec.function);
    for row in dataset.rows() {
        if let Some(cell) = row.get(&spec.column) {
            state.update(to_numeric(&spec.column, cell)?);
        }
    }

    let result = state.get_result();
    debug!("Aggregate {} over {} samples: {:?}", spec, state.count, result);
    Ok(result)
}
