// Query Result Implementation
//
// This module defines the error and result types for query execution, and
// renders a finished query as text.

use std::fmt;

use thiserror::Error;

use crate::common::types::Dataset;
use crate::query::executor::type_conversion::is_numeric_column;
use crate::query::parser::ast::AggregateSpec;
use crate::query::parser::parser::ParseError;
use crate::storage::csv_file::CsvError;

/// Message shown in place of a number when the aggregate column is not numeric
pub const NON_NUMERIC_MESSAGE: &str = "Aggregation is only possible for numeric columns.";

/// Fractional digits printed for every aggregate value
pub const AGGREGATE_PRECISION: usize = 6;

/// Represents query execution error
#[derive(Error, Debug)]
pub enum QueryError {
    /// Input file is missing or unreadable
    #[error("File not found or unreadable: {0}")]
    FileNotFound(String),
    /// The CSV reader rejected the file contents
    #[error("CSV read error: {0}")]
    CsvRead(String),
    /// Malformed `--where` or `--aggregate` expression
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Column not found
    #[error("Column not found: {0}")]
    ColumnNotFound(String),
    /// A value in a numeric column (or the filter literal) is not a number
    #[error("Malformed numeric value '{value}' in column '{column}'")]
    MalformedNumericValue { column: String, value: String },
}

impl From<CsvError> for QueryError {
    fn from(err: CsvError) -> Self {
        match err {
            CsvError::Open { path, source } => {
                QueryError::FileNotFound(format!("{} ({})", path.display(), source))
            }
            other => QueryError::CsvRead(other.to_string()),
        }
    }
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Outcome of an aggregate computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggregateResult {
    /// The computed value
    Number(f64),
    /// The target column is not numeric
    NonNumeric,
    /// Nothing to aggregate
    Empty,
}

impl AggregateResult {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AggregateResult::Number(v) => Some(*v),
            _ => None,
        }
    }
}

/// An aggregate request together with its result
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateOutcome {
    pub spec: AggregateSpec,
    pub result: AggregateResult,
}

impl AggregateOutcome {
    /// The line printed after the table, if any
    pub fn render_line(&self) -> Option<String> {
        match self.result {
            AggregateResult::Number(value) => Some(format!(
                "{} {}: {:.*}",
                self.spec.function.label(),
                self.spec.column,
                AGGREGATE_PRECISION,
                value
            )),
            AggregateResult::NonNumeric => Some(NON_NUMERIC_MESSAGE.to_string()),
            AggregateResult::Empty => None,
        }
    }
}

/// Everything a query produced: the filtered rows and the optional aggregate
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutput {
    dataset: Dataset,
    aggregate: Option<AggregateOutcome>,
}

impl QueryOutput {
    pub fn new(dataset: Dataset, aggregate: Option<AggregateOutcome>) -> Self {
        QueryOutput { dataset, aggregate }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn aggregate(&self) -> Option<&AggregateOutcome> {
        self.aggregate.as_ref()
    }

    pub fn row_count(&self) -> usize {
        self.dataset.row_count()
    }

    /// Format the rows as a pipe table. Empty when no rows matched.
    ///
    /// Numeric columns are right-aligned, text columns left-aligned.
    pub fn to_string_table(&self) -> String {
        let columns = self.dataset.columns();
        if self.dataset.is_empty() || columns.is_empty() {
            return String::new();
        }

        let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count().max(3)).collect();
        for row in self.dataset.rows() {
            for (i, col) in columns.iter().enumerate() {
                let len = row.get(col).map_or(0, |v| v.chars().count());
                widths[i] = widths[i].max(len);
            }
        }
        let right_aligned: Vec<bool> = columns
            .iter()
            .map(|c| is_numeric_column(&self.dataset, c).unwrap_or(false))
            .collect();

        let mut result = String::new();

        // Headers
        result.push('|');
        for (i, col) in columns.iter().enumerate() {
            result.push_str(&pad_cell(col, widths[i], right_aligned[i]));
        }
        result.push('\n');

        // Alignment row
        result.push('|');
        for (i, &width) in widths.iter().enumerate() {
            if right_aligned[i] {
                result.push_str(&format!("{}:|", "-".repeat(width + 1)));
            } else {
                result.push_str(&format!(":{}|", "-".repeat(width + 1)));
            }
        }
        result.push('\n');

        for row in self.dataset.rows() {
            result.push('|');
            for (i, col) in columns.iter().enumerate() {
                let value = row.get(col).unwrap_or("");
                result.push_str(&pad_cell(value, widths[i], right_aligned[i]));
            }
            result.push('\n');
        }

        result
    }

    /// The aggregate line, if an aggregate was requested and produced something
    pub fn aggregate_line(&self) -> Option<String> {
        self.aggregate.as_ref().and_then(AggregateOutcome::render_line)
    }
}

impl fmt::Display for QueryOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_table())?;
        if let Some(line) = self.aggregate_line() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn pad_cell(value: &str, width: usize, right_aligned: bool) -> String {
    if right_aligned {
        format!(" {:>width$} |", value, width = width)
    } else {
        format!(" {:<width$} |", value, width = width)
    }
}
