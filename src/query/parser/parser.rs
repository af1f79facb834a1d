// Expression Parser Implementation
//
// Turns the raw `--where` and `--aggregate` strings into FilterSpec and
// AggregateSpec values. No I/O happens here.

use std::fmt;

use log::{debug, warn};

use crate::query::parser::ast::{AggregateFunction, AggregateSpec, CompareOp, FilterSpec};

/// Expression parsing errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Filter expression contains none of `<`, `>`, `=`
    InvalidFilterSyntax(String),
    /// Aggregate expression is not of the form `function=column`
    InvalidAggregateSyntax(String),
    /// Aggregate function is not one of avg, min, max
    InvalidAggregateFunction(String),
    InvalidOperator(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::InvalidFilterSyntax(expr) => write!(
                f,
                "Invalid filter '{}': use column<value, column>value or column=value",
                expr
            ),
            ParseError::InvalidAggregateSyntax(expr) => write!(
                f,
                "Invalid aggregate '{}': use function=column, for example avg=rating",
                expr
            ),
            ParseError::InvalidAggregateFunction(name) => write!(
                f,
                "Invalid aggregate function '{}': use avg, min or max",
                name
            ),
            ParseError::InvalidOperator(op) => write!(f, "Invalid operator: {}", op),
        }
    }
}

impl std::error::Error for ParseError {}

/// Result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse a filter expression such as `price<1000`.
///
/// Operators are searched in the order `<`, `>`, `=`, and the expression is
/// split at the first occurrence of the first one found. A missing or blank
/// expression means no filtering.
pub fn parse_where(expr: Option<&str>) -> ParseResult<Option<FilterSpec>> {
    let Some(expr) = expr.filter(|e| !e.trim().is_empty()) else {
        return Ok(None);
    };

    for op in CompareOp::SCAN_ORDER {
        if let Some((column, literal)) = expr.split_once(op.symbol()) {
            let column = column.trim();
            let literal = literal.trim();
            if column.is_empty() || literal.is_empty() {
                warn!("Filter '{}' has an empty side, ignoring it", expr);
                return Ok(None);
            }
            let spec = FilterSpec::new(column, op, literal);
            debug!("Parsed filter: {}", spec);
            return Ok(Some(spec));
        }
    }

    Err(ParseError::InvalidFilterSyntax(expr.to_string()))
}

/// Parse an aggregate expression such as `avg=rating`.
///
/// The function name must match exactly; only the column is trimmed.
pub fn parse_aggregate(expr: Option<&str>) -> ParseResult<Option<AggregateSpec>> {
    let Some(expr) = expr.filter(|e| !e.trim().is_empty()) else {
        return Ok(None);
    };

    let parts: Vec<&str> = expr.split('=').collect();
    let [function, column] = parts.as_slice() else {
        return Err(ParseError::InvalidAggregateSyntax(expr.to_string()));
    };

    let function = AggregateFunction::from_name(function)
        .ok_or_else(|| ParseError::InvalidAggregateFunction(function.to_string()))?;

    let column = column.trim();
    if column.is_empty() {
        return Err(ParseError::InvalidAggregateSyntax(expr.to_string()));
    }

    let spec = AggregateSpec::new(function, column);
    debug!("Parsed aggregate: {}", spec);
    Ok(Some(spec))
}
