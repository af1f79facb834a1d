// Query Expression Types
//
// Structured forms of the `--where` and `--aggregate` expressions.

use std::fmt;

use crate::query::parser::parser::{ParseError, ParseResult};

/// Comparison operator of a filter expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    LessThan,
    GreaterThan,
    Equals,
}

impl CompareOp {
    /// Operators in the order a filter expression is scanned for them
    pub const SCAN_ORDER: [CompareOp; 3] = [CompareOp::LessThan, CompareOp::GreaterThan, CompareOp::Equals];

    pub fn symbol(&self) -> char {
        match self {
            CompareOp::LessThan => '<',
            CompareOp::GreaterThan => '>',
            CompareOp::Equals => '=',
        }
    }

    /// Build an operator from its textual symbol
    pub fn from_symbol(symbol: &str) -> ParseResult<Self> {
        match symbol {
            "<" => Ok(CompareOp::LessThan),
            ">" => Ok(CompareOp::GreaterThan),
            "=" => Ok(CompareOp::Equals),
            other => Err(ParseError::InvalidOperator(other.to_string())),
        }
    }

    /// Evaluate `lhs <op> rhs`
    pub fn matches<T: PartialOrd + ?Sized>(&self, lhs: &T, rhs: &T) -> bool {
        match self {
            CompareOp::LessThan => lhs < rhs,
            CompareOp::GreaterThan => lhs > rhs,
            CompareOp::Equals => lhs == rhs,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single-column comparison, e.g. `price<1000`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub column: String,
    pub operator: CompareOp,
    /// Right-hand side, kept as text until the column type is known
    pub literal: String,
}

impl FilterSpec {
    pub fn new(column: impl Into<String>, operator: CompareOp, literal: impl Into<String>) -> Self {
        FilterSpec {
            column: column.into(),
            operator,
            literal: literal.into(),
        }
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.column, self.operator, self.literal)
    }
}

/// Supported aggregate functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    Avg,
    Min,
    Max,
}

impl AggregateFunction {
    /// Look up a function by its exact lowercase name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "avg" => Some(AggregateFunction::Avg),
            "min" => Some(AggregateFunction::Min),
            "max" => Some(AggregateFunction::Max),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AggregateFunction::Avg => "avg",
            AggregateFunction::Min => "min",
            AggregateFunction::Max => "max",
        }
    }

    /// Name used in the result line, e.g. `Avg`
    pub fn label(&self) -> &'static str {
        match self {
            AggregateFunction::Avg => "Avg",
            AggregateFunction::Min => "Min",
            AggregateFunction::Max => "Max",
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An aggregate request, e.g. `avg=rating`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSpec {
    pub function: AggregateFunction,
    pub column: String,
}

impl AggregateSpec {
    pub fn new(function: AggregateFunction, column: impl Into<String>) -> Self {
        AggregateSpec {
            function,
            column: column.into(),
        }
    }
}

impl fmt::Display for AggregateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.function, self.column)
    }
}
