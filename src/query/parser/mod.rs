// Expression Parser Module
//
// This module parses the filter and aggregate expressions given on the
// command line into structured specs.

pub mod ast;
pub mod parser;

// Export key types
pub use self::ast::{AggregateFunction, AggregateSpec, CompareOp, FilterSpec};
pub use self::parser::{parse_aggregate, parse_where, ParseError, ParseResult};
