// Query Executor Module
//
// This module is responsible for running a parsed query over a dataset and
// producing results.

pub mod engine;
pub mod result;
pub mod operators;
pub mod type_conversion;

// Export key types
pub use self::engine::{run_query, QueryConfig, QueryEngine};
pub use self::result::{AggregateOutcome, AggregateResult, QueryError, QueryOutput, QueryResult};
pub use self::type_conversion::is_numeric_column;
