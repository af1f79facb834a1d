// CSV Query Engine

pub mod common;
pub mod query;
pub mod storage;

// Re-export key items for convenient access
pub use common::types::{Dataset, Row};
pub use query::executor::engine::{run_query, QueryConfig, QueryEngine};
pub use query::executor::result::{AggregateResult, QueryError, QueryOutput, QueryResult};
pub use query::executor::operators::{aggregate, apply_filter};
pub use query::executor::type_conversion::is_numeric_column;
pub use query::parser::{parse_aggregate, parse_where, AggregateSpec, FilterSpec};
pub use storage::csv_file::load_csv;
