// Query Execution Engine
//
// Runs one query end to end: parse expressions, load the file, filter,
// aggregate.

use std::path::PathBuf;

use log::info;

use crate::common::types::Dataset;
use crate::query::executor::operators::{aggregate, apply_filter};
use crate::query::executor::result::{AggregateOutcome, QueryOutput, QueryResult};
use crate::query::parser::ast::{AggregateSpec, FilterSpec};
use crate::query::parser::parser::{parse_aggregate, parse_where};
use crate::storage::csv_file::{load_csv, DEFAULT_DELIMITER};

/// Configuration of a single query run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// CSV file to read
    pub file: PathBuf,
    /// Field delimiter
    pub delimiter: u8,
    /// Filter expression, e.g. `price<1000`
    pub where_expr: Option<String>,
    /// Aggregate expression, e.g. `avg=rating`
    pub aggregate_expr: Option<String>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::new(),
            delimiter: DEFAULT_DELIMITER,
            where_expr: None,
            aggregate_expr: None,
        }
    }
}

impl QueryConfig {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Self::default()
        }
    }
}

/// Sequences parsing, loading, filtering and aggregation for one query
pub struct QueryEngine {
    config: QueryConfig,
}

impl QueryEngine {
    pub fn new(config: QueryConfig) -> Self {
        QueryEngine { config }
    }

    /// Run the query against the configured file.
    ///
    /// Expressions are parsed before the file is opened, so a syntax error is
    /// reported without touching the disk.
    pub fn execute(&self) -> QueryResult<QueryOutput> {
        let (filter, agg) = self.parse_expressions()?;
        let dataset = load_csv(&self.config.file, self.config.delimiter)?;
        self.run(dataset, filter, agg)
    }

    /// Run the query against an already loaded dataset
    pub fn execute_on(&self, dataset: Dataset) -> QueryResult<QueryOutput> {
        let (filter, agg) = self.parse_expressions()?;
        self.run(dataset, filter, agg)
    }

    fn parse_expressions(&self) -> QueryResult<(Option<FilterSpec>, Option<AggregateSpec>)> {
        let filter = parse_where(self.config.where_expr.as_deref())?;
        let agg = parse_aggregate(self.config.aggregate_expr.as_deref())?;
        Ok((filter, agg))
    }

    fn run(
        &self,
        dataset: Dataset,
        filter: Option<FilterSpec>,
        agg: Option<AggregateSpec>,
    ) -> QueryResult<QueryOutput> {
        let filtered = apply_filter(dataset, filter.as_ref())?;
        info!("{} rows after filtering", filtered.row_count());

        let outcome = match agg {
            Some(spec) => {
                let result = aggregate(&filtered, Some(&spec))?;
                Some(AggregateOutcome { spec, result })
            }
            None => None,
        };

        Ok(QueryOutput::new(filtered, outcome))
    }
}

/// Run a query and render its output as text
pub fn run_query(config: QueryConfig) -> QueryResult<String> {
    QueryEngine::new(config).execute().map(|output| output.to_string())
}
