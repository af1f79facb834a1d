// Query Processing Module
//
// This module contains expression parsing and query execution.

pub mod parser;
pub mod executor;

// Export key public interfaces
pub use executor::engine::{QueryConfig, QueryEngine};
pub use executor::result::{QueryError, QueryResult};
