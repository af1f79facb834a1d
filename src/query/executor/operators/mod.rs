// Query Operators Module
//
// This module contains the operators a query runs over a dataset.

pub mod agg;
pub mod filter;

// Re-export public components
pub use agg::aggregate;
pub use filter::{apply_filter, FilterOperator};
