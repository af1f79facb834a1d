// Common types shared by the storage and query layers

pub mod types;

pub use types::{Dataset, Row};
