// Storage Module
//
// Reads delimited files from disk into in-memory datasets.

pub mod csv_file;

pub use csv_file::{CsvError, load_csv, read_csv, DEFAULT_DELIMITER};
