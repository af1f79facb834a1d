// CSV File Reader
//
// Loads a delimited file with a header row into an in-memory Dataset.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::common::types::{Dataset, Row};

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

/// Errors raised while reading a CSV file
#[derive(Error, Debug)]
pub enum CsvError {
    #[error("Cannot open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read header: {0}")]
    Header(#[source] csv::Error),
    #[error("Failed to read record {line}: {source}")]
    Record {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

/// Load the whole file at `path` into memory.
///
/// The file handle lives inside the reader and is released when this
/// function returns, whether reading succeeded or not.
pub fn load_csv(path: &Path, delimiter: u8) -> Result<Dataset, CsvError> {
    let file = File::open(path).map_err(|source| CsvError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened {}", path.display());

    let dataset = read_csv(file, delimiter)?;
    info!(
        "Loaded {} rows with {} columns from {}",
        dataset.row_count(),
        dataset.columns().len(),
        path.display()
    );
    Ok(dataset)
}

/// Read CSV data from any reader. Records must all have as many fields as the header.
pub fn read_csv<R: Read>(reader: R, delimiter: u8) -> Result<Dataset, CsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(reader);

    let columns: Vec<String> = reader
        .headers()
        .map_err(CsvError::Header)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut dataset = Dataset::new(columns);
    for result in reader.records() {
        let record = result.map_err(|source| CsvError::Record {
            line: source.position().map_or(0, |p| p.line()),
            source,
        })?;
        let row = Row::from_values(dataset.columns().iter().cloned(), record.iter());
        dataset.add_row(row);
    }

    Ok(dataset)
}
