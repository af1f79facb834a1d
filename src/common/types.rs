use linked_hash_map::LinkedHashMap;

/// A single record of a CSV file.
///
/// Values are kept as the raw strings the reader produced; interpretation
/// (numeric or text) happens later, per query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    /// Column name to raw value, in header order
    values: LinkedHashMap<String, String>,
}

impl Row {
    /// Create a row from column names and their values.
    ///
    /// Extra values without a matching column are dropped, and columns without
    /// a value are simply absent from the row.
    pub fn from_values<C, V>(columns: C, values: V) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        let values = columns
            .into_iter()
            .zip(values)
            .map(|(col, val)| (col.into(), val.into()))
            .collect();
        Row { values }
    }

    /// Get a value by column name
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Column names in header order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// An in-memory table: the header plus every row read from the file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    /// Column names, taken from the header
    columns: Vec<String>,
    /// Rows in file order
    rows: Vec<Row>,
}

impl Dataset {
    /// Create an empty dataset with the given header
    pub fn new(columns: Vec<String>) -> Self {
        Dataset {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn from_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Dataset { columns, rows }
    }

    /// Append a row
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn first_row(&self) -> Option<&Row> {
        self.rows.first()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Split into header and rows
    pub fn into_parts(self) -> (Vec<String>, Vec<Row>) {
        (self.columns, self.rows)
    }
}
