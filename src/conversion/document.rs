//! In-memory shape of the JSON output

use serde::Serialize;
use serde_json::{Map, Value};

/// One data row keyed by header name, in header order
pub type RowRecord = Map<String, Value>;

/// The top-level `{"headers": [...], "data": [...]}` document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutputDocument {
    pub headers: Vec<String>,
    pub data: Vec<RowRecord>,
}

impl OutputDocument {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            data: Vec::new(),
        }
    }

    /// Build a record from `cells` and append it.
    ///
    /// Only the first `headers.len()` cells are read; callers reject
    /// shorter rows before getting here. A repeated header name keeps the
    /// position of its first occurrence and the value of its last.
    pub fn push_row<'a, I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut record = RowRecord::with_capacity(self.headers.len());
        for (header, cell) in self.headers.iter().zip(cells) {
            record.insert(header.clone(), Value::String(cell.to_string()));
        }
        self.data.push(record);
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Header names that occur more than once, each listed once
    pub fn duplicate_headers(&self) -> Vec<&str> {
        let mut dups: Vec<&str> = Vec::new();
        for (i, header) in self.headers.iter().enumerate() {
            if self.headers[..i].contains(header) && !dups.contains(&header.as_str()) {
                dups.push(header);
            }
        }
        dups
    }
}
