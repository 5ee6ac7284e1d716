//! Statistics for a single conversion

use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Counts collected while converting one file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversionStats {
    /// Data rows written (header excluded)
    pub rows: usize,
    /// Header columns
    pub columns: usize,
    /// Rows with more cells than the header
    pub truncated_rows: usize,
    /// Header names that occur more than once
    pub duplicate_headers: Vec<String>,
    /// Input CSV size in bytes
    pub input_size_bytes: u64,
    /// Output JSON size in bytes
    pub output_size_bytes: u64,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

impl ConversionStats {
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.processing_time_ms = elapsed.as_millis() as u64;
    }
}

impl fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conversion Statistics:")?;
        writeln!(f, "Rows: {}", self.rows)?;
        writeln!(f, "Columns: {}", self.columns)?;
        if self.truncated_rows > 0 {
            writeln!(f, "Truncated rows: {}", self.truncated_rows)?;
        }
        if !self.duplicate_headers.is_empty() {
            writeln!(f, "Duplicate headers: {}", self.duplicate_headers.join(", "))?;
        }
        writeln!(f, "Input size: {} bytes", self.input_size_bytes)?;
        writeln!(f, "Output size: {} bytes", self.output_size_bytes)?;
        write!(f, "Processing time: {}ms", self.processing_time_ms)
    }
}
