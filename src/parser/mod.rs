//! CSV reading

use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A fully read CSV file: the header row plus every data record
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: csv::StringRecord,
    pub rows: Vec<CsvRow>,
    /// Bytes consumed from the input
    pub input_size: u64,
}

/// A data record with the line it started on
#[derive(Debug, Clone)]
pub struct CsvRow {
    pub record: csv::StringRecord,
    pub line: u64,
}

impl CsvTable {
    pub fn header_names(&self) -> Vec<String> {
        self.headers.iter().map(str::to_string).collect()
    }
}

/// Read and parse the CSV file at `path`.
///
/// The file handle is dropped before this returns.
pub fn parse_csv_file(path: &Path) -> ConversionResult<CsvTable> {
    debug!(path = %path.display(), "reading csv");
    let file = File::open(path).map_err(|e| ConversionError::io(path, e))?;
    parse_csv_reader(file, path)
}

/// Parse CSV from any reader; `origin` names it in errors.
///
/// A blank line yields a row with zero cells, the same as any other
/// record, so it fails the short-row check when it follows the header.
/// A leading UTF-8 byte order mark is dropped.
pub fn parse_csv_reader<R: Read>(mut reader: R, origin: &Path) -> ConversionResult<CsvTable> {
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| ConversionError::io(origin, e))?;
    let input = buf.strip_prefix(UTF8_BOM).unwrap_or(&buf[..]);

    // Row length checks happen in the engine so long rows can be truncated
    // instead of rejected.
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut lines = LineTracker::default();
    let mut records = Vec::new();
    let mut record = csv::StringRecord::new();
    loop {
        let start = rdr.position().byte() as usize;
        let more = rdr
            .read_record(&mut record)
            .map_err(|e| ConversionError::csv(origin, e))?;
        let end = rdr.position().byte() as usize;

        // The reader skips blank lines silently; recover them from the
        // bytes it consumed ahead of the record.
        let (blanks, record_start) = blank_lines(input, start, end);
        for offset in blanks {
            records.push(CsvRow {
                record: csv::StringRecord::new(),
                line: lines.line_at(input, offset),
            });
        }
        if !more {
            break;
        }
        records.push(CsvRow {
            record: record.clone(),
            line: lines.line_at(input, record_start),
        });
    }

    let mut records = records.into_iter();
    let headers = match records.next() {
        Some(row) => row.record,
        None => {
            return Err(ConversionError::conversion(
                ConversionErrorKind::EmptyInput {
                    path: PathBuf::from(origin),
                },
            ))
        }
    };
    let rows: Vec<CsvRow> = records.collect();

    debug!(columns = headers.len(), rows = rows.len(), "parsed csv");

    Ok(CsvTable {
        headers,
        rows,
        input_size: buf.len() as u64,
    })
}

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Start offsets of the blank lines in `input[start..end]`, plus the offset
/// where the next record begins.
///
/// A record never starts with a line terminator, so every terminator at the
/// front of the span is an empty line. `\r\n`, `\r` and `\n` each end one line.
fn blank_lines(input: &[u8], start: usize, end: usize) -> (Vec<usize>, usize) {
    let mut i = start;
    // Second half of the previous record's CRLF terminator.
    if i > 0 && input[i - 1] == b'\r' && input.get(i) == Some(&b'\n') {
        i += 1;
    }

    let mut blanks = Vec::new();
    while i < end {
        match input[i] {
            b'\r' => {
                blanks.push(i);
                i += if input.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
            }
            b'\n' => {
                blanks.push(i);
                i += 1;
            }
            _ => break,
        }
    }
    (blanks, i)
}

/// 1-based line number of a byte offset; offsets must not go backwards
#[derive(Debug)]
struct LineTracker {
    offset: usize,
    line: u64,
}

impl Default for LineTracker {
    fn default() -> Self {
        Self { offset: 0, line: 1 }
    }
}

impl LineTracker {
    fn line_at(&mut self, input: &[u8], pos: usize) -> u64 {
        for i in self.offset..pos {
            match input[i] {
                b'\n' => self.line += 1,
                b'\r' if input.get(i + 1) != Some(&b'\n') => self.line += 1,
                _ => {}
            }
        }
        self.offset = self.offset.max(pos);
        self.line
    }
}
