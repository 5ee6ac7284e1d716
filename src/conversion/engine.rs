//! Core conversion engine for CSV to JSON transformation

use crate::cli::path_mapping::ConversionPaths;
use crate::conversion::config::ConversionConfig;
use crate::conversion::document::OutputDocument;
use crate::conversion::stats::ConversionStats;
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind};
use crate::formatter::JsonFormatter;
use crate::parser::{parse_csv_file, parse_csv_reader, CsvTable};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

/// Result of converting one file
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub output_path: PathBuf,
    pub stats: ConversionStats,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Read `paths.input`, write `paths.output`.
    ///
    /// The input is read and closed before the output is created, so a
    /// parse failure never touches an existing output file.
    pub fn convert_paths(&self, paths: &ConversionPaths) -> ConversionResult<ConversionOutcome> {
        let start_time = Instant::now();

        let table = parse_csv_file(&paths.input)?;
        let (document, mut stats) = self.build_document(&table)?;
        let content = JsonFormatter::new(&self.config).format(&document)?;

        debug!(path = %paths.output.display(), bytes = content.len(), "writing json");
        std::fs::write(&paths.output, &content)
            .map_err(|e| ConversionError::io(&paths.output, e))?;

        stats.output_size_bytes = content.len() as u64;
        stats.set_elapsed(start_time.elapsed());

        Ok(ConversionOutcome {
            output_path: paths.output.clone(),
            stats,
        })
    }

    /// Convert CSV text to a JSON string
    pub fn convert_str(&self, csv_text: &str) -> ConversionResult<String> {
        let table = parse_csv_reader(csv_text.as_bytes(), Path::new("<string>"))?;
        let (document, _) = self.build_document(&table)?;
        JsonFormatter::new(&self.config).format(&document)
    }

    /// Zip every data row with the header row.
    ///
    /// A row shorter than the header aborts the conversion; a longer one
    /// is cut to the header length.
    pub fn build_document(
        &self,
        table: &CsvTable,
    ) -> ConversionResult<(OutputDocument, ConversionStats)> {
        let mut document = OutputDocument::new(table.header_names());
        let expected = document.column_count();
        let mut truncated_rows = 0;

        for (index, row) in table.rows.iter().enumerate() {
            let found = row.record.len();
            if found < expected {
                return Err(ConversionError::conversion(ConversionErrorKind::ShortRow {
                    row: index + 1,
                    line: row.line,
                    expected,
                    found,
                }));
            }
            if found > expected {
                truncated_rows += 1;
                warn!(
                    line = row.line,
                    expected,
                    found,
                    "row has more cells than the header, extra cells dropped"
                );
            }
            document.push_row(row.record.iter());
        }

        let duplicate_headers: Vec<String> = document
            .duplicate_headers()
            .into_iter()
            .map(str::to_string)
            .collect();
        for name in &duplicate_headers {
            warn!(header = %name, "duplicate header, later column overwrites earlier one");
        }

        let stats = ConversionStats {
            rows: document.row_count(),
            columns: expected,
            truncated_rows,
            duplicate_headers,
            input_size_bytes: table.input_size,
            ..Default::default()
        };

        Ok((document, stats))
    }
}
