//! Error types and handling infrastructure for CSV to JSON conversion

use anyhow::Error;
use std::path::PathBuf;

/// Core error types for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("CSV parse error: {message}")]
    CsvParse {
        message: String,
        line: Option<u64>,
    },

    #[error("Empty input: {path} has no header row")]
    EmptyInput { path: PathBuf },

    #[error("Row {row} (line {line}) has {found} cells but the header has {expected}")]
    ShortRow {
        row: usize,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("JSON serialization error: {message}")]
    Serialization { message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ConversionErrorKind {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn csv_parse(message: String, line: Option<u64>) -> Self {
        Self::CsvParse { message, line }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("{kind}")]
    Conversion {
        kind: ConversionErrorKind,
        #[source]
        source: Option<Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ConversionError {
    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind, source: None }
    }

    pub fn conversion_with_source(kind: ConversionErrorKind, source: impl Into<Error>) -> Self {
        Self::Conversion {
            kind,
            source: Some(source.into()),
        }
    }

    /// Wrap an IO failure on `path`
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{}: {}", path.display(), err);
        Self::conversion_with_source(ConversionErrorKind::io(message, Some(path)), err)
    }

    /// Wrap an error reported by the CSV reader.
    ///
    /// IO failures surfaced through the reader keep their IO kind so
    /// "file not found" reads the same whichever layer noticed it.
    pub fn csv(path: impl Into<PathBuf>, err: csv::Error) -> Self {
        let path = path.into();
        let line = err.position().map(|p| p.line());
        let is_io = matches!(err.kind(), csv::ErrorKind::Io(_));
        let message = format!("{}: {}", path.display(), err);
        let kind = if is_io {
            ConversionErrorKind::io(message, Some(path))
        } else {
            ConversionErrorKind::csv_parse(message, line)
        };
        Self::conversion_with_source(kind, err)
    }

    pub fn serialization(err: serde_json::Error) -> Self {
        let message = err.to_string();
        Self::conversion_with_source(ConversionErrorKind::Serialization { message }, err)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::conversion(ConversionErrorKind::configuration(message.into()))
    }

    pub fn other(error: Error) -> Self {
        Self::Other(error)
    }

    /// The structured kind, if this is a conversion error
    pub fn kind(&self) -> Option<&ConversionErrorKind> {
        match self {
            Self::Conversion { kind, .. } => Some(kind),
            Self::Other(_) => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Conversion { kind, .. } => match kind {
                ConversionErrorKind::Io { message, .. } => format!("Cannot access {}", message),
                ConversionErrorKind::CsvParse {
                    message,
                    line: Some(line),
                } => format!("Malformed CSV near line {}: {}", line, message),
                ConversionErrorKind::ShortRow {
                    row,
                    line,
                    expected,
                    found,
                } => format!(
                    "Data row {} on line {} is too short: expected {} cells, found {}",
                    row, line, expected, found
                ),
                _ => self.to_string(),
            },
            Self::Other(err) => format!("Unexpected error: {}", err),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
