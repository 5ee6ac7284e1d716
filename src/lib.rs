//! CSV to JSON Converter
//!
//! Reads `<name>.csv` and writes `<name>.json` holding the header row and
//! every data row as a header-keyed object.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;

// Re-export commonly used types
pub use cli::path_mapping::ConversionPaths;
pub use conversion::{
    ConversionConfig, ConversionEngine, ConversionOutcome, ConversionStats, OutputDocument,
};
pub use error::{ConversionError, ConversionErrorKind, ConversionResult};
pub use formatter::JsonFormatter;

use std::path::Path;

/// Convert `<base>.csv` to `<base>.json` with default configuration
pub fn convert_base_name(base: impl AsRef<Path>) -> ConversionResult<ConversionOutcome> {
    convert_base_name_with_config(base, &ConversionConfig::default())
}

/// Convert `<base>.csv` to `<base>.json` with custom configuration
pub fn convert_base_name_with_config(
    base: impl AsRef<Path>,
    config: &ConversionConfig,
) -> ConversionResult<ConversionOutcome> {
    let paths = ConversionPaths::from_base_name(base);
    ConversionEngine::new(config.clone()).convert_paths(&paths)
}
