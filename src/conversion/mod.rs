//! CSV to JSON conversion module
//!
//! This module contains the core conversion logic, configuration, and statistics.

pub mod config;
pub mod document;
pub mod engine;
pub mod stats;

pub use config::ConversionConfig;
pub use document::{OutputDocument, RowRecord};
pub use engine::{ConversionEngine, ConversionOutcome};
pub use stats::ConversionStats;

pub use crate::error::ConversionResult;
