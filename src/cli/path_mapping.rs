use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const INPUT_EXTENSION: &str = "csv";
pub const OUTPUT_EXTENSION: &str = "json";

/// Input and output locations derived from one base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionPaths {
    /// Map a base name `N` to `N.csv` and `N.json`.
    ///
    /// The extension is appended, never substituted, so `data.v2` maps to
    /// `data.v2.csv` rather than `data.csv`.
    pub fn from_base_name(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            input: with_suffix(base, INPUT_EXTENSION),
            output: with_suffix(base, OUTPUT_EXTENSION),
        }
    }
}

fn with_suffix(base: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
