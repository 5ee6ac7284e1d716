//! Configuration options for CSV to JSON conversion

/// Largest accepted indentation, in spaces
pub const MAX_INDENT_SIZE: u8 = 8;

/// Conversion configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Spaces per indentation level (0-8)
    pub indent_size: u8,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self { indent_size: 4 }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indentation size
    pub fn with_indent_size(mut self, size: u8) -> Result<Self, String> {
        if size > MAX_INDENT_SIZE {
            return Err(format!("Indent size must be 0-{} spaces", MAX_INDENT_SIZE));
        }
        self.indent_size = size;
        Ok(self)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > MAX_INDENT_SIZE {
            return Err(format!("Indent size must be 0-{} spaces", MAX_INDENT_SIZE));
        }

        Ok(())
    }

    /// The indentation unit handed to the JSON formatter
    pub fn indent_bytes(&self) -> Vec<u8> {
        vec![b' '; self.indent_size as usize]
    }
}
