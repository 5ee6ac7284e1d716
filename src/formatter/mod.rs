//! JSON output formatting

use crate::conversion::ConversionConfig;
use crate::error::{ConversionError, ConversionResult};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io::{self, Write};

/// Pretty JSON writer with a configurable indent
pub struct JsonFormatter {
    indent: Vec<u8>,
}

impl JsonFormatter {
    /// Create a new formatter with configuration
    pub fn new(config: &ConversionConfig) -> Self {
        Self {
            indent: config.indent_bytes(),
        }
    }

    /// Serialize `value` into `writer`.
    ///
    /// Output is pure ASCII: other characters become `\uXXXX` escapes.
    /// No trailing newline is written after the top-level value.
    pub fn write<W: Write, T: Serialize + ?Sized>(
        &self,
        writer: W,
        value: &T,
    ) -> ConversionResult<()> {
        let formatter = AsciiFormatter {
            inner: PrettyFormatter::with_indent(&self.indent),
        };
        let mut ser = serde_json::Serializer::with_formatter(writer, formatter);
        value
            .serialize(&mut ser)
            .map_err(ConversionError::serialization)
    }

    /// Serialize `value` into a string
    pub fn format<T: Serialize + ?Sized>(&self, value: &T) -> ConversionResult<String> {
        let mut buf = Vec::new();
        self.write(&mut buf, value)?;
        String::from_utf8(buf).map_err(|e| ConversionError::other(e.into()))
    }
}

/// `PrettyFormatter` layout with every non-ASCII character escaped
struct AsciiFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }

    // Characters outside the BMP are written as a UTF-16 surrogate pair.
    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
