//! # Stream Conversion
//!
//! A [`Converter`] reads a source line by line, classifies each line, hands
//! the resulting elements to an [`ElementSerializer`] and appends every
//! non-empty result to the sink. Nothing beyond the current line is held in
//! memory on the source side.
//!
//! Sources and sinks are scoped: readers and files are closed when dropped,
//! and file targets are written through a temporary file that only replaces
//! the target after the whole conversion succeeded.

pub mod error;
pub mod sink;
pub mod source;

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::parsing::{Element, LineBreakPolicy, LineClassifier};

pub use error::ConvertError;
use sink::FileSink;
use source::{BoundedLines, Source};

/// Default cap on bytes per line before a line is split into chunks.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 2048;

/// Turns one element into target text.
///
/// Returning an empty string suppresses the element. Any
/// `FnMut(&Element) -> String` closure is a serializer.
pub trait ElementSerializer {
    fn serialize(&mut self, element: &Element) -> String;
}

impl<F> ElementSerializer for F
where
    F: FnMut(&Element) -> String,
{
    fn serialize(&mut self, element: &Element) -> String {
        self(element)
    }
}

/// Tunables for a [`Converter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub line_break_policy: LineBreakPolicy,
    pub max_line_length: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            line_break_policy: LineBreakPolicy::default(),
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

/// Streams classified lines through a serializer.
pub struct Converter<S> {
    classifier: LineClassifier,
    serializer: S,
    max_line_length: usize,
}

impl<S: ElementSerializer> Converter<S> {
    pub fn new(serializer: S) -> Self {
        Self::with_options(serializer, ConvertOptions::default())
    }

    pub fn with_options(serializer: S, options: ConvertOptions) -> Self {
        Self {
            classifier: LineClassifier::new(options.line_break_policy),
            serializer,
            max_line_length: options.max_line_length,
        }
    }

    /// Converts `source` into `sink`, returning the number of bytes written.
    pub fn convert<W: Write + ?Sized>(
        &mut self,
        source: Source<'_>,
        sink: &mut W,
    ) -> Result<u64, ConvertError> {
        let reader = source.open()?;
        self.convert_reader(reader, sink)
    }

    /// The core loop: read a line, classify it, serialize its elements and
    /// write them, then move on to the next line.
    pub fn convert_reader<R: BufRead, W: Write + ?Sized>(
        &mut self,
        reader: R,
        writer: &mut W,
    ) -> Result<u64, ConvertError> {
        let mut written = 0u64;
        let mut line_count = 0usize;

        for line in BoundedLines::new(reader, self.max_line_length) {
            let line = line.map_err(ConvertError::SourceRead)?;
            line_count += 1;

            for element in self.classifier.elements(&line) {
                let converted = self.serializer.serialize(&element);
                if converted.is_empty() {
                    continue;
                }
                writer
                    .write_all(converted.as_bytes())
                    .map_err(ConvertError::SinkWrite)?;
                written += converted.len() as u64;
            }
        }

        writer.flush().map_err(ConvertError::SinkWrite)?;
        log::debug!("converted {line_count} lines into {written} bytes");
        Ok(written)
    }

    pub fn convert_file_to_string(
        &mut self,
        source: impl AsRef<Path>,
    ) -> Result<String, ConvertError> {
        self.convert_to_string(Source::Path(source.as_ref()))
    }

    pub fn convert_file_to_file(
        &mut self,
        source: impl AsRef<Path>,
        target: impl AsRef<Path>,
    ) -> Result<u64, ConvertError> {
        self.convert_to_file(Source::Path(source.as_ref()), target.as_ref())
    }

    pub fn convert_string_to_string(&mut self, markdown: &str) -> Result<String, ConvertError> {
        self.convert_to_string(Source::Text(markdown))
    }

    pub fn convert_string_to_file(
        &mut self,
        markdown: &str,
        target: impl AsRef<Path>,
    ) -> Result<u64, ConvertError> {
        self.convert_to_file(Source::Text(markdown), target.as_ref())
    }

    fn convert_to_string(&mut self, source: Source<'_>) -> Result<String, ConvertError> {
        let mut buffer = Vec::new();
        self.convert(source, &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| ConvertError::SinkWrite(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    fn convert_to_file(&mut self, source: Source<'_>, target: &Path) -> Result<u64, ConvertError> {
        // Open the source first so a missing input never creates a target.
        let reader = source.open()?;
        let mut sink = FileSink::create(target)?;
        let written = self.convert_reader(reader, sink.writer())?;
        sink.commit()?;
        log::debug!("wrote {written} bytes to {}", target.display());
        Ok(written)
    }
}
