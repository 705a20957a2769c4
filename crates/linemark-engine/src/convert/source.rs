use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::path::Path;

use super::error::ConvertError;

/// Where markdown lines come from.
pub enum Source<'a> {
    /// A file on disk, opened when the conversion starts.
    Path(&'a Path),
    /// An already-open reader.
    Reader(Box<dyn BufRead + 'a>),
    /// In-memory markdown.
    Text(&'a str),
}

impl<'a> Source<'a> {
    /// Acquires the underlying reader.
    ///
    /// The returned reader closes its handle when dropped.
    pub fn open(self) -> Result<Box<dyn BufRead + 'a>, ConvertError> {
        match self {
            Source::Path(path) => {
                let file = File::open(path).map_err(|source| ConvertError::SourceOpen {
                    path: path.to_path_buf(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            Source::Reader(reader) => Ok(reader),
            Source::Text(text) => Ok(Box::new(text.as_bytes())),
        }
    }
}

impl<'a> From<&'a Path> for Source<'a> {
    fn from(path: &'a Path) -> Self {
        Source::Path(path)
    }
}

/// Iterator over the lines of a reader with a cap on line length.
///
/// Terminators (`\n` or `\r\n`) are stripped. A line longer than the cap is
/// yielded as consecutive chunks of at most `max_len` bytes, each cut on a
/// UTF-8 character boundary. Invalid UTF-8 is replaced lossily.
pub struct BoundedLines<R> {
    reader: R,
    max_len: usize,
    /// Bytes of a split character carried over to the next chunk.
    carry: Vec<u8>,
    done: bool,
}

impl<R: BufRead> BoundedLines<R> {
    /// Smallest accepted cap; any shorter could not hold a full UTF-8 character.
    pub const MIN_LEN: usize = 4;

    pub fn new(reader: R, max_len: usize) -> Self {
        Self {
            reader,
            max_len: max_len.max(Self::MIN_LEN),
            carry: Vec::new(),
            done: false,
        }
    }

    /// Reads the next line or chunk. The flag is set when the bytes ended at
    /// a consumed `\n`.
    fn read_line(&mut self) -> io::Result<Option<(Vec<u8>, bool)>> {
        let mut buf = std::mem::take(&mut self.carry);

        loop {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                return Ok((!buf.is_empty()).then_some((buf, false)));
            }

            let room = self.max_len - buf.len();
            let window = &available[..available.len().min(room)];

            if let Some(pos) = window.iter().position(|&b| b == b'\n') {
                buf.extend_from_slice(&window[..pos]);
                self.reader.consume(pos + 1);
                return Ok(Some((buf, true)));
            }

            let taken = window.len();
            buf.extend_from_slice(window);
            self.reader.consume(taken);

            if buf.len() >= self.max_len {
                let cut = char_boundary(&buf);
                let terminated = cut == buf.len() && self.at_newline()?;
                if terminated {
                    // The terminator right at the cap belongs to this chunk.
                    self.reader.consume(1);
                } else {
                    self.carry = buf.split_off(cut);
                }
                return Ok(Some((buf, terminated)));
            }
        }
    }

    fn at_newline(&mut self) -> io::Result<bool> {
        loop {
            match self.reader.fill_buf() {
                Ok(available) => return Ok(available.first() == Some(&b'\n')),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: BufRead> Iterator for BoundedLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_line() {
            Ok(Some((bytes, terminated))) => Some(Ok(decode_line(bytes, terminated))),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Largest prefix length of `buf` that does not end inside a multi-byte
/// character.
fn char_boundary(buf: &[u8]) -> usize {
    match std::str::from_utf8(buf) {
        Ok(_) => buf.len(),
        // Only an incomplete trailing sequence is worth carrying over.
        Err(e) if e.error_len().is_none() && e.valid_up_to() > 0 => e.valid_up_to(),
        Err(_) => buf.len(),
    }
}

/// A trailing `\r` is only stripped as the first half of a `\r\n` terminator.
fn decode_line(mut bytes: Vec<u8>, terminated: bool) -> String {
    if terminated && bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}
