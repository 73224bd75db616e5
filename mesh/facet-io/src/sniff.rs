//! ASCII vs binary STL detection.
//!
//! Only the first line is inspected. If it contains `solid` the stream is
//! treated as ASCII and stays positioned after that line; otherwise it is
//! binary and the consumed bytes are replayed in front of the rest of the
//! stream, so the binary decoder starts at offset 0 without needing `Seek`.

use std::io::{BufRead, Chain, Cursor, Read};

use crate::error::IoResult;

/// Keyword that marks an ASCII STL first line.
pub const ASCII_MARKER: &str = "solid";

/// The two STL encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StlFormat {
    /// Line-oriented text.
    Ascii,
    /// 80-byte header, `u32` count, fixed 50-byte records.
    Binary,
}

/// Classify a stream from its first line.
///
/// # Example
///
/// ```
/// use facet_io::{classify_first_line, StlFormat};
///
/// assert_eq!(classify_first_line(b"solid cube\n"), StlFormat::Ascii);
/// assert_eq!(classify_first_line(b"  my solid part"), StlFormat::Ascii);
/// assert_eq!(classify_first_line(b"\x00\x01binary"), StlFormat::Binary);
/// ```
#[must_use]
pub fn classify_first_line(line: &[u8]) -> StlFormat {
    let marker = ASCII_MARKER.as_bytes();
    if line.windows(marker.len()).any(|w| w == marker) {
        StlFormat::Ascii
    } else {
        StlFormat::Binary
    }
}

/// Name following `solid` on an ASCII first line, if any.
pub(crate) fn solid_name(line: &str) -> Option<String> {
    let (_, rest) = line.split_once(ASCII_MARKER)?;
    let name = rest.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Outcome of sniffing a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sniffed {
    /// Detected format.
    pub format: StlFormat,
    /// Bytes consumed, including the trailing newline if there was one.
    pub first_line: Vec<u8>,
}

impl Sniffed {
    /// Name following `solid` on the first line, for ASCII input.
    #[must_use]
    pub fn solid_name(&self) -> Option<String> {
        match self.format {
            StlFormat::Ascii => solid_name(&String::from_utf8_lossy(&self.first_line)),
            StlFormat::Binary => None,
        }
    }

    /// Put the consumed first line back in front of `rest`.
    #[must_use]
    pub fn replay<R: Read>(self, rest: R) -> Chain<Cursor<Vec<u8>>, R> {
        Cursor::new(self.first_line).chain(rest)
    }
}

/// Read exactly one line from `reader` and classify the stream.
///
/// # Errors
///
/// Returns [`IoError::Io`](crate::IoError::Io) if the stream cannot be read.
pub fn sniff_format<R: BufRead>(reader: &mut R) -> IoResult<Sniffed> {
    let mut first_line = Vec::new();
    reader.read_until(b'\n', &mut first_line)?;
    Ok(Sniffed {
        format: classify_first_line(&first_line),
        first_line,
    })
}
