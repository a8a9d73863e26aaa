//! File content reading
//!
//! Reading never fails the scan: bytes that are not valid UTF-8 are decoded
//! as Latin-1, and any I/O error becomes a placeholder text that is written
//! into the report in place of the file's content.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

/// Content of a file as it will appear in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Decoded text
    Text(String),
    /// The file could not be read; holds a readable placeholder
    Unreadable(String),
}

impl FileContent {
    /// The text to emit: the content itself or the placeholder.
    pub fn as_str(&self) -> &str {
        match self {
            FileContent::Text(s) | FileContent::Unreadable(s) => s,
        }
    }

    /// Decoded text, if the file was readable.
    pub fn text(&self) -> Option<&str> {
        match self {
            FileContent::Text(s) => Some(s),
            FileContent::Unreadable(_) => None,
        }
    }

    /// Number of lines in readable content; placeholders count as zero.
    pub fn line_count(&self) -> usize {
        self.text().map_or(0, |s| split_lines(s).count())
    }
}

/// Characters that end a line: LF, CR, and the other Unicode line boundaries
/// (VT, FF, FS, GS, RS, NEL, LINE SEPARATOR, PARAGRAPH SEPARATOR).
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split text into lines without their terminators.
///
/// `\r\n` counts as one break; a lone `\r` or NEL (byte 0x85 after Latin-1
/// decoding) also ends a line. A trailing terminator does not produce an
/// extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.char_indices().find(|&(_, c)| is_line_break(c)) {
            Some((i, c)) => {
                let line = &rest[..i];
                let mut end = i + c.len_utf8();
                if c == '\r' && rest[end..].starts_with('\n') {
                    end += 1;
                }
                rest = &rest[end..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Read a file as text.
pub fn read_file_content(path: &Path) -> FileContent {
    match fs::read(path) {
        Ok(bytes) => FileContent::Text(decode_text(bytes, path)),
        Err(err) => {
            warn!(path = %path.display(), "cannot read file: {}", err);
            FileContent::Unreadable(format!("Error reading file: {}", err))
        }
    }
}

/// Decode bytes as UTF-8, falling back to Latin-1 which accepts any byte.
pub fn decode_text(bytes: Vec<u8>, path: &Path) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %path.display(), "not UTF-8, decoding as Latin-1");
            decode_latin1(err.as_bytes())
        }
    }
}

/// Latin-1 maps every byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
