//! Line-oriented reading and classification of INI text.

use std::io::{self, BufRead};

/// What a single trimmed line of INI text is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'line> {
    Blank,
    Comment,
    /// `key = value`, split on the first `=` with both halves trimmed.
    Assignment { key: &'line str, value: &'line str },
    /// `[name]`, with the name trimmed.
    SectionHeader(&'line str),
    Invalid,
}

impl<'line> Line<'line> {
    /// Classifies an already trimmed line.
    pub fn classify(line: &'line str) -> Self {
        if line.is_empty() {
            return Self::Blank;
        }

        if line.starts_with(';') || line.starts_with('#') {
            return Self::Comment;
        }

        if let Some(assignment) = Self::assignment(line) {
            return assignment;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            return Self::SectionHeader(name.trim());
        }

        Self::Invalid
    }

    /// Matches only the assignment shape. The key must be non-empty before trimming.
    fn assignment(line: &'line str) -> Option<Self> {
        match line.split_once('=') {
            Some((key, value)) if !key.is_empty() => Some(Self::Assignment {
                key: key.trim(),
                value: value.trim(),
            }),
            _ => None,
        }
    }
}

/// Reads a buffered stream one trimmed line at a time, numbering lines from 1.
///
/// A final line without a trailing newline is still yielded. Bytes that are not valid
/// UTF-8 are replaced with U+FFFD instead of failing the read.
pub struct LineScanner<R> {
    reader: R,
    bytes: Vec<u8>,
    line: String,
    line_number: usize,
}

impl<R: BufRead> LineScanner<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            bytes: Vec::new(),
            line: String::new(),
            line_number: 0,
        }
    }

    /// Advances to the next line. Returns `Ok(None)` at end of stream.
    pub fn next_line(&mut self) -> io::Result<Option<(usize, &str)>> {
        self.bytes.clear();

        if self.reader.read_until(b'\n', &mut self.bytes)? == 0 {
            return Ok(None);
        }

        self.line = String::from_utf8_lossy(&self.bytes).into_owned();
        self.line_number += 1;
        Ok(Some((self.line_number, self.line.trim())))
    }
}
