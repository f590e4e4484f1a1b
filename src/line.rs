//! The value produced for each line read.

use std::fmt;
use std::ops::Deref;

/// One line of the source, exactly as it appears in the file.
///
/// The text keeps its terminator when the file had one after this line, so
/// concatenating every line in file order reproduces the file byte for byte.
/// Nothing is normalized: a `\r\n` line keeps its `\r` in the content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    text: String,
    content_len: usize,
}

impl Line {
    /// Build a line from its full text and the terminator length at its end
    /// (zero when unterminated).
    pub(crate) fn new(text: String, terminator_len: usize) -> Self {
        debug_assert!(terminator_len <= text.len());
        let content_len = text.len() - terminator_len;
        Self { text, content_len }
    }

    /// The full text, terminator included.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The text without its terminator.
    pub fn content(&self) -> &str {
        &self.text[..self.content_len]
    }

    /// The terminator, if the line carries one.
    pub fn terminator(&self) -> Option<&str> {
        if self.is_terminated() {
            Some(&self.text[self.content_len..])
        } else {
            None
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.content_len < self.text.len()
    }

    /// Consume the line and return its full text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl Deref for Line {
    type Target = str;

    fn deref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Line {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Line> for String {
    fn from(line: Line) -> Self {
        line.text
    }
}

impl PartialEq<str> for Line {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Line {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<String> for Line {
    fn eq(&self, other: &String) -> bool {
        &self.text == other
    }
}
