//! Text buffer collaborator: trait + in-memory implementation.
//!
//! Every offset is a character offset (Unicode scalar values), not a byte
//! offset. Ranges are half-open.

use std::fmt;
use std::ops::Range;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// The editor surface the locator and commands work against.
pub trait TextBuffer {
    /// Length in characters.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text in `range`, clamped to the buffer.
    fn substring(&self, range: Range<usize>) -> String;

    /// Range of the word at `offset`.
    ///
    /// Words follow Unicode word-boundary segmentation (UAX #29). When the
    /// offset sits at the start of a non-word segment directly after a word,
    /// the word to the left wins, matching caret-at-end-of-word behavior.
    fn word_at(&self, offset: usize) -> Range<usize>;

    /// Non-overlapping matches of `pattern`, in order, optionally restricted
    /// to `within`.
    fn find_all(&self, pattern: &Regex, within: Option<Range<usize>>) -> Vec<Range<usize>>;

    /// Replace `range` with `text`.
    fn replace(&mut self, range: Range<usize>, text: &str);
}

// ── StringBuffer ──

/// A [`TextBuffer`] over an owned `String`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
    chars: usize,
}

impl StringBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let chars = text.chars().count();
        StringBuffer { text, chars }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Byte index of character `offset`, clamped to the end.
    fn byte_index(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Clamp a char range to the buffer and convert it to bytes.
    fn byte_range(&self, range: Range<usize>) -> Range<usize> {
        let start = range.start.min(self.chars);
        let end = range.end.clamp(start, self.chars);
        self.byte_index(start)..self.byte_index(end)
    }
}

impl From<&str> for StringBuffer {
    fn from(text: &str) -> Self {
        StringBuffer::new(text)
    }
}

impl From<String> for StringBuffer {
    fn from(text: String) -> Self {
        StringBuffer::new(text)
    }
}

impl fmt::Display for StringBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

impl TextBuffer for StringBuffer {
    fn len(&self) -> usize {
        self.chars
    }

    fn substring(&self, range: Range<usize>) -> String {
        self.text[self.byte_range(range)].to_string()
    }

    fn word_at(&self, offset: usize) -> Range<usize> {
        let offset = offset.min(self.chars);
        let mut previous: Option<(Range<usize>, bool)> = None;
        let mut start = 0;
        for segment in self.text.split_word_bounds() {
            let end = start + segment.chars().count();
            let word = is_word(segment);
            if offset < end {
                return match previous {
                    Some((prev, true)) if !word && offset == start => prev,
                    _ => start..end,
                };
            }
            previous = Some((start..end, word));
            start = end;
        }
        // offset == len: the last segment, if any
        previous.map_or(offset..offset, |(range, _)| range)
    }

    fn find_all(&self, pattern: &Regex, within: Option<Range<usize>>) -> Vec<Range<usize>> {
        let scope = within.unwrap_or(0..self.chars);
        let bytes = self.byte_range(scope.clone());
        let haystack = &self.text[bytes];
        let base = scope.start.min(self.chars);

        let mut ranges = Vec::new();
        let mut chars_before = 0;
        let mut scanned = 0;
        for m in pattern.find_iter(haystack) {
            chars_before += haystack[scanned..m.start()].chars().count();
            let len = m.as_str().chars().count();
            ranges.push(base + chars_before..base + chars_before + len);
            chars_before += len;
            scanned = m.end();
        }
        ranges
    }

    fn replace(&mut self, range: Range<usize>, text: &str) {
        let bytes = self.byte_range(range);
        self.text.replace_range(bytes, text);
        self.chars = self.text.chars().count();
    }
}
