use std::fmt;
use std::ops::{Index, Range};

/// A text viewed as a sequence of characters.
///
/// The buffer borrows the original string and indexes it by character
/// (Unicode code point) instead of by byte.  All ranges in an
/// [`EditOp`](crate::EditOp) refer to these character positions, and
/// [`TextBuffer::slice`] maps them back to the original text.
///
/// ```rust
/// # use textcompare::TextBuffer;
/// let buf = TextBuffer::new("grüße\n");
/// assert_eq!(buf.len(), 6);
/// assert_eq!(buf[2], 'ü');
/// assert_eq!(buf.slice(2..5), "üße");
/// ```
#[derive(Clone)]
pub struct TextBuffer<'s> {
    text: &'s str,
    chars: Vec<char>,
    // byte offset of every char plus one for the end of the text
    offsets: Vec<usize>,
}

impl<'s> TextBuffer<'s> {
    /// Creates a buffer over `text`.
    pub fn new(text: &'s str) -> TextBuffer<'s> {
        let mut chars = Vec::with_capacity(text.len());
        let mut offsets = Vec::with_capacity(text.len() + 1);
        for (offset, c) in text.char_indices() {
            chars.push(c);
            offsets.push(offset);
        }
        offsets.push(text.len());
        TextBuffer {
            text,
            chars,
            offsets,
        }
    }

    /// Returns the original text.
    pub fn as_str(&self) -> &'s str {
        self.text
    }

    /// Returns the characters of the text.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of characters in the text.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the text between the character positions of `range`.
    ///
    /// Returns `None` if the range is out of bounds or reversed.
    pub fn get(&self, range: Range<usize>) -> Option<&'s str> {
        if range.start > range.end {
            return None;
        }
        let start = *self.offsets.get(range.start)?;
        let end = *self.offsets.get(range.end)?;
        Some(&self.text[start..end])
    }

    /// Returns the text between the character positions of `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds, like slicing a `str` does.
    pub fn slice(&self, range: Range<usize>) -> &'s str {
        match self.get(range.clone()) {
            Some(rv) => rv,
            None => panic!(
                "range {:?} out of bounds for text of {} chars",
                range,
                self.len()
            ),
        }
    }

    /// Converts a character position into a byte offset into the text.
    ///
    /// `len()` maps to the length of the text in bytes.
    pub fn byte_offset(&self, index: usize) -> Option<usize> {
        self.offsets.get(index).copied()
    }
}

impl<'s> Index<usize> for TextBuffer<'s> {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        &self.chars[index]
    }
}

impl<'s> From<&'s str> for TextBuffer<'s> {
    fn from(text: &'s str) -> TextBuffer<'s> {
        TextBuffer::new(text)
    }
}

impl<'s> From<&'s String> for TextBuffer<'s> {
    fn from(text: &'s String) -> TextBuffer<'s> {
        TextBuffer::new(text)
    }
}

impl<'s> PartialEq for TextBuffer<'s> {
    fn eq(&self, other: &TextBuffer<'_>) -> bool {
        self.text == other.text
    }
}

impl<'s> Eq for TextBuffer<'s> {}

impl<'s> fmt::Debug for TextBuffer<'s> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("TextBuffer").field(&self.text).finish()
    }
}

impl<'s> fmt::Display for TextBuffer<'s> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.text)
    }
}

#[test]
fn test_char_positions() {
    let buf = TextBuffer::new("a\tb\r\n€");
    assert_eq!(buf.len(), 6);
    assert_eq!(buf.chars(), &['a', '\t', 'b', '\r', '\n', '€']);
    assert_eq!(buf.slice(3..5), "\r\n");
    assert_eq!(buf.slice(5..6), "€");
    assert_eq!(buf.slice(6..6), "");
    assert_eq!(buf.byte_offset(6), Some(8));
    assert_eq!(buf.get(2..7), None);
    assert_eq!(buf.get(4..2), None);
}

#[test]
fn test_empty() {
    let buf = TextBuffer::new("");
    assert!(buf.is_empty());
    assert_eq!(buf.slice(0..0), "");
    assert_eq!(buf.byte_offset(0), Some(0));
}
