//! Line, word and character counts of a text.
//!
//! These are the numbers a compare view typically shows next to each
//! text, and the absolute differences it shows between them.
use std::fmt;

/// Counts for a single text.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStats {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

impl TextStats {
    /// Counts the lines, words and chars of `text`.
    ///
    /// Lines and words are zero for a text that is empty or only holds
    /// whitespace.  A trailing line break does not start another line.
    ///
    /// ```rust
    /// # use textcompare::TextStats;
    /// let stats = TextStats::of("first line\nsecond\r\n");
    /// assert_eq!((stats.lines, stats.words, stats.chars), (2, 3, 19));
    /// ```
    pub fn of(text: &str) -> TextStats {
        let blank = text.trim().is_empty();
        TextStats {
            lines: if blank { 0 } else { split_lines(text).count() },
            words: if blank { 0 } else { text.split_whitespace().count() },
            chars: text.chars().count(),
        }
    }

    /// Returns the absolute differences to `other`.
    pub fn delta(&self, other: &TextStats) -> StatsDelta {
        StatsDelta {
            lines: abs_diff(self.lines, other.lines),
            words: abs_diff(self.words, other.words),
            chars: abs_diff(self.chars, other.chars),
        }
    }
}

impl fmt::Display for TextStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Lines: {} | Words: {} | Characters: {}",
            self.lines, self.words, self.chars
        )
    }
}

/// Absolute differences between the [`TextStats`] of two texts.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsDelta {
    pub lines: usize,
    pub words: usize,
    pub chars: usize,
}

impl fmt::Display for StatsDelta {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Lines Diff: {} | Words Diff: {} | Characters Diff: {}",
            self.lines, self.words, self.chars
        )
    }
}

fn abs_diff(a: usize, b: usize) -> usize {
    if a > b {
        a - b
    } else {
        b - a
    }
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Given a string splits it into lines.
///
/// The line break is kept at the end of each line.  `\r\n` counts as a
/// single break, as do all other Unicode line boundaries.
fn split_lines(s: &str) -> impl Iterator<Item = &str> {
    let mut iter = s.char_indices().peekable();
    let mut last_pos = 0;

    std::iter::from_fn(move || {
        while let Some((idx, c)) = iter.next() {
            if !is_line_boundary(c) {
                continue;
            }
            let mut end = idx + c.len_utf8();
            if c == '\r' && iter.peek().map_or(false, |x| x.1 == '\n') {
                iter.next();
                end += 1;
            }
            let rv = &s[last_pos..end];
            last_pos = end;
            return Some(rv);
        }
        if last_pos < s.len() {
            let rv = &s[last_pos..];
            last_pos = s.len();
            Some(rv)
        } else {
            None
        }
    })
}

#[test]
fn test_split_lines() {
    assert_eq!(
        split_lines("first\nsecond\rthird\r\nfourth\u{2028}last").collect::<Vec<_>>(),
        vec!["first\n", "second\r", "third\r\n", "fourth\u{2028}", "last"]
    );
    assert_eq!(split_lines("\n\n").collect::<Vec<_>>(), vec!["\n", "\n"]);
    assert_eq!(split_lines("\n").collect::<Vec<_>>(), vec!["\n"]);
    assert!(split_lines("").collect::<Vec<_>>().is_empty());
}

#[test]
fn test_stats() {
    assert_eq!(TextStats::of(""), TextStats::default());
    assert_eq!(
        TextStats::of("  \n\t"),
        TextStats {
            lines: 0,
            words: 0,
            chars: 4
        }
    );
    assert_eq!(
        TextStats::of("Hello World"),
        TextStats {
            lines: 1,
            words: 2,
            chars: 11
        }
    );
    assert_eq!(
        TextStats::of("a\n\nb\n").to_string(),
        "Lines: 3 | Words: 2 | Characters: 5"
    );
}

#[test]
fn test_delta() {
    let a = TextStats::of("one two\nthree");
    let b = TextStats::of("one two three four");
    let delta = a.delta(&b);
    assert_eq!(
        delta,
        StatsDelta {
            lines: 1,
            words: 1,
            chars: 5
        }
    );
    assert_eq!(delta, b.delta(&a));
    assert_eq!(
        delta.to_string(),
        "Lines Diff: 1 | Words Diff: 1 | Characters Diff: 5"
    );
}
