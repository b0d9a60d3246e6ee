use std::fmt;

use crate::algorithms::get_diff_ratio;
use crate::buffer::TextBuffer;
use crate::types::{EditOp, OpKind};

/// The outcome of comparing two texts.
///
/// Holds the ordered [`EditOp`]s, which cover both texts completely and
/// without overlap, plus statistics derived from them.  The result does
/// not borrow the texts; pass the [`TextBuffer`]s again to
/// [`ComparisonResult::iter_changes`] to resolve ops into text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonResult {
    similarity_ratio: f64,
    total_chars_a: usize,
    total_chars_b: usize,
    matched_chars: usize,
    different_chars: usize,
    ops: Vec<EditOp>,
}

impl ComparisonResult {
    /// Builds a result from ops covering texts of `a_len` and `b_len` chars.
    pub(crate) fn from_ops(ops: Vec<EditOp>, a_len: usize, b_len: usize) -> ComparisonResult {
        let matched_chars = ops
            .iter()
            .filter(|op| op.kind == OpKind::Equal)
            .map(|op| op.a_len())
            .sum::<usize>();
        ComparisonResult {
            similarity_ratio: get_diff_ratio(&ops, a_len, b_len),
            total_chars_a: a_len,
            total_chars_b: b_len,
            matched_chars,
            different_chars: a_len + b_len - 2 * matched_chars,
            ops,
        }
    }

    /// Returns the edit operations in order.
    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Consumes the result returning the edit operations.
    pub fn into_ops(self) -> Vec<EditOp> {
        self.ops
    }

    /// Return a measure of the texts' similarity in the range `0..=1`.
    ///
    /// This is `2 * matched_chars / (total_chars_a + total_chars_b)`, or
    /// `1.0` if both texts are empty.
    ///
    /// ```rust
    /// let result = textcompare::compare("abcd", "bcde");
    /// assert_eq!(result.similarity_ratio(), 0.75);
    /// ```
    pub fn similarity_ratio(&self) -> f64 {
        self.similarity_ratio
    }

    /// The similarity ratio as a percentage.
    pub fn similarity_percent(&self) -> f64 {
        self.similarity_ratio * 100.0
    }

    /// Number of characters in text `a`.
    pub fn total_chars_a(&self) -> usize {
        self.total_chars_a
    }

    /// Number of characters in text `b`.
    pub fn total_chars_b(&self) -> usize {
        self.total_chars_b
    }

    /// Number of characters covered by equal runs (counted once).
    pub fn matched_chars(&self) -> usize {
        self.matched_chars
    }

    /// Number of characters of either text outside of equal runs.
    pub fn different_chars(&self) -> usize {
        self.different_chars
    }

    /// Number of characters only present in `b`.
    pub fn added_chars(&self) -> usize {
        self.sum_len(OpKind::Insert, EditOp::b_len)
    }

    /// Number of characters only present in `a`.
    pub fn deleted_chars(&self) -> usize {
        self.sum_len(OpKind::Delete, EditOp::a_len)
    }

    /// Number of characters of `a` that were replaced.
    pub fn replaced_chars_a(&self) -> usize {
        self.sum_len(OpKind::Replace, EditOp::a_len)
    }

    /// Number of characters of `b` that replaced something in `a`.
    pub fn replaced_chars_b(&self) -> usize {
        self.sum_len(OpKind::Replace, EditOp::b_len)
    }

    /// Number of ops that are not [`OpKind::Equal`].
    pub fn difference_count(&self) -> usize {
        self.ops.iter().filter(|op| op.kind != OpKind::Equal).count()
    }

    /// Returns `true` if both texts are the same.
    pub fn is_identical(&self) -> bool {
        self.different_chars == 0
    }

    fn sum_len(&self, kind: OpKind, len: fn(&EditOp) -> usize) -> usize {
        self.ops.iter().filter(|op| op.kind == kind).map(len).sum()
    }

    /// Resolves one op into the text it stands for.
    ///
    /// An equal op yields one [`ChangeTag::Equal`] change, inserts and
    /// deletes yield one change each, and a replacement yields the deleted
    /// text followed by the inserted text.  `a` and `b` must be the buffers
    /// the result was computed from.
    pub fn iter_changes<'s>(
        &self,
        op: &EditOp,
        a: &TextBuffer<'s>,
        b: &TextBuffer<'s>,
    ) -> impl Iterator<Item = Change<'s>> {
        let old = Change {
            tag: ChangeTag::Delete,
            a_index: Some(op.a_start),
            b_index: None,
            value: a.slice(op.a_range()),
        };
        let new = Change {
            tag: ChangeTag::Insert,
            a_index: None,
            b_index: Some(op.b_start),
            value: b.slice(op.b_range()),
        };
        let (first, second) = match op.kind {
            OpKind::Equal => (
                Some(Change {
                    tag: ChangeTag::Equal,
                    b_index: Some(op.b_start),
                    ..old
                }),
                None,
            ),
            OpKind::Delete => (Some(old), None),
            OpKind::Insert => (Some(new), None),
            OpKind::Replace => (Some(old), Some(new)),
        };
        first.into_iter().chain(second)
    }

    /// Resolves all ops into the text they stand for.
    pub fn iter_all_changes<'x, 's>(
        &'x self,
        a: &'x TextBuffer<'s>,
        b: &'x TextBuffer<'s>,
    ) -> impl Iterator<Item = Change<'s>> + 'x {
        self.ops
            .iter()
            .flat_map(move |op| self.iter_changes(op, a, b))
    }
}

impl fmt::Display for ComparisonResult {
    /// Renders the one line summary, for instance
    /// `similarity 95.7% | a: 11 chars | b: 12 chars | matching: 11 chars | 1 difference`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let differences = self.difference_count();
        write!(
            f,
            "similarity {:.1}% | a: {} chars | b: {} chars | matching: {} chars | {} difference{}",
            self.similarity_percent(),
            self.total_chars_a,
            self.total_chars_b,
            self.matched_chars,
            differences,
            if differences == 1 { "" } else { "s" }
        )
    }
}

/// The tag of a [`Change`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd)]
pub enum ChangeTag {
    /// The text is in both inputs.
    Equal,
    /// The text is only in `a`.
    Delete,
    /// The text is only in `b`.
    Insert,
}

impl fmt::Display for ChangeTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match &self {
                ChangeTag::Equal => ' ',
                ChangeTag::Delete => '-',
                ChangeTag::Insert => '+',
            }
        )
    }
}

/// A run of text resolved from an [`EditOp`].
///
/// This type is returned from [`ComparisonResult::iter_changes`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Change<'s> {
    tag: ChangeTag,
    a_index: Option<usize>,
    b_index: Option<usize>,
    value: &'s str,
}

impl<'s> Change<'s> {
    /// Returns the change tag.
    pub fn tag(&self) -> ChangeTag {
        self.tag
    }

    /// Returns the character position in `a` if the text is part of `a`.
    pub fn a_index(&self) -> Option<usize> {
        self.a_index
    }

    /// Returns the character position in `b` if the text is part of `b`.
    pub fn b_index(&self) -> Option<usize> {
        self.b_index
    }

    /// Returns the text of the change.
    pub fn value(&self) -> &'s str {
        self.value
    }
}

impl<'s> fmt::Display for Change<'s> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.tag, self.value)
    }
}

#[test]
fn test_statistics() {
    let result = crate::compare("The quick brown fox", "The quick brown cat!");
    assert_eq!(result.total_chars_a(), 19);
    assert_eq!(result.total_chars_b(), 20);
    assert_eq!(result.matched_chars(), 16);
    assert_eq!(result.different_chars(), 7);
    assert_eq!(result.replaced_chars_a(), 3);
    assert_eq!(result.replaced_chars_b(), 4);
    assert_eq!(result.added_chars(), 0);
    assert_eq!(result.deleted_chars(), 0);
    assert_eq!(result.difference_count(), 1);
    assert!(!result.is_identical());
    assert_eq!(
        result.to_string(),
        "similarity 82.1% | a: 19 chars | b: 20 chars | matching: 16 chars | 1 difference"
    );
}

#[test]
fn test_iter_all_changes() {
    let a = TextBuffer::new("Hello World");
    let b = TextBuffer::new("Hallo World!");
    let result = crate::compare_buffers(&a, &b);
    let changes = result
        .iter_all_changes(&a, &b)
        .map(|change| change.to_string())
        .collect::<Vec<_>>();
    assert_eq!(changes, vec![" H", "-e", "+a", " llo World", "+!"]);

    let first = result.iter_all_changes(&a, &b).next().unwrap();
    assert_eq!(first.a_index(), Some(0));
    assert_eq!(first.b_index(), Some(0));
    assert_eq!(first.tag(), ChangeTag::Equal);
}
