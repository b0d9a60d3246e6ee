use std::fmt;
use std::ops::Range;

/// The kind of an [`EditOp`].
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum OpKind {
    /// The run is identical in both texts.
    Equal,
    /// The run only exists in text `b`.
    Insert,
    /// The run only exists in text `a`.
    Delete,
    /// The run in `a` was substituted by a different run in `b`.
    Replace,
}

impl OpKind {
    /// Returns the kind seen from the other side (insert and delete swap).
    pub fn mirrored(self) -> OpKind {
        match self {
            OpKind::Insert => OpKind::Delete,
            OpKind::Delete => OpKind::Insert,
            other => other,
        }
    }

    /// Returns the lowercase name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            OpKind::Equal => "equal",
            OpKind::Insert => "insert",
            OpKind::Delete => "delete",
            OpKind::Replace => "replace",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified span of a comparison.
///
/// `a_start..a_end` is the half-open character range into text `a`,
/// `b_start..b_end` the one into text `b`.  Depending on the kind one of
/// the ranges is empty:
///
/// | kind      | `a` range  | `b` range  |
/// |-----------|------------|------------|
/// | `Equal`   | non-empty  | same length as `a` |
/// | `Insert`  | empty      | non-empty  |
/// | `Delete`  | non-empty  | empty      |
/// | `Replace` | non-empty  | non-empty  |
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditOp {
    pub kind: OpKind,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

impl EditOp {
    /// Creates an op from its kind and ranges.
    pub fn new(kind: OpKind, a_range: Range<usize>, b_range: Range<usize>) -> EditOp {
        EditOp {
            kind,
            a_start: a_range.start,
            a_end: a_range.end,
            b_start: b_range.start,
            b_end: b_range.end,
        }
    }

    /// Returns the range into text `a`.
    pub fn a_range(&self) -> Range<usize> {
        self.a_start..self.a_end
    }

    /// Returns the range into text `b`.
    pub fn b_range(&self) -> Range<usize> {
        self.b_start..self.b_end
    }

    /// Number of characters this op covers in `a`.
    pub fn a_len(&self) -> usize {
        self.a_end - self.a_start
    }

    /// Number of characters this op covers in `b`.
    pub fn b_len(&self) -> usize {
        self.b_end - self.b_start
    }

    /// Returns the same op as seen when comparing `b` against `a`.
    pub fn mirrored(&self) -> EditOp {
        EditOp::new(self.kind.mirrored(), self.b_range(), self.a_range())
    }
}

impl fmt::Display for EditOp {
    /// Formats as `kind(a_start,a_end,b_start,b_end)`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}({},{},{},{})",
            self.kind, self.a_start, self.a_end, self.b_start, self.b_end
        )
    }
}

#[test]
fn test_mirrored() {
    let op = EditOp::new(OpKind::Insert, 4..4, 4..9);
    assert_eq!(op.mirrored(), EditOp::new(OpKind::Delete, 4..9, 4..4));
    assert_eq!(op.mirrored().mirrored(), op);
    let op = EditOp::new(OpKind::Replace, 1..2, 3..6);
    assert_eq!(op.mirrored(), EditOp::new(OpKind::Replace, 3..6, 1..2));
}

#[test]
fn test_display() {
    let op = EditOp::new(OpKind::Equal, 0..11, 0..11);
    assert_eq!(op.to_string(), "equal(0,11,0,11)");
    assert_eq!(op.a_len(), 11);
    assert_eq!(op.b_len(), 11);
}
