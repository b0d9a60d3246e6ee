//! The matching algorithm and its plumbing.
//!
//! The implementation in this module is relatively low level and exposes
//! the most generic bounds possible: any two indexable sequences (slices,
//! [`TextBuffer`](crate::TextBuffer)s, ...) whose items are `Hash + Eq`
//! can be compared.  Most users want [`compare`](crate::compare) instead.
//!
//! The algorithm reports the edit script to an [`EditHook`].  The hook only
//! sees positions, never values.  [`Capture`] records the script as
//! [`EditOp`]s and [`Replace`] coalesces it into maximal runs, which is
//! what [`capture_diff`] combines.

// general traits and utilities
mod capture;
mod hook;
mod replace;
pub mod utils;

use std::hash::Hash;
use std::ops::{Index, Range};

pub use capture::*;
pub use hook::*;
pub use replace::*;

use crate::types::{EditOp, OpKind};

// the actual diffing algorithm
pub mod matching;

/// Creates a diff between `a` and `b` and reports it to the hook.
///
/// Diffs `a`, between indices `a_range` and `b` between indices `b_range`.
pub fn diff<Old, New, H>(
    d: &mut H,
    a: &Old,
    a_range: Range<usize>,
    b: &New,
    b_range: Range<usize>,
) -> Result<(), H::Error>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize, Output = Old::Output> + ?Sized,
    Old::Output: Hash + Eq,
    H: EditHook,
{
    matching::diff(d, a, a_range, b, b_range)
}

/// Shortcut for diffing slices.
pub fn diff_slices<H, T>(d: &mut H, a: &[T], b: &[T]) -> Result<(), H::Error>
where
    H: EditHook,
    T: Eq + Hash,
{
    diff(d, a, 0..a.len(), b, 0..b.len())
}

/// Creates a diff between `a` and `b` capturing the ops.
///
/// This always uses [`Replace`] + [`Capture`], so the returned ops are
/// maximal runs and every gap with content on both sides is a single
/// [`OpKind::Replace`].
pub fn capture_diff<Old, New>(
    a: &Old,
    a_range: Range<usize>,
    b: &New,
    b_range: Range<usize>,
    autojunk: bool,
) -> Vec<EditOp>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize, Output = Old::Output> + ?Sized,
    Old::Output: Hash + Eq,
{
    let mut d = Replace::new(Capture::new());
    match matching::diff_autojunk(&mut d, a, a_range, b, b_range, autojunk) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    d.into_inner().into_ops()
}

/// Creates a diff between two slices capturing the ops.
pub fn capture_diff_slices<T>(a: &[T], b: &[T]) -> Vec<EditOp>
where
    T: Eq + Hash,
{
    capture_diff(a, 0..a.len(), b, 0..b.len(), false)
}

/// Return a measure of similarity in the range `0..=1`.
///
/// This is `2 * matched / (a_len + b_len)` where `matched` is the total
/// length of all [`OpKind::Equal`] ops.  Two empty sequences have a ratio
/// of `1.0`.
pub fn get_diff_ratio(ops: &[EditOp], a_len: usize, b_len: usize) -> f64 {
    let matches = ops
        .iter()
        .filter(|op| op.kind == OpKind::Equal)
        .map(|op| op.a_len())
        .sum::<usize>();
    let len = a_len + b_len;
    if len == 0 {
        1.0
    } else {
        2.0 * matches as f64 / len as f64
    }
}

#[test]
fn test_capture_diff_slices() {
    let ops = capture_diff_slices(&[1, 2, 3], &[1, 2, 3, 4]);
    assert_eq!(
        ops,
        vec![
            EditOp::new(OpKind::Equal, 0..3, 0..3),
            EditOp::new(OpKind::Insert, 3..3, 3..4),
        ]
    );
}

#[test]
fn test_ratio() {
    let ops = capture_diff_slices(&['a', 'b', 'c', 'd'], &['b', 'c', 'd', 'e']);
    assert_eq!(get_diff_ratio(&ops, 4, 4), 0.75);
    assert_eq!(get_diff_ratio(&[], 0, 0), 1.0);
    assert_eq!(get_diff_ratio(&[], 0, 3), 0.0);
}
