//! Recursive longest-matching-block algorithm.
//!
//! * time: `O(N * M)` worst case, typically far less because only the
//!   positions of a given element in `b` are visited
//! * space: `O(N + M)`
//!
//! The longest contiguous run common to both sequences is located first,
//! then the regions left and right of it are handled the same way until no
//! common element remains.  This maximizes the matched length rather than
//! minimizing the number of edits.  Among equally long runs the one that
//! starts earliest in `a`, then earliest in `b`, wins.
//!
//! Every stretch between two matching blocks is reported as a deletion of
//! the `a` side followed by an insertion of the `b` side.  Wrap the hook in
//! a [`Replace`](crate::algorithms::Replace) to see those as replacements.
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::{Index, Range};

use crate::algorithms::utils::{is_empty_range, ElementIndex};
use crate::algorithms::EditHook;

/// A run of `len` equal items starting at `a` in the first and `b` in the
/// second sequence.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Ord, PartialOrd)]
pub struct MatchingBlock {
    pub a: usize,
    pub b: usize,
    pub len: usize,
}

impl MatchingBlock {
    /// The range the block covers in the first sequence.
    pub fn a_range(&self) -> Range<usize> {
        self.a..self.a + self.len
    }

    /// The range the block covers in the second sequence.
    pub fn b_range(&self) -> Range<usize> {
        self.b..self.b + self.len
    }
}

/// Finds the longest run of equal items in `a[a_range]` and `b[b_range]`.
///
/// `index` must have been built over (a superset of) `b_range` of `b`.
/// If no item matches a block of length zero at the start of both ranges is
/// returned.
pub fn find_longest_match<Old, New>(
    a: &Old,
    a_range: Range<usize>,
    b: &New,
    b_range: Range<usize>,
    index: &ElementIndex<'_, Old::Output>,
) -> MatchingBlock
where
    Old: Index<usize> + ?Sized,
    New: Index<usize, Output = Old::Output> + ?Sized,
    Old::Output: Hash + Eq,
{
    let mut best = MatchingBlock {
        a: a_range.start,
        b: b_range.start,
        len: 0,
    };

    // run length of the match ending at each position of `b`, for the
    // previous and the current row of `a`
    let mut prev: HashMap<usize, usize> = HashMap::new();
    let mut cur: HashMap<usize, usize> = HashMap::new();
    for i in a_range.clone() {
        for &j in index.positions_in(&a[i], b_range.clone()) {
            let k = j
                .checked_sub(1)
                .and_then(|before| prev.get(&before))
                .map_or(0, |&k| k)
                + 1;
            cur.insert(j, k);
            if k > best.len {
                best = MatchingBlock {
                    a: i + 1 - k,
                    b: j + 1 - k,
                    len: k,
                };
            }
        }
        std::mem::swap(&mut prev, &mut cur);
        cur.clear();
    }

    // popular items are not indexed, so runs may continue over them
    while best.a > a_range.start && best.b > b_range.start && b[best.b - 1] == a[best.a - 1] {
        best.a -= 1;
        best.b -= 1;
        best.len += 1;
    }
    while best.a + best.len < a_range.end
        && best.b + best.len < b_range.end
        && b[best.b + best.len] == a[best.a + best.len]
    {
        best.len += 1;
    }

    best
}

/// Returns the matching blocks of `a[a_range]` and `b[b_range]`.
///
/// Blocks are ordered by position and never adjacent: two blocks that
/// would touch in both sequences are merged into one.
pub fn matching_blocks<Old, New>(
    a: &Old,
    a_range: Range<usize>,
    b: &New,
    b_range: Range<usize>,
    autojunk: bool,
) -> Vec<MatchingBlock>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize, Output = Old::Output> + ?Sized,
    Old::Output: Hash + Eq,
{
    if is_empty_range(&a_range) || is_empty_range(&b_range) {
        return Vec::new();
    }

    let index = ElementIndex::new(b, b_range.clone(), autojunk);
    if index.popular_count() > 0 {
        tracing::trace!(popular = index.popular_count(), "ignoring popular elements");
    }

    let mut blocks = Vec::new();
    let mut pending = vec![(a_range, b_range)];
    while let Some((a_range, b_range)) = pending.pop() {
        let block = find_longest_match(a, a_range.clone(), b, b_range.clone(), &index);
        if block.len == 0 {
            continue;
        }
        tracing::trace!(a = block.a, b = block.b, len = block.len, "matching block");
        if a_range.start < block.a && b_range.start < block.b {
            pending.push((a_range.start..block.a, b_range.start..block.b));
        }
        if block.a + block.len < a_range.end && block.b + block.len < b_range.end {
            pending.push((
                block.a + block.len..a_range.end,
                block.b + block.len..b_range.end,
            ));
        }
        blocks.push(block);
    }
    blocks.sort();

    let mut merged: Vec<MatchingBlock> = Vec::with_capacity(blocks.len());
    for block in blocks {
        match merged.last_mut() {
            Some(last) if last.a + last.len == block.a && last.b + last.len == block.b => {
                last.len += block.len;
            }
            _ => merged.push(block),
        }
    }
    merged
}

/// Longest-matching-block diff algorithm.
///
/// Diff `a`, between indices `a_range` and `b` between indices `b_range`.
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
    diff_autojunk(d, a, a_range, b, b_range, false)
}

/// Longest-matching-block diff algorithm with the popularity heuristic.
///
/// Like [`diff`] but with `autojunk` enabled elements that are very common
/// in a long `b` do not seed matches.  This is faster on large inputs and
/// yields fewer, coarser blocks.
pub fn diff_autojunk<Old, New, H>(
    d: &mut H,
    a: &Old,
    a_range: Range<usize>,
    b: &New,
    b_range: Range<usize>,
    autojunk: bool,
) -> Result<(), H::Error>
where
    Old: Index<usize> + ?Sized,
    New: Index<usize, Output = Old::Output> + ?Sized,
    Old::Output: Hash + Eq,
    H: EditHook,
{
    let blocks = matching_blocks(a, a_range.clone(), b, b_range.clone(), autojunk);

    let mut i = a_range.start;
    let mut j = b_range.start;
    let end = MatchingBlock {
        a: a_range.end,
        b: b_range.end,
        len: 0,
    };
    for block in blocks.iter().chain(Some(&end)) {
        if i < block.a {
            d.delete(i..block.a, j)?;
        }
        if j < block.b {
            d.insert(block.a, j..block.b)?;
        }
        if block.len > 0 {
            d.equal(block.a_range(), block.b_range())?;
        }
        i = block.a + block.len;
        j = block.b + block.len;
    }

    d.finish()
}

/// Shortcut for diffing slices.
pub fn diff_slices<H, T>(d: &mut H, a: &[T], b: &[T]) -> Result<(), H::Error>
where
    H: EditHook,
    T: Eq + Hash,
{
    diff(d, a, 0..a.len(), b, 0..b.len())
}

#[cfg(test)]
fn blocks_of(a: &str, b: &str) -> Vec<(usize, usize, usize)> {
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();
    matching_blocks(&a[..], 0..a.len(), &b[..], 0..b.len(), false)
        .into_iter()
        .map(|m| (m.a, m.b, m.len))
        .collect()
}

#[test]
fn test_longest_match_prefers_earliest() {
    let a = "xabyab".chars().collect::<Vec<_>>();
    let b = "abab".chars().collect::<Vec<_>>();
    let index = ElementIndex::new(&b[..], 0..b.len(), false);
    let m = find_longest_match(&a[..], 0..a.len(), &b[..], 0..b.len(), &index);
    assert_eq!(m, MatchingBlock { a: 1, b: 0, len: 2 });

    let m = find_longest_match(&a[..], 3..a.len(), &b[..], 0..b.len(), &index);
    assert_eq!(m, MatchingBlock { a: 4, b: 0, len: 2 });

    let m = find_longest_match(&a[..], 0..1, &b[..], 0..b.len(), &index);
    assert_eq!(m, MatchingBlock { a: 0, b: 0, len: 0 });
}

#[test]
fn test_matching_blocks() {
    assert_eq!(blocks_of("abxcd", "abcd"), vec![(0, 0, 2), (3, 2, 2)]);
    assert_eq!(blocks_of("Hello World", "Hello World!"), vec![(0, 0, 11)]);
    assert_eq!(blocks_of("abc", "xyz"), vec![]);
    assert_eq!(blocks_of("", "abc"), vec![]);
    // "qabxcd" / "abycdf" is the textbook example of sequence matchers
    assert_eq!(blocks_of("qabxcd", "abycdf"), vec![(1, 0, 2), (4, 3, 2)]);
}

#[test]
fn test_crossing_matches() {
    assert_eq!(blocks_of("abcd", "abcd"), vec![(0, 0, 4)]);
    // only one of two crossing matches can be kept
    assert_eq!(blocks_of("ab", "ba"), vec![(0, 1, 1)]);
    assert_eq!(blocks_of("ba", "ab"), vec![(0, 1, 1)]);
}

#[test]
fn test_diff() {
    let a: &[usize] = &[0, 1, 2, 3, 4];
    let b: &[usize] = &[0, 1, 2, 9, 4];

    let mut d = crate::algorithms::Replace::new(crate::algorithms::Capture::new());
    diff_slices(&mut d, a, b).unwrap();
    insta::assert_debug_snapshot!(d.into_inner().ops(), @r###"
    [
        EditOp {
            kind: Equal,
            a_start: 0,
            a_end: 3,
            b_start: 0,
            b_end: 3,
        },
        EditOp {
            kind: Replace,
            a_start: 3,
            a_end: 4,
            b_start: 3,
            b_end: 4,
        },
        EditOp {
            kind: Equal,
            a_start: 4,
            a_end: 5,
            b_start: 4,
            b_end: 5,
        },
    ]
    "###);
}

#[test]
fn test_raw_script() {
    let a: &[char] = &['a', 'x', 'b'];
    let b: &[char] = &['a', 'y', 'y', 'b', 'c'];

    let mut d = crate::algorithms::Capture::new();
    diff_slices(&mut d, a, b).unwrap();
    let ops = d
        .ops()
        .iter()
        .map(|op| op.to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        ops,
        vec![
            "equal(0,1,0,1)",
            "delete(1,2,1,1)",
            "insert(2,2,1,3)",
            "equal(2,3,3,4)",
            "insert(3,3,4,5)",
        ]
    );
}

#[test]
fn test_autojunk_extends_over_popular() {
    // 'x' is popular in b; matches may still run through it once seeded
    let mut a = String::from("12");
    a.push_str(&"x".repeat(10));
    a.push_str("34");
    let mut b = "x".repeat(190);
    b.push_str("12");
    b.push_str(&"x".repeat(10));
    b.push_str("34");
    let a = a.chars().collect::<Vec<_>>();
    let b = b.chars().collect::<Vec<_>>();

    let blocks = matching_blocks(&a[..], 0..a.len(), &b[..], 0..b.len(), true);
    assert_eq!(blocks, vec![MatchingBlock { a: 0, b: 190, len: 14 }]);
}
