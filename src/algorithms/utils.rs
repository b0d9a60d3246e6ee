use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::{Index, Range};

/// Inputs at least this long are subject to the popularity heuristic.
pub const AUTOJUNK_MIN_LEN: usize = 200;

/// Utility function to check if a range is empty that works on older rust versions
#[inline(always)]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn is_empty_range<T: PartialOrd<T>>(range: &Range<T>) -> bool {
    !(range.start < range.end)
}

/// Maps every element of a sequence to the ascending list of positions it
/// occurs at.
///
/// This is what the matcher uses to seed matches: for an element of `a` it
/// yields the candidate positions in `b` without scanning `b`.
pub struct ElementIndex<'b, T: ?Sized> {
    positions: HashMap<&'b T, Vec<usize>>,
    popular: usize,
}

impl<'b, T: Hash + Eq + ?Sized> ElementIndex<'b, T> {
    /// Indexes `lookup` between indices `range`.
    ///
    /// With `autojunk` enabled and a range of at least
    /// [`AUTOJUNK_MIN_LEN`] items, every element occurring more than
    /// `len / 100 + 1` times is considered popular and left out of the
    /// index.
    pub fn new<Idx>(lookup: &'b Idx, range: Range<usize>, autojunk: bool) -> ElementIndex<'b, T>
    where
        Idx: Index<usize, Output = T> + ?Sized,
    {
        let len = range.len();
        let mut positions: HashMap<&'b T, Vec<usize>> = HashMap::new();
        for index in range {
            positions.entry(&lookup[index]).or_default().push(index);
        }

        let mut popular = 0;
        if autojunk && len >= AUTOJUNK_MIN_LEN {
            let threshold = len / 100 + 1;
            positions.retain(|_, at| {
                let keep = at.len() <= threshold;
                if !keep {
                    popular += 1;
                }
                keep
            });
        }

        ElementIndex { positions, popular }
    }

    /// Returns the positions of `item` that fall within `range`.
    ///
    /// Popular elements have no positions.
    pub fn positions_in(&self, item: &T, range: Range<usize>) -> &[usize] {
        match self.positions.get(item) {
            Some(at) => {
                let start = at.partition_point(|&pos| pos < range.start);
                let end = at.partition_point(|&pos| pos < range.end);
                &at[start..end.max(start)]
            }
            None => &[],
        }
    }

    /// Number of distinct elements dropped as popular.
    pub fn popular_count(&self) -> usize {
        self.popular
    }
}

impl<'b, T: fmt::Debug + ?Sized> fmt::Debug for ElementIndex<'b, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("ElementIndex")
            .field("elements", &self.positions.len())
            .field("popular", &self.popular)
            .finish()
    }
}

#[test]
fn test_positions_in() {
    let seq = vec!['a', 'b', 'c', 'a', 'd', 'a'];
    let index = ElementIndex::new(&seq[..], 0..seq.len(), false);
    assert_eq!(index.positions_in(&'a', 0..6), &[0, 3, 5]);
    assert_eq!(index.positions_in(&'a', 1..5), &[3]);
    assert_eq!(index.positions_in(&'a', 4..4), &[] as &[usize]);
    assert_eq!(index.positions_in(&'z', 0..6), &[] as &[usize]);
    assert_eq!(index.popular_count(), 0);
}

#[test]
fn test_partial_range() {
    let seq = vec!['x', 'y', 'x', 'y'];
    let index = ElementIndex::new(&seq[..], 1..3, false);
    assert_eq!(index.positions_in(&'x', 0..4), &[2]);
    assert_eq!(index.positions_in(&'y', 0..4), &[1]);
}

#[test]
fn test_autojunk_drops_popular() {
    let mut seq = vec!['e'; 150];
    seq.extend("abcdefghijklmnopqrstuvwxyz".chars().cycle().take(60));
    let index = ElementIndex::new(&seq[..], 0..seq.len(), true);
    // 210 items: threshold is 3, 'e' occurs far more often, and every other
    // letter occurs two or three times.
    assert!(index.positions_in(&'e', 0..seq.len()).is_empty());
    assert_eq!(index.positions_in(&'a', 0..seq.len()), &[150, 176, 202]);
    assert_eq!(index.popular_count(), 1);

    let short = vec!['e'; 20];
    let index = ElementIndex::new(&short[..], 0..short.len(), true);
    assert_eq!(index.positions_in(&'e', 0..20).len(), 20);
}

#[test]
fn test_is_empty_range() {
    assert!(is_empty_range(&(0..0)));
    assert!(is_empty_range(&(3..1)));
    assert!(!is_empty_range(&(0..1)));
}
