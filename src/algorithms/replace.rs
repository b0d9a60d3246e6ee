use std::ops::Range;

use crate::algorithms::EditHook;

/// An [`EditHook`] that coalesces an edit script into maximal runs.
///
/// Consecutive `equal` calls become one, consecutive deletions or
/// insertions become one, and a deletion adjacent to an insertion (in
/// either order) becomes a single `replace`.
pub struct Replace<H: EditHook> {
    d: H,
    del: Option<(Range<usize>, usize)>,
    ins: Option<(usize, Range<usize>)>,
    eq: Option<(Range<usize>, Range<usize>)>,
}

impl<H: EditHook> Replace<H> {
    /// Wraps another hook.
    pub fn new(d: H) -> Self {
        Replace {
            d,
            del: None,
            ins: None,
            eq: None,
        }
    }

    /// Returns the wrapped hook.
    pub fn into_inner(self) -> H {
        self.d
    }

    fn flush_eq(&mut self) -> Result<(), H::Error> {
        if let Some((a, b)) = self.eq.take() {
            self.d.equal(a, b)?;
        }
        Ok(())
    }

    fn flush_del_ins(&mut self) -> Result<(), H::Error> {
        match (self.del.take(), self.ins.take()) {
            (Some((a, _)), Some((_, b))) => self.d.replace(a, b),
            (Some((a, b_index)), None) => self.d.delete(a, b_index),
            (None, Some((a_index, b))) => self.d.insert(a_index, b),
            (None, None) => Ok(()),
        }
    }
}

impl<H: EditHook> AsRef<H> for Replace<H> {
    fn as_ref(&self) -> &H {
        &self.d
    }
}

impl<H: EditHook> AsMut<H> for Replace<H> {
    fn as_mut(&mut self) -> &mut H {
        &mut self.d
    }
}

impl<H: EditHook> EditHook for Replace<H> {
    type Error = H::Error;

    fn equal(&mut self, a_range: Range<usize>, b_range: Range<usize>) -> Result<(), H::Error> {
        self.flush_del_ins()?;
        self.eq = match self.eq.take() {
            Some((a, b)) => {
                debug_assert_eq!(a.end, a_range.start);
                debug_assert_eq!(b.end, b_range.start);
                Some((a.start..a_range.end, b.start..b_range.end))
            }
            None => Some((a_range, b_range)),
        };
        Ok(())
    }

    fn delete(&mut self, a_range: Range<usize>, b_index: usize) -> Result<(), H::Error> {
        self.flush_eq()?;
        self.del = match self.del.take() {
            Some((a, b_index0)) => {
                debug_assert_eq!(a.end, a_range.start);
                Some((a.start..a_range.end, b_index0))
            }
            None => Some((a_range, b_index)),
        };
        Ok(())
    }

    fn insert(&mut self, a_index: usize, b_range: Range<usize>) -> Result<(), H::Error> {
        self.flush_eq()?;
        self.ins = match self.ins.take() {
            Some((a_index0, b)) => {
                debug_assert_eq!(b.end, b_range.start);
                Some((a_index0, b.start..b_range.end))
            }
            None => Some((a_index, b_range)),
        };
        Ok(())
    }

    fn replace(&mut self, a_range: Range<usize>, b_range: Range<usize>) -> Result<(), H::Error> {
        let a_end = a_range.end;
        self.delete(a_range, b_range.start)?;
        self.insert(a_end, b_range)
    }

    fn finish(&mut self) -> Result<(), H::Error> {
        self.flush_eq()?;
        self.flush_del_ins()?;
        self.d.finish()
    }
}

#[test]
fn test_coalesces_runs() {
    use crate::algorithms::Capture;

    let mut d = Replace::new(Capture::new());
    d.equal(0..1, 0..1).unwrap();
    d.equal(1..3, 1..3).unwrap();
    d.delete(3..4, 3).unwrap();
    d.delete(4..5, 3).unwrap();
    d.insert(5, 3..4).unwrap();
    d.equal(5..6, 4..5).unwrap();
    d.insert(6, 5..7).unwrap();
    d.finish().unwrap();

    insta::assert_snapshot!(
        d.into_inner()
            .ops()
            .iter()
            .map(|op| op.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
        @r###"
    equal(0,3,0,3)
    replace(3,5,3,4)
    equal(5,6,4,5)
    insert(6,6,5,7)
    "###
    );
}

#[test]
fn test_insert_then_delete_is_replace() {
    use crate::algorithms::Capture;
    use crate::types::{EditOp, OpKind};

    let mut d = Replace::new(Capture::new());
    d.insert(0, 0..2).unwrap();
    d.delete(0..1, 2).unwrap();
    d.finish().unwrap();
    assert_eq!(
        d.into_inner().into_ops(),
        vec![EditOp::new(OpKind::Replace, 0..1, 0..2)]
    );
}
