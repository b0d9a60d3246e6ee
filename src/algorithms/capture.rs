use std::convert::Infallible;
use std::ops::Range;

use crate::algorithms::hook::EditHook;
use crate::types::{EditOp, OpKind};

/// An [`EditHook`] that captures all edit operations.
///
/// Wrap it in a [`Replace`](crate::algorithms::Replace) to get the
/// coalesced operations that [`ComparisonResult`](crate::ComparisonResult)
/// holds.
#[derive(Default, Clone, Debug)]
pub struct Capture(Vec<EditOp>);

impl Capture {
    /// Creates a new capture hook.
    pub fn new() -> Capture {
        Capture::default()
    }

    /// Converts the capture hook into a vector of ops.
    pub fn into_ops(self) -> Vec<EditOp> {
        self.0
    }

    /// Accesses the captured operations.
    pub fn ops(&self) -> &[EditOp] {
        &self.0
    }
}

impl EditHook for Capture {
    type Error = Infallible;

    fn equal(&mut self, a_range: Range<usize>, b_range: Range<usize>) -> Result<(), Self::Error> {
        self.0.push(EditOp::new(OpKind::Equal, a_range, b_range));
        Ok(())
    }

    fn delete(&mut self, a_range: Range<usize>, b_index: usize) -> Result<(), Self::Error> {
        self.0
            .push(EditOp::new(OpKind::Delete, a_range, b_index..b_index));
        Ok(())
    }

    fn insert(&mut self, a_index: usize, b_range: Range<usize>) -> Result<(), Self::Error> {
        self.0
            .push(EditOp::new(OpKind::Insert, a_index..a_index, b_range));
        Ok(())
    }

    fn replace(&mut self, a_range: Range<usize>, b_range: Range<usize>) -> Result<(), Self::Error> {
        self.0.push(EditOp::new(OpKind::Replace, a_range, b_range));
        Ok(())
    }
}

#[test]
fn test_capture_records_in_order() {
    let mut d = Capture::new();
    d.equal(0..2, 0..2).unwrap();
    d.insert(2, 2..3).unwrap();
    d.delete(2..4, 3).unwrap();
    d.finish().unwrap();
    assert_eq!(
        d.ops(),
        &[
            EditOp::new(OpKind::Equal, 0..2, 0..2),
            EditOp::new(OpKind::Insert, 2..2, 2..3),
            EditOp::new(OpKind::Delete, 2..4, 3..3),
        ]
    );
}
