use std::ops::Range;

/// A trait for reacting to an edit script that turns text `a` into text `b`.
///
/// All positions are character indexes.  The algorithms invoke the hook
/// strictly left to right: the `a` range of every call starts where the
/// previous call's `a` range ended, and the same is true for `b`.
pub trait EditHook: Sized {
    /// The error produced from the hook methods.
    type Error;

    /// Called when `a[a_range]` and `b[b_range]` hold the same characters.
    /// Both ranges have the same length.
    fn equal(&mut self, a_range: Range<usize>, b_range: Range<usize>) -> Result<(), Self::Error> {
        let _ = a_range;
        let _ = b_range;
        Ok(())
    }

    /// Called when `a[a_range]` only exists in `a`.  `b_index` is the
    /// position in `b` the deletion happens at.
    fn delete(&mut self, a_range: Range<usize>, b_index: usize) -> Result<(), Self::Error> {
        let _ = a_range;
        let _ = b_index;
        Ok(())
    }

    /// Called when `b[b_range]` only exists in `b`.  `a_index` is the
    /// position in `a` the insertion happens at.
    fn insert(&mut self, a_index: usize, b_range: Range<usize>) -> Result<(), Self::Error> {
        let _ = a_index;
        let _ = b_range;
        Ok(())
    }

    /// Called when `a[a_range]` was substituted by `b[b_range]`.
    ///
    /// The default implementation invokes `delete` and `insert`.  Use the
    /// [`Replace`](crate::algorithms::Replace) hook to generate these from
    /// a plain delete/insert script.
    fn replace(&mut self, a_range: Range<usize>, b_range: Range<usize>) -> Result<(), Self::Error> {
        let a_start = a_range.start;
        self.delete(a_range, b_range.start)?;
        self.insert(a_start, b_range)
    }

    /// Always called at the end of the algorithm.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<'a, H: EditHook + 'a> EditHook for &'a mut H {
    type Error = H::Error;

    fn equal(&mut self, a_range: Range<usize>, b_range: Range<usize>) -> Result<(), Self::Error> {
        (*self).equal(a_range, b_range)
    }

    fn delete(&mut self, a_range: Range<usize>, b_index: usize) -> Result<(), Self::Error> {
        (*self).delete(a_range, b_index)
    }

    fn insert(&mut self, a_index: usize, b_range: Range<usize>) -> Result<(), Self::Error> {
        (*self).insert(a_index, b_range)
    }

    fn replace(&mut self, a_range: Range<usize>, b_range: Range<usize>) -> Result<(), Self::Error> {
        (*self).replace(a_range, b_range)
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        (*self).finish()
    }
}

#[test]
fn test_default_replace_splits() {
    struct Log(Vec<String>);
    impl EditHook for Log {
        type Error = ();
        fn delete(&mut self, a_range: Range<usize>, b_index: usize) -> Result<(), ()> {
            self.0.push(format!("delete {:?} @{}", a_range, b_index));
            Ok(())
        }
        fn insert(&mut self, a_index: usize, b_range: Range<usize>) -> Result<(), ()> {
            self.0.push(format!("insert @{} {:?}", a_index, b_range));
            Ok(())
        }
    }

    let mut log = Log(Vec::new());
    log.replace(3..5, 4..7).unwrap();
    assert_eq!(log.0, vec!["delete 3..5 @4", "insert @3 4..7"]);
}
