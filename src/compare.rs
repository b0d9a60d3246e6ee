use crate::algorithms::capture_diff;
use crate::buffer::TextBuffer;
use crate::error::{CompareError, Side};
use crate::result::ComparisonResult;

/// A builder type config for more complex uses of [`compare`].
///
/// ```rust
/// # use textcompare::CompareConfig;
/// let result = CompareConfig::default()
///     .max_input_len(Some(10_000))
///     .compare("Hello World", "Hello World!")
///     .unwrap();
/// assert_eq!(result.matched_chars(), 11);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompareConfig {
    autojunk: bool,
    max_input_len: Option<usize>,
}

impl CompareConfig {
    /// Enables or disables the popularity heuristic.
    ///
    /// Disabled by default.  When enabled and `b` has at least 200 chars,
    /// chars that make up more than one percent of `b` do not start a
    /// match on their own.  Matches found through other chars still extend
    /// over them.  This is considerably faster on long texts with a small
    /// alphabet but can miss alignments, and the results are no longer
    /// symmetric.
    pub fn autojunk(&mut self, yes: bool) -> &mut Self {
        self.autojunk = yes;
        self
    }

    /// Limits the length of each input, in chars.
    ///
    /// By default there is no limit.  A longer input makes
    /// [`CompareConfig::compare`] fail with
    /// [`CompareError::InputTooLarge`] instead of being truncated.
    pub fn max_input_len(&mut self, limit: Option<usize>) -> &mut Self {
        self.max_input_len = limit;
        self
    }

    /// Compares two strings.
    pub fn compare(&self, a: &str, b: &str) -> Result<ComparisonResult, CompareError> {
        self.compare_buffers(&TextBuffer::new(a), &TextBuffer::new(b))
    }

    /// Compares two text buffers.
    pub fn compare_buffers(
        &self,
        a: &TextBuffer<'_>,
        b: &TextBuffer<'_>,
    ) -> Result<ComparisonResult, CompareError> {
        if let Some(limit) = self.max_input_len {
            for (side, len) in [(Side::A, a.len()), (Side::B, b.len())].iter().copied() {
                if len > limit {
                    tracing::warn!(%side, len, limit, "refusing to compare oversized input");
                    return Err(CompareError::InputTooLarge { side, len, limit });
                }
            }
        }
        Ok(self.run(a, b))
    }

    fn run(&self, a: &TextBuffer<'_>, b: &TextBuffer<'_>) -> ComparisonResult {
        let ops = capture_diff(a, 0..a.len(), b, 0..b.len(), self.autojunk);
        let result = ComparisonResult::from_ops(ops, a.len(), b.len());
        tracing::debug!(
            a_len = a.len(),
            b_len = b.len(),
            ops = result.ops().len(),
            ratio = result.similarity_ratio(),
            autojunk = self.autojunk,
            "compared texts"
        );
        result
    }
}

/// Compares two strings character by character.
///
/// This never fails: empty texts, control characters and completely
/// different texts all produce a well formed result.
///
/// ```rust
/// use textcompare::{compare, EditOp, OpKind};
///
/// let result = compare("Hello World", "Hello World!");
/// assert_eq!(result.ops(), &[
///     EditOp::new(OpKind::Equal, 0..11, 0..11),
///     EditOp::new(OpKind::Insert, 11..11, 11..12),
/// ]);
/// assert_eq!(result.matched_chars(), 11);
/// ```
pub fn compare(a: &str, b: &str) -> ComparisonResult {
    compare_buffers(&TextBuffer::new(a), &TextBuffer::new(b))
}

/// Compares two text buffers character by character.
///
/// Equivalent to [`compare`] for callers that keep the buffers around to
/// resolve the ops into text afterwards.
pub fn compare_buffers(a: &TextBuffer<'_>, b: &TextBuffer<'_>) -> ComparisonResult {
    CompareConfig::default().run(a, b)
}

#[test]
fn test_limit() {
    let mut config = CompareConfig::default();
    config.max_input_len(Some(5));
    assert!(config.compare("abcde", "abcde").is_ok());
    assert_eq!(
        config.compare("abc", "abcdef"),
        Err(CompareError::InputTooLarge {
            side: Side::B,
            len: 6,
            limit: 5
        })
    );
    assert_eq!(
        config.compare("abcdefg", "abcdef"),
        Err(CompareError::InputTooLarge {
            side: Side::A,
            len: 7,
            limit: 5
        })
    );
    // the limit counts chars, not bytes
    assert!(config.compare("ääääa", "").is_ok());
}

#[test]
fn test_config_matches_plain_compare() {
    let a = "The quick brown fox jumps over the lazy dog";
    let b = "The quick brown cat jumps over a lazy dog";
    let configured = CompareConfig::default().compare(a, b).unwrap();
    assert_eq!(configured, compare(a, b));
}

#[test]
fn test_autojunk() {
    // with 250 chars of b every space and 'a' is popular
    let a = "a a ".repeat(60) + "xyz";
    let b = "a a ".repeat(62) + "xy";
    let exact = compare(&a, &b);
    let junked = CompareConfig::default()
        .autojunk(true)
        .compare(&a, &b)
        .unwrap();

    assert_eq!(exact.matched_chars(), 242);
    assert!(junked.matched_chars() <= exact.matched_chars());
    let covered_a: usize = junked.ops().iter().map(|op| op.a_len()).sum();
    let covered_b: usize = junked.ops().iter().map(|op| op.b_len()).sum();
    assert_eq!(covered_a, a.len());
    assert_eq!(covered_b, b.len());
}
