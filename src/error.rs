//! Error types for configured comparisons.
use std::fmt;

/// Names one of the two compared texts.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Side {
    /// The first text (`a`).
    A,
    /// The second text (`b`).
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Side::A => "a",
            Side::B => "b",
        })
    }
}

/// Errors that can occur when comparing with a [`CompareConfig`](crate::CompareConfig).
///
/// Plain [`compare`](crate::compare) never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompareError {
    /// A text is longer than the configured limit.  Texts are never
    /// truncated to fit.
    #[error("input too large: text {side} has {len} chars, the limit is {limit}")]
    InputTooLarge { side: Side, len: usize, limit: usize },
}

#[test]
fn test_display() {
    let err = CompareError::InputTooLarge {
        side: Side::B,
        len: 12,
        limit: 10,
    };
    assert_eq!(
        err.to_string(),
        "input too large: text b has 12 chars, the limit is 10"
    );
}
