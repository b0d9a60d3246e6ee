//! This crate compares two texts character by character.  It turns them
//! into an ordered list of edit operations (equal, insert, delete,
//! replace) with character positions into both texts, plus similarity
//! statistics.  The output is meant to drive any kind of rendering: a
//! terminal, a web page or a side by side GUI view.
//!
//! ```rust
//! use textcompare::{compare, OpKind};
//!
//! let result = compare("The quick brown fox", "The quick brown cat");
//! assert_eq!(result.matched_chars(), 16);
//! assert_eq!(result.ops()[1].kind, OpKind::Replace);
//! assert_eq!(result.ops()[1].a_range(), 16..19);
//! ```
//!
//! The crate is split into two levels:
//!
//! * [`algorithms`]: the longest-matching-block algorithm, generic over any
//!   indexable sequence, reporting to an [`EditHook`](algorithms::EditHook).
//! * The top level: [`compare`], [`CompareConfig`] and [`ComparisonResult`]
//!   working on text.
//!
//! # Algorithm
//!
//! The longest run of characters common to both texts is matched first,
//! then the parts to its left and to its right are matched the same way,
//! until nothing is left in common.  Between two matched runs whatever is
//! left of `a` is deleted, whatever is left of `b` is inserted, and if both
//! sides have content the stretch is a single replacement.  Equal runs of
//! the same length are picked by earliest position in `a`, then in `b`.
//!
//! Every character counts, including whitespace and control characters.
//! Nothing is normalized.
//!
//! # Similarity
//!
//! [`ComparisonResult::similarity_ratio`] is
//! `2 * matched / (len(a) + len(b))`, and `1.0` for two empty texts.
//!
//! # Optional Features
//!
//! * `serde`: makes [`ComparisonResult`], [`EditOp`] and [`TextStats`]
//!   serializable.  Enabled by default.
pub mod algorithms;
mod buffer;
mod compare;
mod error;
mod result;
mod stats;
mod types;

pub use self::buffer::TextBuffer;
pub use self::compare::{compare, compare_buffers, CompareConfig};
pub use self::error::{CompareError, Side};
pub use self::result::{Change, ChangeTag, ComparisonResult};
pub use self::stats::{StatsDelta, TextStats};
pub use self::types::{EditOp, OpKind};
