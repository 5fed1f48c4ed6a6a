use thiserror::Error;

/// Errors returned by store and view operations.
///
/// Every failure is local to the offending call and recoverable by calling
/// again with different arguments. There is no fatal category and nothing to
/// retry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index went past a store's physical capacity or a view's logical
    /// length. `limit` is whichever of the two was exceeded.
    #[error("index {index} out of bounds (limit {limit})")]
    OutOfBounds { index: usize, limit: usize },

    /// Subview bounds were invalid: `start > end`, or `end` past the source
    /// view's length.
    #[error("invalid range {start}..{end} for a view of length {len}")]
    Range { start: usize, end: usize, len: usize },
}
