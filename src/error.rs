//! The error type shared by every structure in this crate.

/// Errors triggered by list, stack, and tree operations.
///
/// Every operation that returns one of these leaves its structure exactly as it was before the
/// call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A position past the addressable range of a [`LinkedList`][crate::LinkedList].
    #[error("position {position} is out of bounds for a list of length {len}")]
    OutOfBounds {
        /// The position that was requested.
        position: usize,
        /// The length of the list at the time of the request.
        len: usize,
    },
    /// `pop` or `peek` on an empty [`Stack`][crate::Stack].
    #[error("the stack is empty")]
    EmptyStack,
    /// The value to delete is not in the [`Tree`][crate::Tree].
    #[error("value not found in the tree")]
    NotFound,
}
