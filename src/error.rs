//! Errors returned when a tree can't be constructed or a traversal order can't be parsed.

/// Errors triggered by tree construction and configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The element size was zero.
    #[error("element size must be non-zero")]
    ZeroElementSize,
    /// A [`Builder`][crate::Builder] was asked to build a tree without a comparator.
    #[error("no comparator was supplied")]
    MissingComparator,
    /// A traversal order selector didn't name one of the known orders.
    #[error("unknown traversal order `{0}`")]
    InvalidOrder(String),
}
