use thiserror::Error;

/// Errors reported by the tree maps.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The key is already present and the map does not overwrite entries.
    #[error("key already exists in the tree")]
    DuplicateKey,
    /// A minimum or maximum removal was attempted on an empty tree.
    #[error("cannot remove from an empty tree")]
    EmptyTree,
    /// A structural diagnostic failed. The payload names the broken invariant.
    #[error("tree invariant violated: {0}")]
    InvariantViolation(&'static str),
}

/// Convenience alias for results returned by the tree maps.
pub type Result<T> = std::result::Result<T, Error>;
