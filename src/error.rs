use thiserror::Error;

/// Alias for `core::result::Result<T, Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from Merkle root, proof generation, and proof transport
/// operations.
///
/// Verification is not represented here: a proof that fails to verify is an
/// ordinary `false` from [`Proof::verify`](crate::Proof::verify), not an
/// error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Tried to compute a root or generate a proof over an empty leaf
    /// sequence.
    #[error("leaf sequence is empty")]
    EmptyLeaves,
    /// Requested a proof for a leaf position outside the tree.
    #[error("leaf index {index} is out of range (leaf count {leaf_count})")]
    IndexOutOfRange {
        /// The requested leaf position.
        index: usize,
        /// Number of leaves in the tree.
        leaf_count: usize,
    },
    /// Proof bytes failed to encode or decode.
    #[error("invalid proof encoding: {0}")]
    InvalidEncoding(String),
}
