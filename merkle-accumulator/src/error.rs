use thiserror::Error;

/// Alias for `core::result::Result<T, AccumulatorError>`.
pub type Result<T> = core::result::Result<T, AccumulatorError>;

/// Errors from Merkle accumulator operations.
///
/// All variants are deterministic validation failures; none of them is worth
/// retrying with the same input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccumulatorError {
    /// The accumulator was asked to build a tree from unusable input, such as
    /// an empty batch.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A proof was requested for a leaf that is not part of the batch.
    #[error("leaf index {index} is out of range (leaf count {leaf_count})")]
    IndexOutOfRange {
        /// The requested leaf index.
        index: usize,
        /// Number of leaves in the batch.
        leaf_count: usize,
    },
    /// A proof is malformed or does not reconstruct the expected root.
    #[error("invalid proof: {0}")]
    InvalidProof(String),
    /// A hash crossing the process boundary was not 32 bytes of hex.
    #[error("invalid hex hash: {0}")]
    InvalidHex(String),
}
