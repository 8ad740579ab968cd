//! Merkle accumulator for settlement batches.
//!
//! A batch of already-hashed, 32-byte invocation commitments is folded into a
//! binary Merkle tree once, after the batch is final. The tree exposes the
//! root that gets settled and an inclusion proof for every leaf, so any single
//! invocation can later be shown to be part of the settled batch.
//!
//! Parents are `H(left || right)` over the raw bytes of the two children. The
//! last node of an odd-length layer is paired with a copy of itself, never
//! with padding. Verifiers depend on this exact rule.
//!
//! # Core types
//!
//! - [`MerkleAccumulator`] — the immutable tree (root, layers, proofs).
//! - [`InclusionProof`] — ordered sibling hashes for one leaf.
//! - [`BatchCommitment`] — root summary handed to settlement.
//! - [`MerkleHasher`] — the pair hash; [`Blake3Hasher`] (default),
//!   [`Sha256Hasher`] and [`Keccak256Hasher`] are provided.

#![warn(missing_docs)]

mod commitment;
mod error;
mod hash;
pub mod hex_hash;
mod proof;
mod tree;
mod verify;


pub use commitment::BatchCommitment;
pub use error::{AccumulatorError, Result};
pub use hash::{
    Blake3Hasher, CryptoHash, HASH_LENGTH, Keccak256Hasher, MerkleHasher, Sha256Hasher,
    expected_height,
};
pub use proof::{InclusionProof, MAX_PROOF_SIBLINGS};
pub use tree::MerkleAccumulator;
pub use verify::{compute_root, verify_inclusion};
