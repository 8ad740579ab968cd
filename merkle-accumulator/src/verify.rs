//! Root reconstruction from an inclusion proof.
//!
//! Pure functions, no tree required. Starting from the leaf, each sibling is
//! hashed on the right when the current index bit is 0 and on the left when it
//! is 1, then the index is shifted right. This is the exact recomputation the
//! settlement verifier performs.

use tracing::debug;

use crate::{AccumulatorError, CryptoHash, InclusionProof, MerkleHasher, Result, hex_hash};

/// Recompute the root reached from `leaf` at `leaf_index` along `siblings`.
pub fn compute_root<H: MerkleHasher>(
    leaf: &CryptoHash,
    leaf_index: usize,
    siblings: &[CryptoHash],
) -> CryptoHash {
    let mut index = leaf_index;
    siblings.iter().fold(*leaf, |current, sibling| {
        let parent = if index & 1 == 0 {
            H::hash_pair(&current, sibling)
        } else {
            H::hash_pair(sibling, &current)
        };
        index >>= 1;
        parent
    })
}

/// Bare inclusion check: does `leaf` at `leaf_index` reach `root` along
/// `siblings`?
///
/// Performs no shape checks; use [`InclusionProof::verify`] for that.
pub fn verify_inclusion<H: MerkleHasher>(
    leaf: &CryptoHash,
    leaf_index: usize,
    siblings: &[CryptoHash],
    root: &CryptoHash,
) -> bool {
    compute_root::<H>(leaf, leaf_index, siblings) == *root
}

impl InclusionProof {
    /// Recompute the root this proof leads to from `leaf`.
    pub fn compute_root<H: MerkleHasher>(&self, leaf: &CryptoHash) -> CryptoHash {
        compute_root::<H>(leaf, self.leaf_index(), self.siblings())
    }

    /// Verify that `leaf` is included under `expected_root`.
    ///
    /// Fails with [`AccumulatorError::InvalidProof`] if the proof is malformed
    /// for its batch or reconstructs a different root.
    pub fn verify<H: MerkleHasher>(
        &self,
        leaf: &CryptoHash,
        expected_root: &CryptoHash,
    ) -> Result<()> {
        self.validate()?;

        let computed_root = self.compute_root::<H>(leaf);
        if &computed_root != expected_root {
            debug!(
                hasher = H::NAME,
                leaf_index = self.leaf_index(),
                leaf_count = self.leaf_count(),
                "inclusion proof reconstructs a different root"
            );
            return Err(AccumulatorError::InvalidProof(format!(
                "root hash mismatch: expected {}, got {}",
                hex_hash::encode(expected_root),
                hex_hash::encode(&computed_root)
            )));
        }
        Ok(())
    }
}
