use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::{
    AccumulatorError, BatchCommitment, Blake3Hasher, CryptoHash, InclusionProof, MerkleHasher,
    Result, hash::expected_height, hex_hash,
};

/// An immutable binary Merkle tree over one settlement batch.
///
/// Layer 0 holds the leaves in batch order and each following layer holds
/// `ceil(len / 2)` parents, up to a final layer holding only the root. A
/// parent is `H(left, right)`; the last node of an odd-length layer has no
/// right neighbour and is paired with itself.
///
/// All layers are kept so proofs are read off without rehashing. The tree is
/// never mutated after construction; a changed batch means building a new
/// tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleAccumulator<H = Blake3Hasher> {
    layers: Vec<Vec<CryptoHash>>,
    root: CryptoHash,
    hash_node_calls: u64,
    hasher: PhantomData<H>,
}

impl<H: MerkleHasher> MerkleAccumulator<H> {
    /// Build a tree over `leaves`, taking ownership of them as layer 0.
    ///
    /// Fails with [`AccumulatorError::InvalidInput`] if the batch is empty.
    pub fn new(leaves: Vec<CryptoHash>) -> Result<Self> {
        if leaves.is_empty() {
            debug!(hasher = H::NAME, "refusing to build accumulator over empty batch");
            return Err(AccumulatorError::InvalidInput(
                "cannot build a Merkle accumulator from an empty batch".into(),
            ));
        }

        let leaf_count = leaves.len();
        let height = expected_height(leaf_count);
        let mut layers = Vec::with_capacity(height + 1);
        let mut hash_node_calls = 0u64;
        layers.push(leaves);

        while let Some(current) = layers.last().filter(|layer| layer.len() > 1) {
            let next = parent_layer::<H>(current);
            hash_node_calls += next.len() as u64;
            trace!(layer = layers.len(), width = next.len(), "built accumulator layer");
            layers.push(next);
        }

        let root = match layers.last().map(Vec::as_slice) {
            Some([root]) => *root,
            _ => {
                return Err(AccumulatorError::InvalidInput(format!(
                    "accumulator over {} leaves did not converge to a single root",
                    leaf_count
                )));
            }
        };

        debug!(
            hasher = H::NAME,
            leaf_count,
            height,
            hash_node_calls,
            root = %hex_hash::encode(&root),
            "built Merkle accumulator"
        );

        Ok(Self {
            layers,
            root,
            hash_node_calls,
            hasher: PhantomData,
        })
    }

    /// Build a tree over a borrowed batch of leaves.
    pub fn from_leaves(leaves: &[CryptoHash]) -> Result<Self> {
        Self::new(leaves.to_vec())
    }

    /// Build a tree over hex-encoded leaves.
    ///
    /// Fails with [`AccumulatorError::InvalidHex`] on the first malformed leaf.
    pub fn from_hex_leaves<I, S>(leaves: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(hex_hash::decode_all(leaves)?)
    }

    /// The root hash of the batch.
    pub fn root(&self) -> CryptoHash {
        self.root
    }

    /// The root hash as 64 hex characters.
    pub fn root_hex(&self) -> String {
        hex_hash::encode(&self.root)
    }

    /// Number of leaves in the batch.
    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Number of layers above the leaves, which is also the length of every
    /// inclusion proof.
    pub fn height(&self) -> usize {
        self.layers.len() - 1
    }

    /// The leaves in batch order.
    pub fn leaves(&self) -> &[CryptoHash] {
        &self.layers[0]
    }

    /// Nodes of layer `level` (0 = leaves), or `None` above the root layer.
    pub fn layer(&self, level: usize) -> Option<&[CryptoHash]> {
        self.layers.get(level).map(Vec::as_slice)
    }

    /// All layers from the leaves up to the root layer.
    pub fn layers(&self) -> &[Vec<CryptoHash>] {
        &self.layers
    }

    /// Number of pair hashes computed while building the tree.
    pub fn hash_node_calls(&self) -> u64 {
        self.hash_node_calls
    }

    /// Root, leaf count and height, ready to hand to settlement.
    pub fn commitment(&self) -> BatchCommitment {
        BatchCommitment {
            root: self.root,
            leaf_count: self.leaf_count(),
            height: self.height(),
        }
    }

    /// Inclusion proof for the leaf at `leaf_index`.
    ///
    /// Fails with [`AccumulatorError::IndexOutOfRange`] unless
    /// `leaf_index < leaf_count`.
    pub fn get_proof(&self, leaf_index: usize) -> Result<InclusionProof> {
        let leaf_count = self.leaf_count();
        if leaf_index >= leaf_count {
            debug!(leaf_index, leaf_count, "rejecting proof request outside the batch");
            return Err(AccumulatorError::IndexOutOfRange {
                index: leaf_index,
                leaf_count,
            });
        }
        Ok(self.proof_at(leaf_index))
    }

    /// Proofs of every leaf, in batch order.
    pub fn proofs(&self) -> impl Iterator<Item = InclusionProof> + '_ {
        (0..self.leaf_count()).map(|leaf_index| self.proof_at(leaf_index))
    }

    /// Collect the sibling of the path node on every layer below the root.
    ///
    /// `leaf_index` must already be checked against the leaf count.
    fn proof_at(&self, leaf_index: usize) -> InclusionProof {
        let mut index = leaf_index;
        let siblings = self.layers[..self.height()]
            .iter()
            .map(|layer| {
                // An unpaired trailing node was hashed with itself.
                let sibling = layer.get(index ^ 1).unwrap_or(&layer[index]);
                index /= 2;
                *sibling
            })
            .collect();

        InclusionProof::new(leaf_index, self.leaf_count(), siblings)
    }
}

/// Hash consecutive pairs of `layer`, pairing a trailing odd node with itself.
fn parent_layer<H: MerkleHasher>(layer: &[CryptoHash]) -> Vec<CryptoHash> {
    layer
        .chunks(2)
        .map(|pair| {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            H::hash_pair(left, right)
        })
        .collect()
}
