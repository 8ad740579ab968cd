//! Per-leaf inclusion proofs.
//!
//! An [`InclusionProof`] carries one sibling hash per layer below the root,
//! ordered from the leaf layer upward. Which side each sibling sits on is not
//! stored: it is the corresponding bit of the leaf index, so the index is part
//! of the proof.

use bincode::{Decode, Encode};

use crate::{AccumulatorError, CryptoHash, Result, hash::expected_height, hex_hash};


/// Upper bound on the sibling count of a decoded proof. A batch addressable by
/// a 64-bit index never needs more.
pub const MAX_PROOF_SIBLINGS: usize = 64;

/// An inclusion proof for a single leaf of a settled batch.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InclusionProof {
    leaf_index: usize,
    leaf_count: usize,
    #[cfg_attr(feature = "serde", serde(with = "crate::hex_hash::serde_hash_list"))]
    siblings: Vec<CryptoHash>,
}

impl InclusionProof {
    /// Assemble a proof from its parts, e.g. after receiving the siblings from
    /// another process.
    pub fn new(leaf_index: usize, leaf_count: usize, siblings: Vec<CryptoHash>) -> Self {
        InclusionProof {
            leaf_index,
            leaf_count,
            siblings,
        }
    }

    /// Assemble a proof from hex-encoded siblings.
    pub fn from_hex_siblings<I, S>(leaf_index: usize, leaf_count: usize, siblings: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(
            leaf_index,
            leaf_count,
            hex_hash::decode_all(siblings)?,
        ))
    }

    /// Position of the proven leaf in its batch.
    pub fn leaf_index(&self) -> usize {
        self.leaf_index
    }

    /// Number of leaves in the batch the proof was generated from.
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Sibling hashes from the leaf layer up to just below the root.
    pub fn siblings(&self) -> &[CryptoHash] {
        &self.siblings
    }

    /// Sibling hashes as hex strings, in proof order.
    pub fn siblings_hex(&self) -> Vec<String> {
        self.siblings.iter().map(hex_hash::encode).collect()
    }

    /// Consume the proof and return its sibling hashes.
    pub fn into_siblings(self) -> Vec<CryptoHash> {
        self.siblings
    }

    /// Check the proof's shape: a non-empty batch, an index inside it and one
    /// sibling per tree layer.
    pub fn validate(&self) -> Result<()> {
        if self.siblings.len() > MAX_PROOF_SIBLINGS {
            return Err(AccumulatorError::InvalidProof(format!(
                "proof has {} siblings (max {})",
                self.siblings.len(),
                MAX_PROOF_SIBLINGS
            )));
        }
        if self.leaf_count == 0 {
            return Err(AccumulatorError::InvalidProof(
                "proof refers to an empty batch".into(),
            ));
        }
        if self.leaf_index >= self.leaf_count {
            return Err(AccumulatorError::InvalidProof(format!(
                "leaf index {} is out of range (leaf count {})",
                self.leaf_index, self.leaf_count
            )));
        }
        let height = expected_height(self.leaf_count);
        if self.siblings.len() != height {
            return Err(AccumulatorError::InvalidProof(format!(
                "expected {} siblings for {} leaves, got {}",
                height,
                self.leaf_count,
                self.siblings.len()
            )));
        }
        Ok(())
    }

    /// Encode to bytes using bincode.
    pub fn encode_to_vec(&self) -> Result<Vec<u8>> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_no_limit();
        bincode::encode_to_vec(self, config)
            .map_err(|e| AccumulatorError::InvalidProof(format!("encode error: {}", e)))
    }

    /// Decode from bytes using bincode, rejecting proofs whose shape does not
    /// match their batch.
    pub fn decode_from_slice(bytes: &[u8]) -> Result<Self> {
        let config = bincode::config::standard()
            .with_big_endian()
            .with_limit::<{ 64 * 1024 }>();
        let (proof, _): (Self, _) = bincode::decode_from_slice(bytes, config)
            .map_err(|e| AccumulatorError::InvalidProof(format!("decode error: {}", e)))?;
        proof.validate()?;
        Ok(proof)
    }
}
