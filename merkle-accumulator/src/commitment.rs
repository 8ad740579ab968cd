use std::fmt;

use crate::{CryptoHash, hex_hash};

/// Summary of a built batch handed to the settlement layer.
///
/// `Display` renders only the hex root, which is what gets submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchCommitment {
    /// Root hash of the batch tree.
    #[cfg_attr(feature = "serde", serde(with = "crate::hex_hash::serde_hash"))]
    pub root: CryptoHash,
    /// Number of leaves committed.
    pub leaf_count: usize,
    /// Length of every inclusion proof for this batch.
    pub height: usize,
}

impl BatchCommitment {
    /// The root as 64 hex characters.
    pub fn root_hex(&self) -> String {
        hex_hash::encode(&self.root)
    }
}

impl fmt::Display for BatchCommitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root_hex())
    }
}
