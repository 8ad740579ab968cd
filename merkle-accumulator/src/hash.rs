//! Pair hashing for the accumulator.
//!
//! Every internal node is `H(left || right)` over the raw 64 bytes of its two
//! children. There is no domain tag, length prefix or sorting: the position of
//! each child is part of what a proof commits to.

use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// Length in bytes of every leaf, node and root.
pub const HASH_LENGTH: usize = 32;

/// A 32-byte leaf commitment, internal node or root.
pub type CryptoHash = [u8; HASH_LENGTH];

/// A 256-bit hash used to combine two sibling nodes into their parent.
///
/// The accumulator is generic over this trait so a batch can be committed with
/// whichever function the settlement verifier recomputes.
pub trait MerkleHasher {
    /// Stable name of the hash function, used in log events.
    const NAME: &'static str;

    /// Hash the concatenation `left || right`.
    fn hash_pair(left: &CryptoHash, right: &CryptoHash) -> CryptoHash;
}

/// Blake3 pair hasher. This is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blake3Hasher;

impl MerkleHasher for Blake3Hasher {
    const NAME: &'static str = "blake3";

    fn hash_pair(left: &CryptoHash, right: &CryptoHash) -> CryptoHash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(left);
        hasher.update(right);
        *hasher.finalize().as_bytes()
    }
}

/// SHA-256 pair hasher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Hasher;

impl MerkleHasher for Sha256Hasher {
    const NAME: &'static str = "sha256";

    fn hash_pair(left: &CryptoHash, right: &CryptoHash) -> CryptoHash {
        let mut hasher = Sha256::new();
        hasher.update(left);
        hasher.update(right);
        hasher.finalize().into()
    }
}

/// Keccak-256 pair hasher, matching the EVM `keccak256(abi.encodePacked(a, b))`
/// of two `bytes32` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256Hasher;

impl MerkleHasher for Keccak256Hasher {
    const NAME: &'static str = "keccak256";

    fn hash_pair(left: &CryptoHash, right: &CryptoHash) -> CryptoHash {
        let mut hasher = Keccak256::new();
        hasher.update(left);
        hasher.update(right);
        hasher.finalize().into()
    }
}

/// Number of proof steps for a batch of `leaf_count` leaves:
/// `ceil(log2(leaf_count))`, and 0 for a single leaf.
pub fn expected_height(leaf_count: usize) -> usize {
    if leaf_count <= 1 {
        return 0;
    }
    (usize::BITS - (leaf_count - 1).leading_zeros()) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(left: &CryptoHash, right: &CryptoHash) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(2 * HASH_LENGTH);
        bytes.extend_from_slice(left);
        bytes.extend_from_slice(right);
        bytes
    }

    #[test]
    fn test_pair_hash_is_plain_concatenation() {
        let left = [1u8; 32];
        let right = [2u8; 32];
        let bytes = concat(&left, &right);

        assert_eq!(
            Blake3Hasher::hash_pair(&left, &right),
            *blake3::hash(&bytes).as_bytes()
        );
        let sha: CryptoHash = Sha256::digest(&bytes).into();
        assert_eq!(Sha256Hasher::hash_pair(&left, &right), sha);
        let keccak: CryptoHash = Keccak256::digest(&bytes).into();
        assert_eq!(Keccak256Hasher::hash_pair(&left, &right), keccak);
    }

    #[test]
    fn test_pair_hash_is_positional() {
        let left = [1u8; 32];
        let right = [2u8; 32];
        assert_ne!(
            Blake3Hasher::hash_pair(&left, &right),
            Blake3Hasher::hash_pair(&right, &left)
        );
        assert_ne!(
            Sha256Hasher::hash_pair(&left, &right),
            Sha256Hasher::hash_pair(&right, &left)
        );
        assert_ne!(
            Keccak256Hasher::hash_pair(&left, &right),
            Keccak256Hasher::hash_pair(&right, &left)
        );
    }

    #[test]
    fn test_known_sha256_vector() {
        // sha256 of 64 zero bytes
        let zero = [0u8; 32];
        assert_eq!(
            hex::encode(Sha256Hasher::hash_pair(&zero, &zero)),
            "f5a5fd42d16a20302798ef6ed309979b43003d2320d9f0e8ea9831a92759fb4b"
        );
    }

    #[test]
    fn test_known_keccak256_vector() {
        // keccak256(bytes32(0), bytes32(0)), the first zero-subtree hash of
        // EVM incremental Merkle trees
        let zero = [0u8; 32];
        assert_eq!(
            hex::encode(Keccak256Hasher::hash_pair(&zero, &zero)),
            "ad3228b676f7d3cd4284a5443f17f1962b36e491b30a40b2405849e597ba5fb5"
        );
    }

    #[test]
    fn test_expected_height() {
        assert_eq!(expected_height(1), 0);
        assert_eq!(expected_height(2), 1);
        assert_eq!(expected_height(3), 2);
        assert_eq!(expected_height(4), 2);
        assert_eq!(expected_height(5), 3);
        assert_eq!(expected_height(8), 3);
        assert_eq!(expected_height(9), 4);
        assert_eq!(expected_height(256), 8);
        assert_eq!(expected_height(257), 9);
    }
}
