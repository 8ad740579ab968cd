//! Hex encoding of hashes at process and network boundaries.
//!
//! Hashes are rendered as 64 lowercase hex characters. Parsing accepts either
//! case and an optional `0x` prefix.

use crate::{AccumulatorError, CryptoHash, Result};

/// Encode a hash as 64 lowercase hex characters.
pub fn encode(hash: &CryptoHash) -> String {
    hex::encode(hash)
}

/// Parse a 32-byte hash from hex.
pub fn decode(input: &str) -> Result<CryptoHash> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    let mut hash = [0u8; 32];
    hex::decode_to_slice(digits, &mut hash)
        .map_err(|e| AccumulatorError::InvalidHex(format!("{:?}: {}", input, e)))?;
    Ok(hash)
}

/// Parse a list of hashes, failing on the first malformed entry.
pub fn decode_all<I, S>(inputs: I) -> Result<Vec<CryptoHash>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|input| decode(input.as_ref()))
        .collect()
}

#[cfg(feature = "serde")]
pub(crate) mod serde_hash {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use crate::CryptoHash;

    pub(crate) fn serialize<S: Serializer>(
        hash: &CryptoHash,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode(hash))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<CryptoHash, D::Error> {
        let input = String::deserialize(deserializer)?;
        super::decode(&input).map_err(D::Error::custom)
    }
}

#[cfg(feature = "serde")]
pub(crate) mod serde_hash_list {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use crate::CryptoHash;

    pub(crate) fn serialize<S: Serializer>(
        hashes: &[CryptoHash],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(hashes.iter().map(super::encode))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<CryptoHash>, D::Error> {
        let inputs = Vec::<String>::deserialize(deserializer)?;
        super::decode_all(inputs).map_err(D::Error::custom)
    }
}
