//! Hash function primitives for the Chinadep SDK.
//!
//! Provides SM3 (GB/T 32905-2016), the hash function mandated by the
//! platform's request-signing scheme.

use sm3::{Digest, Sm3};

/// Compute SM3 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SM3 digest.
pub fn sm3(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sm3::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute SM3 hash of the input data and render it as lowercase hex.
///
/// This is the digest encoding the platform expects in the `sign` query
/// parameter.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// The 64-character lowercase hexadecimal digest.
pub fn sm3_hex(data: &[u8]) -> String {
    hex::encode(sm3(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Vectors from GB/T 32905-2016, appendix A.

    #[test]
    fn test_sm3_standard_vector_abc() {
        let hash = sm3(b"abc");
        assert_eq!(
            hex::encode(hash),
            "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"
        );
    }

    #[test]
    fn test_sm3_standard_vector_512_bits() {
        let data = b"abcd".repeat(16);
        let hash = sm3(&data);
        assert_eq!(
            hex::encode(hash),
            "debe9ff92275b8a138604889c18e5a4d6fdb70e5387e5765293dcba39c0c5732"
        );
    }

    #[test]
    fn test_sm3_hex_is_lowercase() {
        let digest = sm3_hex(b"abc");
        assert_eq!(digest.len(), 64);
        assert_eq!(digest, digest.to_lowercase());
        assert_eq!(
            digest,
            "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"
        );
    }
}
