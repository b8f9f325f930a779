//! Hashing.
//!
//! Sui hashes with Blake2b-256 everywhere: intent messages before signing,
//! transaction data for its digest, and public keys for addresses.

use crate::types::{Digest, DIGEST_LENGTH};
use std::fmt;

type Blake2b256Core = blake2::Blake2b<blake2::digest::consts::U32>;

/// An incremental hash function producing a 32-byte [`Digest`].
pub trait Hasher: Default {
    /// Feeds data into the hasher.
    fn update(&mut self, data: &[u8]);

    /// Consumes the hasher, returning the digest.
    fn finalize(self) -> Digest;

    /// Hashes `data` in one shot.
    fn digest(data: &[u8]) -> Digest {
        let mut hasher = Self::default();
        hasher.update(data);
        hasher.finalize()
    }
}

/// Blake2b with a 256-bit output.
#[derive(Clone, Default)]
pub struct Blake2b256(Blake2b256Core);

impl Hasher for Blake2b256 {
    fn update(&mut self, data: &[u8]) {
        blake2::Digest::update(&mut self.0, data);
    }

    fn finalize(self) -> Digest {
        let result = blake2::Digest::finalize(self.0);
        let mut output = [0u8; DIGEST_LENGTH];
        output.copy_from_slice(&result);
        Digest::new(output)
    }
}

impl fmt::Debug for Blake2b256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Blake2b256")
    }
}

/// Computes the Blake2b-256 hash of the input.
///
/// # Example
///
/// ```rust
/// use sui_rust_sdk::crypto::blake2b_256;
///
/// let hash = blake2b_256(b"hello world");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn blake2b_256(data: &[u8]) -> [u8; DIGEST_LENGTH] {
    Blake2b256::digest(data).into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blake2b_256_known_vector() {
        // BLAKE2b-256 of the empty string.
        assert_eq!(
            hex::encode(blake2b_256(b"")),
            "0e5751c026e543b2e8ab2eb06099daa1d1e5df47778f7787faab45cdf12fe3a8"
        );
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let mut hasher = Blake2b256::default();
        hasher.update(b"hello ");
        hasher.update(b"world");
        assert_eq!(hasher.finalize(), Blake2b256::digest(b"hello world"));
    }

    #[test]
    fn test_different_inputs() {
        assert_ne!(blake2b_256(b"a"), blake2b_256(b"b"));
    }
}
