//! Traits shared by signature schemes.

use super::{address_from_public_key, SignatureScheme};
use crate::error::SuiResult;
use crate::types::SuiAddress;

/// A public key of some signature scheme.
pub trait PublicKey: Clone + Sized {
    /// The scheme this key belongs to.
    const SCHEME: SignatureScheme;

    /// The length of the public key in bytes.
    const LENGTH: usize;

    /// Creates a public key from bytes.
    fn from_bytes(bytes: &[u8]) -> SuiResult<Self>;

    /// Returns the public key as bytes.
    fn to_bytes(&self) -> Vec<u8>;

    /// Returns the address derived from this key.
    fn to_sui_address(&self) -> SuiAddress {
        address_from_public_key(Self::SCHEME, &self.to_bytes())
    }
}

/// A signature of some signature scheme.
pub trait Signature: Clone + Sized {
    /// The public key type that verifies this signature.
    type PublicKey: PublicKey;

    /// The length of the signature in bytes.
    const LENGTH: usize;

    /// Creates a signature from bytes.
    fn from_bytes(bytes: &[u8]) -> SuiResult<Self>;

    /// Returns the signature as bytes.
    fn to_bytes(&self) -> Vec<u8>;

    /// Verifies this signature over `message` with `public_key`.
    fn verify(&self, message: &[u8], public_key: &Self::PublicKey) -> SuiResult<()>;
}
