//! Cryptographic primitives.
//!
//! Hashing ([`Hasher`], [`Blake2b256`]), signature scheme flags, address
//! derivation, and the Ed25519 scheme.
//!
//! # Feature Flags
//!
//! - `ed25519` (default): Ed25519 keys and signatures
//!
//! # Example
//!
//! ```rust
//! use sui_rust_sdk::crypto::{address_from_public_key, Ed25519PrivateKey, SignatureScheme};
//!
//! let private_key = Ed25519PrivateKey::generate();
//! let public_key = private_key.public_key();
//! let address = address_from_public_key(SignatureScheme::Ed25519, &public_key.to_bytes());
//! assert_eq!(address.to_string().len(), 66);
//! ```

pub mod hash;
mod traits;

#[cfg(feature = "ed25519")]
mod ed25519;

pub use hash::{blake2b_256, Blake2b256, Hasher};
pub use traits::{PublicKey, Signature};

#[cfg(feature = "ed25519")]
pub use ed25519::{
    Ed25519PrivateKey, Ed25519PublicKey, Ed25519Signature, ED25519_PRIVATE_KEY_LENGTH,
    ED25519_PUBLIC_KEY_LENGTH, ED25519_SIGNATURE_LENGTH,
};

use crate::error::{SuiError, SuiResult};
use crate::types::SuiAddress;
use std::fmt;

/// Signature schemes and their one-byte flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SignatureScheme {
    /// Ed25519
    Ed25519 = 0x00,
    /// ECDSA over secp256k1
    Secp256k1 = 0x01,
    /// ECDSA over secp256r1 (P-256)
    Secp256r1 = 0x02,
    /// Multi-signature
    MultiSig = 0x03,
    /// BLS12-381
    Bls12381 = 0x04,
    /// zkLogin
    ZkLogin = 0x05,
    /// Passkey
    Passkey = 0x06,
}

impl SignatureScheme {
    /// The scheme's flag byte.
    pub fn flag(self) -> u8 {
        self as u8
    }

    /// Looks up a scheme by its flag byte.
    ///
    /// # Errors
    ///
    /// Returns [`SuiError::UnsupportedScheme`] for unknown flags.
    pub fn from_flag(flag: u8) -> SuiResult<Self> {
        match flag {
            0x00 => Ok(Self::Ed25519),
            0x01 => Ok(Self::Secp256k1),
            0x02 => Ok(Self::Secp256r1),
            0x03 => Ok(Self::MultiSig),
            0x04 => Ok(Self::Bls12381),
            0x05 => Ok(Self::ZkLogin),
            0x06 => Ok(Self::Passkey),
            other => Err(SuiError::UnsupportedScheme(other)),
        }
    }

    /// The scheme's name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ed25519 => "ed25519",
            Self::Secp256k1 => "secp256k1",
            Self::Secp256r1 => "secp256r1",
            Self::MultiSig => "multisig",
            Self::Bls12381 => "bls12381",
            Self::ZkLogin => "zklogin",
            Self::Passkey => "passkey",
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derives the address of a public key: `Blake2b-256(flag || public_key)`.
pub fn address_from_public_key(scheme: SignatureScheme, public_key: &[u8]) -> SuiAddress {
    let mut hasher = Blake2b256::default();
    hasher.update(&[scheme.flag()]);
    hasher.update(public_key);
    SuiAddress::new(hasher.finalize().into_inner())
}
