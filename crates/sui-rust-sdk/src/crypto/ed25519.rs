//! Ed25519 signature scheme.
//!
//! Ed25519 is the default signature scheme for Sui accounts (flag `0x00`).

use crate::crypto::traits::{PublicKey, Signature};
use crate::crypto::{address_from_public_key, SignatureScheme};
use crate::error::{SuiError, SuiResult};
use crate::types::SuiAddress;
use ed25519_dalek::{Signer as DalekSigner, Verifier as DalekVerifier};
use std::fmt;
use zeroize::Zeroize;

/// Ed25519 private key length in bytes.
pub const ED25519_PRIVATE_KEY_LENGTH: usize = 32;
/// Ed25519 public key length in bytes.
pub const ED25519_PUBLIC_KEY_LENGTH: usize = 32;
/// Ed25519 signature length in bytes.
pub const ED25519_SIGNATURE_LENGTH: usize = 64;

/// An Ed25519 private key.
///
/// The key material is zeroized when dropped.
///
/// # Example
///
/// ```rust
/// use sui_rust_sdk::crypto::Ed25519PrivateKey;
///
/// let private_key = Ed25519PrivateKey::generate();
/// let signature = private_key.sign(b"hello");
/// assert!(private_key.public_key().verify(b"hello", &signature).is_ok());
/// ```
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Ed25519PrivateKey {
    #[zeroize(skip)]
    #[allow(unused)]
    inner: ed25519_dalek::SigningKey,
}

impl Ed25519PrivateKey {
    /// Generates a new random private key from the OS RNG.
    pub fn generate() -> Self {
        let mut csprng = rand::rngs::OsRng;
        Self {
            inner: ed25519_dalek::SigningKey::generate(&mut csprng),
        }
    }

    /// Creates a private key from its 32-byte seed.
    pub fn from_bytes(bytes: &[u8]) -> SuiResult<Self> {
        if bytes.len() != ED25519_PRIVATE_KEY_LENGTH {
            return Err(SuiError::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                ED25519_PRIVATE_KEY_LENGTH,
                bytes.len()
            )));
        }
        let mut key_bytes = [0u8; ED25519_PRIVATE_KEY_LENGTH];
        key_bytes.copy_from_slice(bytes);
        let inner = ed25519_dalek::SigningKey::from_bytes(&key_bytes);
        key_bytes.zeroize();
        Ok(Self { inner })
    }

    /// Creates a private key from a hex string, with or without `0x`.
    pub fn from_hex(hex_str: &str) -> SuiResult<Self> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let mut bytes = hex::decode(hex_str)?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    /// Returns the 32-byte seed.
    ///
    /// **Warning**: the returned bytes are secret key material.
    pub fn to_bytes(&self) -> [u8; ED25519_PRIVATE_KEY_LENGTH] {
        self.inner.to_bytes()
    }

    /// Returns the corresponding public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        Ed25519PublicKey {
            inner: self.inner.verifying_key(),
        }
    }

    /// Signs a message.
    pub fn sign(&self, message: &[u8]) -> Ed25519Signature {
        Ed25519Signature {
            inner: self.inner.sign(message),
        }
    }
}

impl fmt::Debug for Ed25519PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519PrivateKey([REDACTED])")
    }
}

/// An Ed25519 public key.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ed25519PublicKey {
    inner: ed25519_dalek::VerifyingKey,
}

impl Ed25519PublicKey {
    /// Creates a public key from its 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> SuiResult<Self> {
        if bytes.len() != ED25519_PUBLIC_KEY_LENGTH {
            return Err(SuiError::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                ED25519_PUBLIC_KEY_LENGTH,
                bytes.len()
            )));
        }
        let mut key_bytes = [0u8; ED25519_PUBLIC_KEY_LENGTH];
        key_bytes.copy_from_slice(bytes);
        let inner = ed25519_dalek::VerifyingKey::from_bytes(&key_bytes)
            .map_err(|e| SuiError::InvalidPublicKey(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Creates a public key from a hex string, with or without `0x`.
    pub fn from_hex(hex_str: &str) -> SuiResult<Self> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        Self::from_bytes(&hex::decode(hex_str)?)
    }

    /// Returns the public key bytes.
    pub fn to_bytes(&self) -> [u8; ED25519_PUBLIC_KEY_LENGTH] {
        self.inner.to_bytes()
    }

    /// Returns the public key as a `0x`-prefixed hex string.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.inner.to_bytes()))
    }

    /// Verifies a signature over a message.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> SuiResult<()> {
        self.inner
            .verify(message, &signature.inner)
            .map_err(|_| SuiError::SignatureVerificationFailed)
    }

    /// The address controlled by this key.
    pub fn to_sui_address(&self) -> SuiAddress {
        address_from_public_key(SignatureScheme::Ed25519, &self.to_bytes())
    }
}

impl PublicKey for Ed25519PublicKey {
    const SCHEME: SignatureScheme = SignatureScheme::Ed25519;
    const LENGTH: usize = ED25519_PUBLIC_KEY_LENGTH;

    fn from_bytes(bytes: &[u8]) -> SuiResult<Self> {
        Ed25519PublicKey::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        Ed25519PublicKey::to_bytes(self).to_vec()
    }
}

impl fmt::Debug for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for Ed25519PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// An Ed25519 signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ed25519Signature {
    inner: ed25519_dalek::Signature,
}

impl Ed25519Signature {
    /// Creates a signature from its 64 bytes.
    pub fn from_bytes(bytes: &[u8]) -> SuiResult<Self> {
        if bytes.len() != ED25519_SIGNATURE_LENGTH {
            return Err(SuiError::InvalidSignature(format!(
                "expected {} bytes, got {}",
                ED25519_SIGNATURE_LENGTH,
                bytes.len()
            )));
        }
        let inner = ed25519_dalek::Signature::from_slice(bytes)
            .map_err(|e| SuiError::InvalidSignature(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Returns the signature bytes.
    pub fn to_bytes(&self) -> [u8; ED25519_SIGNATURE_LENGTH] {
        self.inner.to_bytes()
    }

    /// Returns the signature as a `0x`-prefixed hex string.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.inner.to_bytes()))
    }
}

impl Signature for Ed25519Signature {
    type PublicKey = Ed25519PublicKey;
    const LENGTH: usize = ED25519_SIGNATURE_LENGTH;

    fn from_bytes(bytes: &[u8]) -> SuiResult<Self> {
        Ed25519Signature::from_bytes(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        Ed25519Signature::to_bytes(self).to_vec()
    }

    fn verify(&self, message: &[u8], public_key: &Ed25519PublicKey) -> SuiResult<()> {
        public_key.verify(message, self)
    }
}

impl fmt::Debug for Ed25519Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ed25519Signature({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8032, test 1.
    const SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const PUBLIC: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const SIGNATURE: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

    #[test]
    fn test_rfc8032_vector() {
        let key = Ed25519PrivateKey::from_hex(SEED).unwrap();
        assert_eq!(hex::encode(key.public_key().to_bytes()), PUBLIC);
        let sig = key.sign(b"");
        assert_eq!(hex::encode(sig.to_bytes()), SIGNATURE);
        assert!(key.public_key().verify(b"", &sig).is_ok());
    }

    #[test]
    fn test_sign_and_verify() {
        let key = Ed25519PrivateKey::generate();
        let sig = key.sign(b"hello");
        assert!(key.public_key().verify(b"hello", &sig).is_ok());
        assert!(matches!(
            key.public_key().verify(b"goodbye", &sig),
            Err(SuiError::SignatureVerificationFailed)
        ));
    }

    #[test]
    fn test_lengths_checked() {
        assert!(Ed25519PrivateKey::from_bytes(&[0u8; 31]).is_err());
        assert!(Ed25519PublicKey::from_bytes(&[0u8; 33]).is_err());
        assert!(Ed25519Signature::from_bytes(&[0u8; 63]).is_err());
    }

    #[test]
    fn test_round_trip_bytes() {
        let key = Ed25519PrivateKey::generate();
        let restored = Ed25519PrivateKey::from_bytes(&key.to_bytes()).unwrap();
        assert_eq!(key.public_key(), restored.public_key());

        let sig = key.sign(b"m");
        assert_eq!(Ed25519Signature::from_bytes(&sig.to_bytes()).unwrap(), sig);
    }

    #[test]
    fn test_address_uses_ed25519_flag() {
        let key = Ed25519PrivateKey::from_hex(SEED).unwrap();
        let pk = key.public_key();
        assert_eq!(
            pk.to_sui_address(),
            PublicKey::to_sui_address(&pk),
        );
        let mut preimage = vec![0x00];
        preimage.extend_from_slice(&pk.to_bytes());
        assert_eq!(
            pk.to_sui_address().to_bytes(),
            crate::crypto::blake2b_256(&preimage)
        );
    }

    fn verify_generic<S: Signature>(sig: &S, message: &[u8], pk: &S::PublicKey) -> bool {
        S::from_bytes(&sig.to_bytes()).is_ok() && sig.verify(message, pk).is_ok()
    }

    #[test]
    fn test_trait_verification() {
        let key = Ed25519PrivateKey::generate();
        let sig = key.sign(b"generic");
        assert!(verify_generic(&sig, b"generic", &key.public_key()));
        assert!(!verify_generic(&sig, b"other", &key.public_key()));
        assert_eq!(<Ed25519Signature as Signature>::LENGTH, 64);
        assert_eq!(<Ed25519PublicKey as PublicKey>::LENGTH, 32);
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let key = Ed25519PrivateKey::generate();
        assert_eq!(format!("{key:?}"), "Ed25519PrivateKey([REDACTED])");
    }
}
