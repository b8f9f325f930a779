//! Ed25519 account.

use crate::account::Account;
use crate::crypto::{Ed25519PrivateKey, Ed25519PublicKey, Ed25519Signature, SignatureScheme};
use crate::error::SuiResult;
use crate::types::SuiAddress;
use std::fmt;

/// An Ed25519 account.
///
/// # Example
///
/// ```rust
/// use sui_rust_sdk::account::{Account, Ed25519Account};
///
/// let account = Ed25519Account::generate();
/// let signature = account.sign_message(b"hello");
/// assert!(account.public_key().verify(b"hello", &signature).is_ok());
/// ```
#[derive(Clone)]
pub struct Ed25519Account {
    private_key: Ed25519PrivateKey,
    public_key: Ed25519PublicKey,
    address: SuiAddress,
}

impl Ed25519Account {
    /// Generates a new random account.
    pub fn generate() -> Self {
        Self::from_private_key(Ed25519PrivateKey::generate())
    }

    /// Creates an account from a private key.
    pub fn from_private_key(private_key: Ed25519PrivateKey) -> Self {
        let public_key = private_key.public_key();
        let address = public_key.to_sui_address();
        Self {
            private_key,
            public_key,
            address,
        }
    }

    /// Creates an account from a 32-byte private key seed.
    pub fn from_private_key_bytes(bytes: &[u8]) -> SuiResult<Self> {
        Ok(Self::from_private_key(Ed25519PrivateKey::from_bytes(bytes)?))
    }

    /// Creates an account from a hex-encoded private key seed.
    pub fn from_private_key_hex(hex_str: &str) -> SuiResult<Self> {
        Ok(Self::from_private_key(Ed25519PrivateKey::from_hex(hex_str)?))
    }

    /// Returns the account address.
    pub fn address(&self) -> SuiAddress {
        self.address
    }

    /// Returns the public key.
    pub fn public_key(&self) -> &Ed25519PublicKey {
        &self.public_key
    }

    /// Returns the private key.
    ///
    /// **Warning**: secret key material.
    pub fn private_key(&self) -> &Ed25519PrivateKey {
        &self.private_key
    }

    /// Signs a message and returns the typed signature.
    pub fn sign_message(&self, message: &[u8]) -> Ed25519Signature {
        self.private_key.sign(message)
    }
}

impl Account for Ed25519Account {
    fn address(&self) -> SuiAddress {
        self.address
    }

    fn sign(&self, message: &[u8]) -> SuiResult<Vec<u8>> {
        Ok(self.private_key.sign(message).to_bytes().to_vec())
    }

    fn public_key_bytes(&self) -> Vec<u8> {
        self.public_key.to_bytes().to_vec()
    }

    fn signature_scheme(&self) -> SignatureScheme {
        SignatureScheme::Ed25519
    }
}

impl fmt::Debug for Ed25519Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519Account")
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_random() {
        assert_ne!(
            Ed25519Account::generate().address(),
            Ed25519Account::generate().address()
        );
    }

    #[test]
    fn test_from_hex_is_deterministic() {
        let hex = "0x9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
        let a = Ed25519Account::from_private_key_hex(hex).unwrap();
        let b = Ed25519Account::from_private_key_hex(hex).unwrap();
        assert_eq!(a.address(), b.address());
        assert_eq!(a.address(), a.public_key().to_sui_address());
        assert_eq!(Account::signature_scheme(&a), SignatureScheme::Ed25519);
    }

    #[test]
    fn test_account_sign_verifies() {
        let account = Ed25519Account::generate();
        let raw = Account::sign(&account, b"digest").unwrap();
        let sig = Ed25519Signature::from_bytes(&raw).unwrap();
        assert!(account.public_key().verify(b"digest", &sig).is_ok());
    }

    #[test]
    fn test_debug_hides_private_key() {
        let account = Ed25519Account::generate();
        let debug = format!("{account:?}");
        assert!(debug.contains("Ed25519Account"));
        assert!(!debug.contains(&hex::encode(account.private_key().to_bytes())));
    }

    #[test]
    fn test_invalid_key_rejected() {
        assert!(Ed25519Account::from_private_key_bytes(&[1u8; 16]).is_err());
        assert!(Ed25519Account::from_private_key_hex("zz").is_err());
    }
}
