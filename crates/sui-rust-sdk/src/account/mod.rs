//! Accounts that sign transactions.
//!
//! An [`Account`] wraps a key pair. Signing code only needs the account's
//! address, its scheme flag, its public key bytes, and the ability to sign a
//! 32-byte digest.
//!
//! # Example
//!
//! ```rust
//! use sui_rust_sdk::account::{Account, Ed25519Account};
//!
//! let account = Ed25519Account::generate();
//! println!("Address: {}", account.address());
//! ```

#[cfg(feature = "ed25519")]
mod ed25519;

#[cfg(feature = "ed25519")]
pub use ed25519::Ed25519Account;

use crate::crypto::SignatureScheme;
use crate::error::SuiResult;
use crate::types::SuiAddress;

/// Anything that can sign on behalf of an address.
pub trait Account: Send + Sync {
    /// Returns the address controlled by this account.
    fn address(&self) -> SuiAddress;

    /// Signs a message and returns the raw signature bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying signer fails.
    fn sign(&self, message: &[u8]) -> SuiResult<Vec<u8>>;

    /// Returns the public key bytes.
    fn public_key_bytes(&self) -> Vec<u8>;

    /// Returns the account's signature scheme.
    fn signature_scheme(&self) -> SignatureScheme;
}

impl<A: Account + ?Sized> Account for &A {
    fn address(&self) -> SuiAddress {
        (**self).address()
    }

    fn sign(&self, message: &[u8]) -> SuiResult<Vec<u8>> {
        (**self).sign(message)
    }

    fn public_key_bytes(&self) -> Vec<u8> {
        (**self).public_key_bytes()
    }

    fn signature_scheme(&self) -> SignatureScheme {
        (**self).signature_scheme()
    }
}
