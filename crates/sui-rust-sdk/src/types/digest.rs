//! 32-byte digests.
//!
//! Digests are displayed in base58. On the wire they are a length-prefixed
//! byte string (`0x20` followed by the 32 bytes).

use crate::error::{SuiError, SuiResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of a digest in bytes.
pub const DIGEST_LENGTH: usize = 32;

/// A raw 32-byte digest.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest([u8; DIGEST_LENGTH]);

impl Digest {
    /// The all-zero digest.
    pub const ZERO: Self = Self([0u8; DIGEST_LENGTH]);

    /// Creates a digest from a byte array.
    pub const fn new(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Creates a digest from a byte slice of exactly 32 bytes.
    pub fn from_bytes<T: AsRef<[u8]>>(bytes: T) -> SuiResult<Self> {
        let bytes = bytes.as_ref();
        <[u8; DIGEST_LENGTH]>::try_from(bytes)
            .map(Self)
            .map_err(|_| {
                SuiError::InvalidDigest(format!(
                    "expected {} bytes, got {}",
                    DIGEST_LENGTH,
                    bytes.len()
                ))
            })
    }

    /// Parses a base58 digest.
    pub fn from_base58(s: &str) -> SuiResult<Self> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| SuiError::InvalidDigest(format!("'{s}': {e}")))?;
        Self::from_bytes(bytes)
    }

    /// Returns the base58 form.
    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    /// Returns the digest as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the digest as a byte array.
    pub fn into_inner(self) -> [u8; DIGEST_LENGTH] {
        self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_base58())
    }
}

impl FromStr for Digest {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl From<[u8; DIGEST_LENGTH]> for Digest {
    fn from(bytes: [u8; DIGEST_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Digest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_base58())
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Self::from_base58(&s).map_err(serde::de::Error::custom)
        } else {
            let bytes = serde_bytes::ByteBuf::deserialize(deserializer)?;
            Self::from_bytes(bytes.as_slice()).map_err(serde::de::Error::custom)
        }
    }
}

macro_rules! typed_digest {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Digest);

        impl $name {
            /// Creates a digest from a byte array.
            pub const fn new(bytes: [u8; DIGEST_LENGTH]) -> Self {
                Self(Digest::new(bytes))
            }

            /// Parses a base58 digest.
            pub fn from_base58(s: &str) -> SuiResult<Self> {
                Digest::from_base58(s).map(Self)
            }

            /// Returns the underlying digest.
            pub fn inner(&self) -> &Digest {
                &self.0
            }

            /// Returns the digest as a byte slice.
            pub fn as_bytes(&self) -> &[u8] {
                self.0.as_bytes()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl FromStr for $name {
            type Err = SuiError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_base58(s)
            }
        }

        impl From<Digest> for $name {
            fn from(digest: Digest) -> Self {
                Self(digest)
            }
        }

        impl From<[u8; DIGEST_LENGTH]> for $name {
            fn from(bytes: [u8; DIGEST_LENGTH]) -> Self {
                Self::new(bytes)
            }
        }
    };
}

typed_digest!(
    /// The digest of an object's contents at a specific version.
    ObjectDigest
);

typed_digest!(
    /// The digest identifying a transaction:
    /// `Blake2b-256("TransactionData::" || bcs(transaction_data))`.
    TransactionDigest
);
