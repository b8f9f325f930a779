//! Account addresses and object ids.
//!
//! Both are 32-byte values rendered as `0x` followed by 64 lowercase hex
//! digits. On the wire they are 32 raw bytes with no length prefix.

use crate::error::{SuiError, SuiResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The length of an address in bytes.
pub const SUI_ADDRESS_LENGTH: usize = 32;

/// A 32-byte Sui account address.
///
/// Addresses of signing accounts are derived from public keys as
/// `Blake2b-256(scheme_flag || public_key)`; see
/// [`address_from_public_key`](crate::crypto::address_from_public_key).
///
/// # Example
///
/// ```rust
/// use sui_rust_sdk::SuiAddress;
///
/// let addr = SuiAddress::from_hex("0x2").unwrap();
/// assert_eq!(addr, SuiAddress::TWO);
/// assert_eq!(addr.to_short_string(), "0x2");
/// assert_eq!(addr.to_string().len(), 66);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SuiAddress([u8; SUI_ADDRESS_LENGTH]);

impl SuiAddress {
    /// The all-zero address.
    pub const ZERO: Self = Self([0u8; SUI_ADDRESS_LENGTH]);

    /// The Move standard library address (0x1).
    pub const ONE: Self = Self::from_u64(1);

    /// The Sui framework address (0x2).
    pub const TWO: Self = Self::from_u64(2);

    /// Creates an address from a byte array.
    pub const fn new(bytes: [u8; SUI_ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    const fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; SUI_ADDRESS_LENGTH];
        let be = value.to_be_bytes();
        let mut i = 0;
        while i < 8 {
            bytes[SUI_ADDRESS_LENGTH - 8 + i] = be[i];
            i += 1;
        }
        Self(bytes)
    }

    /// Parses an address from hex, with or without a `0x` prefix.
    ///
    /// Short forms such as `0x2` are left-padded with zeros. Empty input and
    /// more than 64 hex digits are rejected.
    pub fn from_hex<T: AsRef<str>>(hex_str: T) -> SuiResult<Self> {
        let raw = hex_str.as_ref().trim();
        let digits = raw
            .strip_prefix("0x")
            .or_else(|| raw.strip_prefix("0X"))
            .unwrap_or(raw);

        if digits.is_empty() {
            return Err(SuiError::InvalidAddress(format!(
                "'{raw}' contains no hex digits"
            )));
        }
        if digits.len() > SUI_ADDRESS_LENGTH * 2 {
            return Err(SuiError::InvalidAddress(format!(
                "address too long: {} hex digits (max {})",
                digits.len(),
                SUI_ADDRESS_LENGTH * 2
            )));
        }

        let padded = format!("{digits:0>64}");
        let mut bytes = [0u8; SUI_ADDRESS_LENGTH];
        hex::decode_to_slice(padded, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Creates an address from a byte slice of exactly 32 bytes.
    pub fn from_bytes<T: AsRef<[u8]>>(bytes: T) -> SuiResult<Self> {
        let bytes = bytes.as_ref();
        <[u8; SUI_ADDRESS_LENGTH]>::try_from(bytes)
            .map(Self)
            .map_err(|_| {
                SuiError::InvalidAddress(format!(
                    "expected {} bytes, got {}",
                    SUI_ADDRESS_LENGTH,
                    bytes.len()
                ))
            })
    }

    /// Returns the address as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the address as a byte array.
    pub fn to_bytes(&self) -> [u8; SUI_ADDRESS_LENGTH] {
        self.0
    }

    /// Returns the long `0x`-prefixed form.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Returns the `0x`-prefixed form with leading zeros trimmed.
    pub fn to_short_string(&self) -> String {
        let hex = hex::encode(self.0);
        match hex.trim_start_matches('0') {
            "" => "0x0".to_string(),
            trimmed => format!("0x{trimmed}"),
        }
    }

    /// Returns true if this is the zero address.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl Default for SuiAddress {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SuiAddress({})", self.to_short_string())
    }
}

impl fmt::Display for SuiAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for SuiAddress {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for SuiAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&self.to_hex())
        } else {
            // Fixed-size array, no length prefix.
            self.0.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for SuiAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Self::from_hex(&s).map_err(serde::de::Error::custom)
        } else {
            <[u8; SUI_ADDRESS_LENGTH]>::deserialize(deserializer).map(Self)
        }
    }
}

impl From<[u8; SUI_ADDRESS_LENGTH]> for SuiAddress {
    fn from(bytes: [u8; SUI_ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<SuiAddress> for [u8; SUI_ADDRESS_LENGTH] {
    fn from(addr: SuiAddress) -> Self {
        addr.0
    }
}

impl From<ObjectId> for SuiAddress {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

impl AsRef<[u8]> for SuiAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// The id of an on-chain object (including packages).
///
/// Shares the address representation and wire encoding.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(SuiAddress);

impl ObjectId {
    /// The Move standard library package (0x1).
    pub const STD: Self = Self(SuiAddress::ONE);

    /// The Sui framework package (0x2).
    pub const SUI_FRAMEWORK: Self = Self(SuiAddress::TWO);

    /// Creates an object id from a byte array.
    pub const fn new(bytes: [u8; SUI_ADDRESS_LENGTH]) -> Self {
        Self(SuiAddress::new(bytes))
    }

    /// Parses an object id from hex; see [`SuiAddress::from_hex`].
    pub fn from_hex<T: AsRef<str>>(hex_str: T) -> SuiResult<Self> {
        SuiAddress::from_hex(hex_str).map(Self)
    }

    /// Returns the id as a byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns the long `0x`-prefixed form.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// Returns the `0x`-prefixed form with leading zeros trimmed.
    pub fn to_short_string(&self) -> String {
        self.0.to_short_string()
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.to_short_string())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ObjectId {
    type Err = SuiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<SuiAddress> for ObjectId {
    fn from(addr: SuiAddress) -> Self {
        Self(addr)
    }
}

impl From<[u8; SUI_ADDRESS_LENGTH]> for ObjectId {
    fn from(bytes: [u8; SUI_ADDRESS_LENGTH]) -> Self {
        Self::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_LONG: &str = "0x0000000000000000000000000000000000000000000000000000000000000002";

    #[test]
    fn test_from_hex_forms() {
        assert_eq!(SuiAddress::from_hex(TWO_LONG).unwrap(), SuiAddress::TWO);
        assert_eq!(SuiAddress::from_hex("0x2").unwrap(), SuiAddress::TWO);
        assert_eq!(SuiAddress::from_hex("2").unwrap(), SuiAddress::TWO);
        assert_eq!(SuiAddress::from_hex("0X1").unwrap(), SuiAddress::ONE);
    }

    #[test]
    fn test_from_hex_rejects() {
        assert!(SuiAddress::from_hex("").is_err());
        assert!(SuiAddress::from_hex("0x").is_err());
        assert!(SuiAddress::from_hex("0xzz").is_err());
        let too_long = format!("0x{}", "1".repeat(65));
        let err = SuiAddress::from_hex(too_long).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_display_is_long_lowercase() {
        let addr = SuiAddress::from_hex("0xABCDEF").unwrap();
        let s = addr.to_string();
        assert_eq!(s.len(), 66);
        assert!(s.ends_with("abcdef"));
        assert_eq!(addr.to_short_string(), "0xabcdef");
        assert_eq!(SuiAddress::ZERO.to_short_string(), "0x0");
    }

    #[test]
    fn test_bcs_is_32_raw_bytes() {
        let bytes = bcs::to_bytes(&SuiAddress::TWO).unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes[31], 2);

        let id_bytes = bcs::to_bytes(&ObjectId::SUI_FRAMEWORK).unwrap();
        assert_eq!(bytes, id_bytes);

        let back: ObjectId = bcs::from_bytes(&id_bytes).unwrap();
        assert_eq!(back, ObjectId::SUI_FRAMEWORK);
    }

    #[test]
    fn test_json_is_hex() {
        let json = serde_json::to_string(&SuiAddress::TWO).unwrap();
        assert_eq!(json, format!("\"{TWO_LONG}\""));
        let id: ObjectId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, ObjectId::SUI_FRAMEWORK);
    }

    #[test]
    fn test_from_bytes_length() {
        assert!(SuiAddress::from_bytes([0u8; 31]).is_err());
        assert_eq!(
            SuiAddress::from_bytes([0u8; 32]).unwrap(),
            SuiAddress::ZERO
        );
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", SuiAddress::ONE), "SuiAddress(0x1)");
        assert_eq!(format!("{:?}", ObjectId::STD), "ObjectId(0x1)");
    }
}
