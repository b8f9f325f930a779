//! Pure values and their encoding.
//!
//! A pure input is a value of a pure [`TypeTag`] passed inline as BCS bytes.
//! Encoding is driven by the type tag, so the same [`PureValue`] may encode
//! differently depending on the type it is declared as (an address as
//! `address` or as `0x2::object::ID`, for instance).

use crate::codec::{read_uleb128, write_uleb128};
use crate::error::{SuiError, SuiResult};
use crate::types::{StructTag, SuiAddress, TypeTag, SUI_ADDRESS_LENGTH};

/// A value that can be passed as a pure input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PureValue {
    /// A boolean.
    Bool(bool),
    /// An 8-bit unsigned integer.
    U8(u8),
    /// A 16-bit unsigned integer.
    U16(u16),
    /// A 32-bit unsigned integer.
    U32(u32),
    /// A 64-bit unsigned integer.
    U64(u64),
    /// A 128-bit unsigned integer.
    U128(u128),
    /// A 256-bit unsigned integer, little-endian.
    U256([u8; 32]),
    /// An address, also used for `signer` and `0x2::object::ID`.
    Address(SuiAddress),
    /// A UTF-8 or ASCII string.
    String(String),
    /// A vector of values of the same type.
    Vector(Vec<PureValue>),
}

impl PureValue {
    /// Creates a `u256` value from a `u128`.
    pub fn u256_from_u128(value: u128) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(&value.to_le_bytes());
        PureValue::U256(bytes)
    }

    fn shape(&self) -> &'static str {
        match self {
            PureValue::Bool(_) => "bool",
            PureValue::U8(_) => "u8",
            PureValue::U16(_) => "u16",
            PureValue::U32(_) => "u32",
            PureValue::U64(_) => "u64",
            PureValue::U128(_) => "u128",
            PureValue::U256(_) => "u256",
            PureValue::Address(_) => "address",
            PureValue::String(_) => "string",
            PureValue::Vector(_) => "vector",
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for PureValue {
                fn from(value: $ty) -> Self {
                    PureValue::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive!(
    bool => Bool,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    u128 => U128,
    SuiAddress => Address,
    String => String,
);

impl From<&str> for PureValue {
    fn from(value: &str) -> Self {
        PureValue::String(value.to_string())
    }
}

impl<T: Into<PureValue>> From<Vec<T>> for PureValue {
    fn from(values: Vec<T>) -> Self {
        PureValue::Vector(values.into_iter().map(Into::into).collect())
    }
}

/// Encodes `value` as a pure input of type `type_tag`.
///
/// Vectors are a ULEB128 element count followed by each element; integers
/// are little-endian at their fixed width; addresses, signers and object ids
/// are 32 raw bytes; strings are length-prefixed bytes.
///
/// # Errors
///
/// Returns [`SuiError::PureEncoding`] if the type is not pure, if the value
/// does not have the shape the type requires, or if an ASCII string contains
/// non-ASCII characters.
pub fn encode_pure_value(type_tag: &TypeTag, value: &PureValue) -> SuiResult<Vec<u8>> {
    if !type_tag.is_pure() {
        return Err(SuiError::pure_encoding(format!(
            "type '{}' is not pure and must be passed as an object",
            type_tag.to_short_string()
        )));
    }
    let mut out = Vec::new();
    encode_into(&mut out, type_tag, value)?;
    Ok(out)
}

fn encode_into(out: &mut Vec<u8>, type_tag: &TypeTag, value: &PureValue) -> SuiResult<()> {
    match (type_tag, value) {
        (TypeTag::Bool, PureValue::Bool(b)) => out.push(u8::from(*b)),
        (TypeTag::U8, PureValue::U8(n)) => out.push(*n),
        (TypeTag::U16, PureValue::U16(n)) => out.extend_from_slice(&n.to_le_bytes()),
        (TypeTag::U32, PureValue::U32(n)) => out.extend_from_slice(&n.to_le_bytes()),
        (TypeTag::U64, PureValue::U64(n)) => out.extend_from_slice(&n.to_le_bytes()),
        (TypeTag::U128, PureValue::U128(n)) => out.extend_from_slice(&n.to_le_bytes()),
        (TypeTag::U256, PureValue::U256(bytes)) => out.extend_from_slice(bytes),
        (TypeTag::Address | TypeTag::Signer, PureValue::Address(addr)) => {
            out.extend_from_slice(addr.as_bytes())
        }
        (TypeTag::Vector(element), PureValue::Vector(items)) => {
            write_uleb128(out, items.len() as u64);
            for item in items {
                encode_into(out, element, item)?;
            }
        }
        (TypeTag::Struct(tag), value) => encode_struct(out, tag, value)?,
        (type_tag, value) => return Err(mismatch(type_tag, value)),
    }
    Ok(())
}

fn encode_struct(out: &mut Vec<u8>, tag: &StructTag, value: &PureValue) -> SuiResult<()> {
    match value {
        PureValue::String(s) if tag.is_utf8_string() => write_bytes(out, s.as_bytes()),
        PureValue::String(s) if tag.is_ascii_string() => {
            if !s.is_ascii() {
                return Err(SuiError::pure_encoding(format!(
                    "'{s}' is not an ASCII string"
                )));
            }
            write_bytes(out, s.as_bytes());
        }
        PureValue::Address(addr) if tag.is_object_id() => out.extend_from_slice(addr.as_bytes()),
        value => return Err(mismatch(&TypeTag::struct_tag(tag.clone()), value)),
    }
    Ok(())
}

fn write_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    write_uleb128(out, bytes.len() as u64);
    out.extend_from_slice(bytes);
}

fn mismatch(type_tag: &TypeTag, value: &PureValue) -> SuiError {
    SuiError::pure_encoding(format!(
        "cannot encode a {} value as '{}'",
        value.shape(),
        type_tag.to_short_string()
    ))
}

/// Decodes pure-input bytes as a value of type `type_tag`.
///
/// # Errors
///
/// Returns [`SuiError::PureEncoding`] if the type is not pure, the bytes are
/// truncated or malformed, or bytes remain after the value.
pub fn decode_pure_value(type_tag: &TypeTag, bytes: &[u8]) -> SuiResult<PureValue> {
    if !type_tag.is_pure() {
        return Err(SuiError::pure_encoding(format!(
            "type '{}' is not pure",
            type_tag.to_short_string()
        )));
    }
    let mut input = bytes;
    let value = decode_from(&mut input, type_tag)?;
    if !input.is_empty() {
        return Err(SuiError::pure_encoding(format!(
            "{} trailing bytes after '{}' value",
            input.len(),
            type_tag.to_short_string()
        )));
    }
    Ok(value)
}

fn take<'a, const N: usize>(input: &mut &'a [u8]) -> SuiResult<[u8; N]> {
    if input.len() < N {
        return Err(SuiError::pure_encoding(format!(
            "unexpected end of input: need {N} bytes, have {}",
            input.len()
        )));
    }
    let (head, rest) = input.split_at(N);
    *input = rest;
    let mut out = [0u8; N];
    out.copy_from_slice(head);
    Ok(out)
}

fn take_len(input: &mut &[u8]) -> SuiResult<usize> {
    read_uleb128(input)
        .map(|n| n as usize)
        .map_err(|e| SuiError::pure_encoding(e.to_string()))
}

fn take_string(input: &mut &[u8]) -> SuiResult<String> {
    let len = take_len(input)?;
    if input.len() < len {
        return Err(SuiError::pure_encoding(format!(
            "string length {len} exceeds remaining {} bytes",
            input.len()
        )));
    }
    let (head, rest) = input.split_at(len);
    *input = rest;
    String::from_utf8(head.to_vec())
        .map_err(|e| SuiError::pure_encoding(format!("invalid UTF-8 string: {e}")))
}

fn decode_from(input: &mut &[u8], type_tag: &TypeTag) -> SuiResult<PureValue> {
    let value = match type_tag {
        TypeTag::Bool => match take::<1>(input)?[0] {
            0 => PureValue::Bool(false),
            1 => PureValue::Bool(true),
            other => {
                return Err(SuiError::pure_encoding(format!(
                    "invalid bool byte 0x{other:02x}"
                )))
            }
        },
        TypeTag::U8 => PureValue::U8(take::<1>(input)?[0]),
        TypeTag::U16 => PureValue::U16(u16::from_le_bytes(take(input)?)),
        TypeTag::U32 => PureValue::U32(u32::from_le_bytes(take(input)?)),
        TypeTag::U64 => PureValue::U64(u64::from_le_bytes(take(input)?)),
        TypeTag::U128 => PureValue::U128(u128::from_le_bytes(take(input)?)),
        TypeTag::U256 => PureValue::U256(take(input)?),
        TypeTag::Address | TypeTag::Signer => {
            PureValue::Address(SuiAddress::new(take::<SUI_ADDRESS_LENGTH>(input)?))
        }
        TypeTag::Vector(element) => {
            let len = take_len(input)?;
            // Each element takes at least one byte.
            if len > input.len() {
                return Err(SuiError::pure_encoding(format!(
                    "vector length {len} exceeds remaining {} bytes",
                    input.len()
                )));
            }
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(decode_from(input, element)?);
            }
            PureValue::Vector(items)
        }
        TypeTag::Struct(tag) if tag.is_utf8_string() => PureValue::String(take_string(input)?),
        TypeTag::Struct(tag) if tag.is_ascii_string() => {
            let s = take_string(input)?;
            if !s.is_ascii() {
                return Err(SuiError::pure_encoding("ascii string contains non-ASCII bytes"));
            }
            PureValue::String(s)
        }
        TypeTag::Struct(tag) if tag.is_object_id() => {
            PureValue::Address(SuiAddress::new(take::<SUI_ADDRESS_LENGTH>(input)?))
        }
        other => {
            return Err(SuiError::pure_encoding(format!(
                "type '{}' is not pure",
                other.to_short_string()
            )))
        }
    };
    Ok(value)
}
