//! Canonical binary encoding.
//!
//! Every wire type in this crate derives serde and is encoded with BCS:
//! enums are a ULEB128 variant index followed by the payload, sequences a
//! ULEB128 length followed by the elements, integers little-endian, and no
//! padding anywhere. Decoding rejects unknown variant indices, truncated
//! input and trailing bytes.

use crate::error::{SuiError, SuiResult};
use base64::Engine;
use serde::{de::DeserializeOwned, Serialize};

/// Maximum number of bytes a ULEB128-encoded `u32` may occupy.
const MAX_ULEB128_U32_BYTES: usize = 5;

/// Encodes a value to BCS bytes.
pub fn to_bytes<T: Serialize + ?Sized>(value: &T) -> SuiResult<Vec<u8>> {
    bcs::to_bytes(value).map_err(SuiError::bcs)
}

/// Decodes a value from BCS bytes, requiring all input to be consumed.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8]) -> SuiResult<T> {
    bcs::from_bytes(bytes).map_err(SuiError::bcs)
}

/// Encodes a value to BCS and then to standard base64.
pub fn to_base64<T: Serialize + ?Sized>(value: &T) -> SuiResult<String> {
    Ok(base64::engine::general_purpose::STANDARD.encode(to_bytes(value)?))
}

/// Decodes a value from base64-wrapped BCS.
pub fn from_base64<T: DeserializeOwned>(encoded: &str) -> SuiResult<T> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(encoded)?;
    from_bytes(&bytes)
}

/// Appends the ULEB128 encoding of `value` to `out`.
pub fn write_uleb128(out: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Reads a canonical ULEB128 length (at most `u32::MAX`) from the front of
/// `input`, advancing it.
///
/// Non-minimal encodings are rejected, matching the decoder on the ledger.
pub fn read_uleb128(input: &mut &[u8]) -> SuiResult<u32> {
    let mut value: u64 = 0;
    for (i, byte) in input.iter().copied().enumerate().take(MAX_ULEB128_U32_BYTES) {
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            if i > 0 && byte == 0 {
                return Err(SuiError::bcs("non-canonical ULEB128 encoding"));
            }
            let value = u32::try_from(value)
                .map_err(|_| SuiError::bcs("ULEB128 value overflows u32"))?;
            *input = &input[i + 1..];
            return Ok(value);
        }
    }
    if input.len() < MAX_ULEB128_U32_BYTES {
        Err(SuiError::bcs("unexpected end of input in ULEB128"))
    } else {
        Err(SuiError::bcs("ULEB128 value overflows u32"))
    }
}
