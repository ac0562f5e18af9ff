//! Base58 encoding and decoding.
//!
//! The canonical alphabet is the standard Bitcoin Base58 alphabet used by
//! the `bs58` crate. Keys, addresses, and signatures are all fixed-size
//! values, so most callers go through the length-checked variants; only
//! secret-key material (which may legitimately be 32 or 64 bytes) uses the
//! plain decode.

use crate::error::EncodingError;

/// Encode bytes as a Base58 string.
pub fn encode_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

/// Decode a Base58 string into bytes, any length.
///
/// Fails only on characters outside the Base58 alphabet. Callers decoding
/// a fixed-size value should prefer [`decode_base58_exact`] or
/// [`decode_base58_fixed`].
pub fn decode_base58(s: &str) -> Result<Vec<u8>, EncodingError> {
    bs58::decode(s)
        .into_vec()
        .map_err(|e| EncodingError::InvalidBase58(e.to_string()))
}

/// Decode a Base58 string that must represent exactly `expected_len` bytes.
///
/// A wrong decoded length is an error; the result is never truncated or
/// padded to fit.
pub fn decode_base58_exact(s: &str, expected_len: usize) -> Result<Vec<u8>, EncodingError> {
    let bytes = decode_base58(s)?;
    if bytes.len() != expected_len {
        return Err(EncodingError::LengthMismatch {
            expected: expected_len,
            actual: bytes.len(),
        });
    }
    Ok(bytes)
}

/// Decode a Base58 string into a fixed-size array.
pub fn decode_base58_fixed<const N: usize>(s: &str) -> Result<[u8; N], EncodingError> {
    let bytes = decode_base58(s)?;
    bytes
        .try_into()
        .map_err(|v: Vec<u8>| EncodingError::LengthMismatch {
            expected: N,
            actual: v.len(),
        })
}
