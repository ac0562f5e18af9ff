//! Base64 encoding and decoding for opaque binary payloads.
//!
//! Uses the standard alphabet with padding (the `STANDARD` engine), as
//! expected by consumers of the serialized instruction data.

use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine as _;

use crate::error::EncodingError;

/// Encode bytes as a standard-alphabet, padded Base64 string.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a standard-alphabet Base64 string.
///
/// Fails on characters outside the alphabet or on missing/invalid padding.
/// Unlike Base58 values, Base64 payloads have no fixed expected length.
pub fn decode_base64(s: &str) -> Result<Vec<u8>, EncodingError> {
    STANDARD
        .decode(s)
        .map_err(|e| EncodingError::InvalidBase64(e.to_string()))
}
