//! Solana address validation.
//!
//! A Solana address is the Base58 encoding of a raw 32-byte Ed25519 public
//! key, with no hashing and no checksum step. Every address entering a builder passes
//! through here first, so no malformed pubkey ever reaches an
//! [`crate::AccountMeta`].
//!
//! Whether the 32 bytes form a valid curve point is NOT checked; program
//! addresses (PDAs) are deliberately off-curve, and on-curve validation of
//! wallet addresses is left to downstream signature verification.

use sol_codec::{decode_base58_fixed, encode_base58, EncodingError};

use crate::error::AddressError;

/// Decode an address string to its 32-byte public key.
pub fn address_to_bytes(address: &str) -> Result<[u8; 32], AddressError> {
    decode_base58_fixed::<32>(address).map_err(|e| match e {
        EncodingError::LengthMismatch { actual, .. } => AddressError::InvalidLength(actual),
        other => AddressError::InvalidEncoding(other.to_string()),
    })
}

/// Encode a 32-byte public key as an address string.
pub fn bytes_to_address(bytes: &[u8; 32]) -> String {
    encode_base58(bytes)
}

/// Check that a string is a well-formed address.
pub fn validate_address(address: &str) -> Result<(), AddressError> {
    address_to_bytes(address).map(|_| ())
}
