//! # sol-codec
//!
//! Base58 and Base64 encoding for the instruction service. Every
//! cryptographic value crossing the service boundary is text-encoded, and
//! this crate is the single place where those bytes are produced and
//! validated. No other crate touches `bs58` or `base64` directly.

pub mod base58;
pub mod base64;
pub mod error;

pub use base58::{decode_base58, decode_base58_exact, decode_base58_fixed, encode_base58};
pub use base64::{decode_base64, encode_base64};
pub use error::EncodingError;
