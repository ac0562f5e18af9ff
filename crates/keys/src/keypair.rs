//! Ed25519 keypair generation and reconstruction.
//!
//! The external representation is the conventional 64-byte Solana keypair
//! blob: the 32-byte seed followed by the 32-byte public key. A bare
//! 32-byte seed is also accepted when reconstructing.

use ed25519_dalek::{Signer, SigningKey};
use rand_core::OsRng;
use zeroize::Zeroize;

use crate::error::CryptoError;

/// Length of an Ed25519 seed / public key.
pub const KEY_LEN: usize = 32;
/// Length of the seed || public-key keypair blob.
pub const KEYPAIR_LEN: usize = 64;

/// An Ed25519 keypair.
///
/// Wraps `ed25519_dalek::SigningKey`, which zeroizes its seed on drop.
pub struct Keypair {
    signing: SigningKey,
}

impl Keypair {
    /// Generate a fresh keypair from the operating system CSPRNG.
    ///
    /// Every call draws independent randomness; pairs are never reused or
    /// cached across calls.
    pub fn generate() -> Self {
        Keypair {
            signing: SigningKey::generate(&mut OsRng),
        }
    }

    /// Reconstruct a keypair from secret-key bytes.
    ///
    /// Accepts either a 32-byte seed or a 64-byte seed || public-key blob.
    /// For the 64-byte form the embedded public key must match the one
    /// derived from the seed; a mismatch means the blob was corrupted or
    /// mis-assembled and is rejected rather than silently re-derived.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        match bytes.len() {
            KEY_LEN => {
                let mut seed = [0u8; KEY_LEN];
                seed.copy_from_slice(bytes);
                let signing = SigningKey::from_bytes(&seed);
                seed.zeroize();
                Ok(Keypair { signing })
            }
            KEYPAIR_LEN => {
                let mut blob = [0u8; KEYPAIR_LEN];
                blob.copy_from_slice(bytes);
                let result = SigningKey::from_keypair_bytes(&blob).map_err(|_| {
                    CryptoError::InvalidSecretKey(
                        "public key half does not match seed".into(),
                    )
                });
                blob.zeroize();
                Ok(Keypair { signing: result? })
            }
            n => Err(CryptoError::InvalidSecretKey(format!(
                "expected {KEY_LEN} or {KEYPAIR_LEN} bytes, got {n}"
            ))),
        }
    }

    /// The 32-byte public key.
    pub fn public_key(&self) -> [u8; KEY_LEN] {
        self.signing.verifying_key().to_bytes()
    }

    /// The 64-byte seed || public-key blob.
    pub fn to_bytes(&self) -> [u8; KEYPAIR_LEN] {
        self.signing.to_keypair_bytes()
    }

    /// Sign a message. Deterministic per RFC 8032.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing.sign(message).to_bytes()
    }
}
