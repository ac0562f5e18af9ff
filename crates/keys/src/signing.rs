//! Message signing and signature verification.

use ed25519_dalek::{Signature, VerifyingKey};

use crate::error::CryptoError;
use crate::keypair::{Keypair, KEY_LEN};

/// Length of an Ed25519 signature.
pub const SIGNATURE_LEN: usize = 64;

/// Sign a message with the given secret key.
///
/// `secret_key` is either a 32-byte seed or a 64-byte seed || public-key
/// blob (see [`Keypair::from_bytes`]). Signing is deterministic per
/// RFC 8032: identical (message, secret key) inputs always produce the
/// identical signature.
pub fn sign(message: &[u8], secret_key: &[u8]) -> Result<[u8; SIGNATURE_LEN], CryptoError> {
    let keypair = Keypair::from_bytes(secret_key)?;
    Ok(keypair.sign(message))
}

/// Verify a signature over a message against a public key.
///
/// Returns `Ok(false)` when the inputs are well-formed but the signature
/// does not match; that outcome carries information and must not be
/// reported as an error. Returns `Err(CryptoError)` only when the
/// signature or public key is structurally malformed: wrong length, or a
/// 32-byte value that is not a decodable Edwards point.
pub fn verify(message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool, CryptoError> {
    let sig_bytes: [u8; SIGNATURE_LEN] = signature.try_into().map_err(|_| {
        CryptoError::InvalidSignature(format!(
            "expected {SIGNATURE_LEN} bytes, got {}",
            signature.len()
        ))
    })?;

    let key_bytes: [u8; KEY_LEN] = public_key.try_into().map_err(|_| {
        CryptoError::InvalidPublicKey(format!(
            "expected {KEY_LEN} bytes, got {}",
            public_key.len()
        ))
    })?;

    let verifying_key = VerifyingKey::from_bytes(&key_bytes)
        .map_err(|_| CryptoError::InvalidPublicKey("not a valid curve point".into()))?;

    let signature = Signature::from_bytes(&sig_bytes);

    Ok(verifying_key.verify_strict(message, &signature).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify_roundtrip() {
        let kp = Keypair::generate();
        let message = b"transfer 5 SOL to treasury";

        let signature = sign(message, &kp.to_bytes()).unwrap();
        assert!(verify(message, &signature, &kp.public_key()).unwrap());
    }

    #[test]
    fn sign_accepts_bare_seed() {
        let kp = Keypair::generate();
        let blob = kp.to_bytes();

        let from_blob = sign(b"msg", &blob).unwrap();
        let from_seed = sign(b"msg", &blob[..32]).unwrap();
        assert_eq!(from_blob, from_seed);
    }

    #[test]
    fn sign_is_deterministic() {
        let kp = Keypair::generate();
        let message = b"same message, same key";

        let first = sign(message, &kp.to_bytes()).unwrap();
        let second = sign(message, &kp.to_bytes()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn different_messages_different_signatures() {
        let kp = Keypair::generate();
        let a = sign(b"message one", &kp.to_bytes()).unwrap();
        let b = sign(b"message two", &kp.to_bytes()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn verify_rejects_cross_message_signature() {
        let kp = Keypair::generate();
        let signature = sign(b"original message", &kp.to_bytes()).unwrap();

        // Well-formed inputs, non-matching triple: Ok(false), not Err.
        let result = verify(b"tampered message", &signature, &kp.public_key());
        assert_eq!(result.unwrap(), false);
    }

    #[test]
    fn verify_rejects_wrong_key() {
        let signer = Keypair::generate();
        let other = Keypair::generate();
        let signature = sign(b"hello", &signer.to_bytes()).unwrap();

        assert_eq!(verify(b"hello", &signature, &other.public_key()).unwrap(), false);
    }

    #[test]
    fn verify_errors_on_short_signature() {
        let kp = Keypair::generate();
        let result = verify(b"hello", &[0u8; 63], &kp.public_key());
        assert!(matches!(result, Err(CryptoError::InvalidSignature(_))));
    }

    #[test]
    fn verify_errors_on_short_public_key() {
        let result = verify(b"hello", &[0u8; 64], &[0u8; 31]);
        assert!(matches!(result, Err(CryptoError::InvalidPublicKey(_))));
    }

    #[test]
    fn verify_errors_on_non_point_public_key() {
        // 0x02 repeated 32 times does not decompress to an Edwards point.
        let result = verify(b"hello", &[0u8; 64], &[0x02u8; 32]);
        assert!(matches!(result, Err(CryptoError::InvalidPublicKey(_))));
    }

    #[test]
    fn sign_errors_on_bad_secret_key_length() {
        let result = sign(b"hello", &[0x11u8; 48]);
        assert!(matches!(result, Err(CryptoError::InvalidSecretKey(_))));
    }

    #[test]
    fn flipped_signature_bit_fails_verification() {
        let kp = Keypair::generate();
        let mut signature = sign(b"hello", &kp.to_bytes()).unwrap();
        signature[10] ^= 0x01;
        assert_eq!(verify(b"hello", &signature, &kp.public_key()).unwrap(), false);
    }

    #[test]
    fn empty_message_signs_and_verifies() {
        let kp = Keypair::generate();
        let signature = sign(b"", &kp.to_bytes()).unwrap();
        assert!(verify(b"", &signature, &kp.public_key()).unwrap());
    }
}
