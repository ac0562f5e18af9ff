use thiserror::Error;

/// Cryptographic operation errors.
///
/// These cover structurally malformed input only. A well-formed signature
/// that simply does not match a message is NOT an error; `verify` reports
/// that as `Ok(false)` so callers can tell the two cases apart.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("invalid secret key: {0}")]
    InvalidSecretKey(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid signature: {0}")]
    InvalidSignature(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_secret_key() {
        let err = CryptoError::InvalidSecretKey("expected 32 or 64 bytes".into());
        assert_eq!(
            err.to_string(),
            "invalid secret key: expected 32 or 64 bytes"
        );
    }

    #[test]
    fn display_invalid_public_key() {
        let err = CryptoError::InvalidPublicKey("not a curve point".into());
        assert_eq!(err.to_string(), "invalid public key: not a curve point");
    }

    #[test]
    fn display_invalid_signature() {
        let err = CryptoError::InvalidSignature("expected 64 bytes, got 63".into());
        assert_eq!(
            err.to_string(),
            "invalid signature: expected 64 bytes, got 63"
        );
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> =
            Box::new(CryptoError::InvalidSecretKey("test".into()));
        assert!(err.to_string().contains("test"));
    }
}
