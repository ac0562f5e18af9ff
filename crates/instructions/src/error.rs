use thiserror::Error;

/// Address validation and derivation errors.
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("invalid address encoding: {0}")]
    InvalidEncoding(String),

    #[error("invalid address length: expected 32 bytes, got {0}")]
    InvalidLength(usize),

    #[error("address derivation failed: {0}")]
    DerivationFailed(String),
}

/// Parameter validation errors raised by the instruction builders.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{0} must be greater than zero")]
    ZeroAmount(&'static str),
}

/// Any failure an [`crate::InstructionRequest`] can produce.
///
/// The inner kind is preserved so callers can distinguish a bad address
/// from a bad numeric parameter.
#[derive(Debug, Error)]
pub enum InstructionError {
    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_encoding() {
        let err = AddressError::InvalidEncoding("bad char at 3".into());
        assert_eq!(err.to_string(), "invalid address encoding: bad char at 3");
    }

    #[test]
    fn display_invalid_length() {
        let err = AddressError::InvalidLength(31);
        assert_eq!(
            err.to_string(),
            "invalid address length: expected 32 bytes, got 31"
        );
    }

    #[test]
    fn display_zero_amount() {
        let err = ValidationError::ZeroAmount("lamports");
        assert_eq!(err.to_string(), "lamports must be greater than zero");
    }

    #[test]
    fn instruction_error_is_transparent() {
        let err: InstructionError = ValidationError::ZeroAmount("amount").into();
        assert_eq!(err.to_string(), "amount must be greater than zero");

        let err: InstructionError = AddressError::InvalidLength(16).into();
        assert!(err.to_string().contains("expected 32 bytes"));
    }
}
