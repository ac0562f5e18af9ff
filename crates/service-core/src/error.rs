use thiserror::Error;

use sol_codec::EncodingError;
use sol_instructions::{AddressError, InstructionError, ValidationError};
use sol_keys::CryptoError;

/// Any failure a service operation can produce.
///
/// The leaf kind is preserved, never flattened into a generic message: the
/// transport layer picks a status code by matching on the variant, and
/// collapsing kinds here would lose that information.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Address(#[from] AddressError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<InstructionError> for ServiceError {
    fn from(e: InstructionError) -> Self {
        match e {
            InstructionError::Address(e) => ServiceError::Address(e),
            InstructionError::Validation(e) => ServiceError::Validation(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_messages_pass_through() {
        let err: ServiceError = ValidationError::ZeroAmount("lamports").into();
        assert_eq!(err.to_string(), "lamports must be greater than zero");

        let err: ServiceError = AddressError::InvalidLength(31).into();
        assert!(err.to_string().contains("expected 32 bytes"));
    }

    #[test]
    fn instruction_error_kinds_are_preserved() {
        let err: ServiceError = InstructionError::from(AddressError::InvalidLength(4)).into();
        assert!(matches!(err, ServiceError::Address(_)));

        let err: ServiceError =
            InstructionError::from(ValidationError::ZeroAmount("amount")).into();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
