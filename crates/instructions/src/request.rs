//! The closed set of instruction-building operations.

use crate::error::InstructionError;
use crate::instruction::Instruction;
use crate::{system, token};

/// One of the four instruction kinds the service can construct.
///
/// The set is closed by design: dispatch is an explicit `match`, and a new
/// operation means a new variant, not a runtime registration mechanism.
/// All addresses are raw 32-byte public keys; string decoding and length
/// validation happen before a request is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstructionRequest {
    /// Native SOL transfer through the System Program.
    NativeTransfer {
        from: [u8; 32],
        to: [u8; 32],
        lamports: u64,
    },
    /// Initialize a new token mint.
    InitializeMint {
        mint: [u8; 32],
        mint_authority: [u8; 32],
        freeze_authority: Option<[u8; 32]>,
        decimals: u8,
    },
    /// Mint new token units to a token account.
    MintTo {
        mint: [u8; 32],
        destination: [u8; 32],
        authority: [u8; 32],
        amount: u64,
    },
    /// Transfer token units out of the owner's associated token account.
    /// The source account is derived from `owner` + `mint`.
    TokenTransfer {
        destination: [u8; 32],
        mint: [u8; 32],
        owner: [u8; 32],
        amount: u64,
    },
}

impl InstructionRequest {
    /// Build the instruction for this request.
    ///
    /// Pure: no I/O, no randomness, no clock. Fails before constructing
    /// anything when a parameter is invalid; a partially-built
    /// instruction is never returned.
    pub fn build(&self) -> Result<Instruction, InstructionError> {
        match self {
            InstructionRequest::NativeTransfer { from, to, lamports } => {
                Ok(system::build_system_transfer(from, to, *lamports)?)
            }
            InstructionRequest::InitializeMint {
                mint,
                mint_authority,
                freeze_authority,
                decimals,
            } => Ok(token::build_initialize_mint(
                mint,
                mint_authority,
                freeze_authority.as_ref(),
                *decimals,
            )),
            InstructionRequest::MintTo {
                mint,
                destination,
                authority,
                amount,
            } => Ok(token::build_mint_to(mint, destination, authority, *amount)?),
            InstructionRequest::TokenTransfer {
                destination,
                mint,
                owner,
                amount,
            } => {
                let source = token::derive_associated_token_address(owner, mint)?;
                Ok(token::build_token_transfer(
                    &source,
                    destination,
                    owner,
                    *amount,
                )?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{derive_associated_token_address, TOKEN_PROGRAM_ID};
    use crate::system::SYSTEM_PROGRAM_ID;

    #[test]
    fn native_transfer_dispatches_to_system_program() {
        let ix = InstructionRequest::NativeTransfer {
            from: [1u8; 32],
            to: [2u8; 32],
            lamports: 1_000,
        }
        .build()
        .unwrap();
        assert_eq!(ix.program_id, SYSTEM_PROGRAM_ID);
    }

    #[test]
    fn initialize_mint_dispatches_to_token_program() {
        let ix = InstructionRequest::InitializeMint {
            mint: [1u8; 32],
            mint_authority: [2u8; 32],
            freeze_authority: Some([2u8; 32]),
            decimals: 9,
        }
        .build()
        .unwrap();
        assert_eq!(ix.program_id, TOKEN_PROGRAM_ID);
        assert_eq!(ix.data[0], 0);
    }

    #[test]
    fn mint_to_builds() {
        let ix = InstructionRequest::MintTo {
            mint: [1u8; 32],
            destination: [2u8; 32],
            authority: [3u8; 32],
            amount: 42,
        }
        .build()
        .unwrap();
        assert_eq!(ix.data[0], 7);
    }

    #[test]
    fn token_transfer_source_is_derived_ata() {
        let owner = [0xAAu8; 32];
        let mint = [0xBBu8; 32];
        let destination = [0xCCu8; 32];

        let ix = InstructionRequest::TokenTransfer {
            destination,
            mint,
            owner,
            amount: 100,
        }
        .build()
        .unwrap();

        let expected_source = derive_associated_token_address(&owner, &mint).unwrap();
        assert_eq!(ix.accounts[0].pubkey, expected_source);
        assert_eq!(ix.accounts[1].pubkey, destination);
        assert_eq!(ix.accounts[2].pubkey, owner);
    }

    #[test]
    fn zero_amounts_fail_across_variants() {
        let zero_native = InstructionRequest::NativeTransfer {
            from: [1u8; 32],
            to: [2u8; 32],
            lamports: 0,
        };
        let zero_mint_to = InstructionRequest::MintTo {
            mint: [1u8; 32],
            destination: [2u8; 32],
            authority: [3u8; 32],
            amount: 0,
        };
        let zero_transfer = InstructionRequest::TokenTransfer {
            destination: [1u8; 32],
            mint: [2u8; 32],
            owner: [3u8; 32],
            amount: 0,
        };

        for request in [zero_native, zero_mint_to, zero_transfer] {
            let result = request.build();
            assert!(
                matches!(result, Err(InstructionError::Validation(_))),
                "{request:?} should fail validation"
            );
        }
    }
}
