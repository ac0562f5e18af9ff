//! Instruction value objects.

/// A single account reference in an instruction.
///
/// Position within the account list is semantically significant: the
/// target program addresses accounts by index, so the list is an ordered
/// sequence fixed per operation, not a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountMeta {
    pub pubkey: [u8; 32],
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    /// A writable account that must sign.
    pub fn signer(pubkey: [u8; 32]) -> Self {
        AccountMeta {
            pubkey,
            is_signer: true,
            is_writable: true,
        }
    }

    /// A read-only account that must sign.
    pub fn readonly_signer(pubkey: [u8; 32]) -> Self {
        AccountMeta {
            pubkey,
            is_signer: true,
            is_writable: false,
        }
    }

    /// A writable, non-signing account.
    pub fn writable(pubkey: [u8; 32]) -> Self {
        AccountMeta {
            pubkey,
            is_signer: false,
            is_writable: true,
        }
    }

    /// A read-only, non-signing account.
    pub fn readonly(pubkey: [u8; 32]) -> Self {
        AccountMeta {
            pubkey,
            is_signer: false,
            is_writable: false,
        }
    }
}

/// An unsigned program instruction: the program to invoke, the ordered
/// account list, and the serialized data payload.
///
/// Produced once by a builder and consumed once for response encoding;
/// never mutated in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub program_id: [u8; 32],
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}
