//! System Program instructions.

use crate::error::ValidationError;
use crate::instruction::{AccountMeta, Instruction};

/// The System Program public key: 32 zero bytes.
/// Base58: `11111111111111111111111111111111`
pub const SYSTEM_PROGRAM_ID: [u8; 32] = [0u8; 32];

/// System Program `Transfer` instruction index (little-endian u32).
const SYSTEM_TRANSFER_IX_INDEX: u32 = 2;

/// Build a System Program `Transfer` instruction moving `lamports` from
/// `from` to `to`.
///
/// # Wire format
///
/// Data is the u32 LE instruction index (2 = Transfer) followed by the
/// u64 LE lamport amount: 12 bytes total. Accounts, in order:
/// `from` (signer, writable), `to` (writable).
pub fn build_system_transfer(
    from: &[u8; 32],
    to: &[u8; 32],
    lamports: u64,
) -> Result<Instruction, ValidationError> {
    if lamports == 0 {
        return Err(ValidationError::ZeroAmount("lamports"));
    }

    let mut data = Vec::with_capacity(12);
    data.extend_from_slice(&SYSTEM_TRANSFER_IX_INDEX.to_le_bytes());
    data.extend_from_slice(&lamports.to_le_bytes());

    Ok(Instruction {
        program_id: SYSTEM_PROGRAM_ID,
        accounts: vec![AccountMeta::signer(*from), AccountMeta::writable(*to)],
        data,
    })
}
