//! SPL Token Program instructions and associated-token-account derivation.
//!
//! The Token Program's instruction encoding is a one-byte tag followed by
//! the operation's fields, serialized little-endian. Tags used here:
//! `InitializeMint` = 0, `Transfer` = 3, `MintTo` = 7.

use sha2::{Digest, Sha256};

use crate::error::{AddressError, ValidationError};
use crate::instruction::{AccountMeta, Instruction};

// ---------------------------------------------------------------------------
// Well-known program IDs
// ---------------------------------------------------------------------------

/// SPL Token Program: `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`
pub const TOKEN_PROGRAM_ID: [u8; 32] = [
    0x06, 0xdd, 0xf6, 0xe1, 0xd7, 0x65, 0xa1, 0x93, 0xd9, 0xcb, 0xe1, 0x46, 0xce, 0xeb, 0x79,
    0xac, 0x1c, 0xb4, 0x85, 0xed, 0x5f, 0x5b, 0x37, 0x91, 0x3a, 0x8c, 0xf5, 0x85, 0x7e, 0xff,
    0x00, 0xa9,
];

/// Associated Token Account Program: `ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`
pub const ASSOCIATED_TOKEN_PROGRAM_ID: [u8; 32] = [
    0x8c, 0x97, 0x25, 0x8f, 0x4e, 0x24, 0x89, 0xf1, 0xbb, 0x3d, 0x10, 0x29, 0x14, 0x8e, 0x0d,
    0x83, 0x0b, 0x5a, 0x13, 0x99, 0xda, 0xff, 0x10, 0x84, 0x04, 0x8e, 0x7b, 0xd8, 0xdb, 0xe9,
    0xf8, 0x59,
];

/// Rent sysvar: `SysvarRent111111111111111111111111111111111`
///
/// `InitializeMint` reads it to check the mint account is rent-exempt.
pub const RENT_SYSVAR_ID: [u8; 32] = [
    0x06, 0xa7, 0xd5, 0x17, 0x19, 0x2c, 0x5c, 0x51, 0x21, 0x8c, 0xc9, 0x4c, 0x3d, 0x4a, 0xf1,
    0x7f, 0x58, 0xda, 0xee, 0x08, 0x9b, 0xa1, 0xfd, 0x44, 0xe3, 0xdb, 0xd9, 0x8a, 0x00, 0x00,
    0x00, 0x00,
];

/// The string appended to PDA derivation: "ProgramDerivedAddress".
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

const INITIALIZE_MINT_TAG: u8 = 0;
const TRANSFER_TAG: u8 = 3;
const MINT_TO_TAG: u8 = 7;

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build an `InitializeMint` instruction for a new token mint.
///
/// `decimals` is stored as-is; the full `u8` range is accepted (the
/// conventional ≤ 9 bound is not a program rule and is not enforced here).
///
/// # Wire format
///
/// Data: tag 0, decimals byte, 32-byte mint authority, then the freeze
/// authority as a `COption<Pubkey>`: a flag byte (0 or 1) followed by
/// 32 bytes when set. 35 or 67 bytes total. Accounts, in order:
/// `mint` (writable), rent sysvar (read-only).
pub fn build_initialize_mint(
    mint: &[u8; 32],
    mint_authority: &[u8; 32],
    freeze_authority: Option<&[u8; 32]>,
    decimals: u8,
) -> Instruction {
    let mut data = Vec::with_capacity(67);
    data.push(INITIALIZE_MINT_TAG);
    data.push(decimals);
    data.extend_from_slice(mint_authority);
    match freeze_authority {
        Some(authority) => {
            data.push(1);
            data.extend_from_slice(authority);
        }
        None => data.push(0),
    }

    Instruction {
        program_id: TOKEN_PROGRAM_ID,
        accounts: vec![
            AccountMeta::writable(*mint),
            AccountMeta::readonly(RENT_SYSVAR_ID),
        ],
        data,
    }
}

/// Build a `MintTo` instruction crediting `amount` base units to
/// `destination` (a token account of the mint).
///
/// # Wire format
///
/// Data: tag 7 + u64 LE amount, 9 bytes. Accounts, in order:
/// `mint` (writable), `destination` (writable), `authority` (signer).
pub fn build_mint_to(
    mint: &[u8; 32],
    destination: &[u8; 32],
    authority: &[u8; 32],
    amount: u64,
) -> Result<Instruction, ValidationError> {
    if amount == 0 {
        return Err(ValidationError::ZeroAmount("amount"));
    }

    let mut data = Vec::with_capacity(9);
    data.push(MINT_TO_TAG);
    data.extend_from_slice(&amount.to_le_bytes());

    Ok(Instruction {
        program_id: TOKEN_PROGRAM_ID,
        accounts: vec![
            AccountMeta::writable(*mint),
            AccountMeta::writable(*destination),
            AccountMeta::readonly_signer(*authority),
        ],
        data,
    })
}

/// Build a `Transfer` instruction moving `amount` base units between two
/// token accounts owned by `owner`'s wallet.
///
/// # Wire format
///
/// Data: tag 3 + u64 LE amount, 9 bytes. Accounts, in order:
/// `source` (writable), `destination` (writable), `owner` (signer).
pub fn build_token_transfer(
    source: &[u8; 32],
    destination: &[u8; 32],
    owner: &[u8; 32],
    amount: u64,
) -> Result<Instruction, ValidationError> {
    if amount == 0 {
        return Err(ValidationError::ZeroAmount("amount"));
    }

    let mut data = Vec::with_capacity(9);
    data.push(TRANSFER_TAG);
    data.extend_from_slice(&amount.to_le_bytes());

    Ok(Instruction {
        program_id: TOKEN_PROGRAM_ID,
        accounts: vec![
            AccountMeta::writable(*source),
            AccountMeta::writable(*destination),
            AccountMeta::readonly_signer(*owner),
        ],
        data,
    })
}

// ---------------------------------------------------------------------------
// Associated Token Account (PDA) derivation
// ---------------------------------------------------------------------------

/// Derive the associated token account address for a wallet + mint pair.
///
/// The ATA is a Program Derived Address with seeds
/// `[wallet, token_program_id, mint]` under the Associated Token Account
/// program. Derivation searches bump seeds 255 down to 0 for the first
/// digest that is NOT an Ed25519 curve point.
pub fn derive_associated_token_address(
    wallet: &[u8; 32],
    mint: &[u8; 32],
) -> Result<[u8; 32], AddressError> {
    find_program_address(
        &[wallet.as_ref(), &TOKEN_PROGRAM_ID, mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
    .map(|(address, _bump)| address)
}

/// Find a valid PDA for the given seeds and program.
///
/// Computes `SHA-256(seed_0 || ... || bump || program_id || "ProgramDerivedAddress")`
/// for bump = 255, 254, ... and returns the first off-curve result.
fn find_program_address(
    seeds: &[&[u8]],
    program_id: &[u8; 32],
) -> Result<([u8; 32], u8), AddressError> {
    for bump in (0u8..=255).rev() {
        if let Some(address) = try_create_program_address(seeds, &[bump], program_id) {
            return Ok((address, bump));
        }
    }

    Err(AddressError::DerivationFailed(
        "no valid bump seed found".into(),
    ))
}

/// Returns `Some(address)` if the derived digest is OFF the Ed25519 curve,
/// `None` if it lands on the curve (invalid PDA, try the next bump).
fn try_create_program_address(
    seeds: &[&[u8]],
    bump_seed: &[u8],
    program_id: &[u8; 32],
) -> Option<[u8; 32]> {
    let mut hasher = Sha256::new();

    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update(bump_seed);
    hasher.update(program_id);
    hasher.update(PDA_MARKER);

    let hash: [u8; 32] = hasher.finalize().into();

    if is_on_curve(&hash) {
        return None;
    }

    Some(hash)
}

/// Check whether 32 bytes decompress to a valid Ed25519 curve point.
fn is_on_curve(bytes: &[u8; 32]) -> bool {
    curve25519_dalek::edwards::CompressedEdwardsY(*bytes)
        .decompress()
        .is_some()
}
