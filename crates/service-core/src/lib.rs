//! # service-core
//!
//! The stateless operation surface the transport layer calls into:
//! keypair generation, message signing and verification, and construction
//! of unsigned System / SPL Token instructions. Everything here is
//! string-in / string-out (Base58 for keys, addresses, and signatures,
//! Base64 for instruction data) with decoding, validation, and encoding
//! delegated to the leaf crates.
//!
//! No operation retains state between calls, performs I/O, or logs: the
//! transport layer owns routing, response envelopes, and observability.

pub mod error;
pub mod types;

use sol_codec::{decode_base58, encode_base58, encode_base64};
use sol_instructions::{address_to_bytes, bytes_to_address, Instruction, InstructionRequest};
use sol_keys::Keypair;

pub use error::ServiceError;
pub use types::{
    AccountMetaResponse, InstructionResponse, KeypairResponse, SignResponse, VerifyResponse,
};

/// Generate a fresh Ed25519 keypair.
///
/// The secret is the Base58-encoded 64-byte seed || public-key blob. It is
/// returned to the caller and immediately forgotten; the service never
/// stores key material.
pub fn generate_keypair() -> KeypairResponse {
    let keypair = Keypair::generate();
    KeypairResponse {
        pubkey: bytes_to_address(&keypair.public_key()),
        secret: encode_base58(&keypair.to_bytes()),
    }
}

/// Sign a UTF-8 message with a Base58-encoded secret key.
///
/// The secret may be a 32-byte seed or a 64-byte keypair blob. The
/// response echoes the message and includes the signer's public key so the
/// caller can verify without re-deriving it.
pub fn sign_message(message: &str, secret_b58: &str) -> Result<SignResponse, ServiceError> {
    let secret = decode_base58(secret_b58)?;
    let keypair = Keypair::from_bytes(&secret)?;
    let signature = keypair.sign(message.as_bytes());

    Ok(SignResponse {
        signature: encode_base58(&signature),
        pubkey: bytes_to_address(&keypair.public_key()),
        message: message.to_owned(),
    })
}

/// Verify a Base58 signature over a UTF-8 message against a Base58 public
/// key.
///
/// Malformed encodings, wrong lengths, and non-decodable public keys are
/// errors; a well-formed triple that simply does not match yields
/// `valid: false`. The transport layer relies on that distinction.
pub fn verify_signature(
    message: &str,
    signature_b58: &str,
    pubkey_b58: &str,
) -> Result<VerifyResponse, ServiceError> {
    let signature = decode_base58(signature_b58)?;
    let pubkey = address_to_bytes(pubkey_b58)?;

    let valid = sol_keys::verify(message.as_bytes(), &signature, &pubkey)?;
    Ok(VerifyResponse { valid })
}

/// Build an unsigned native SOL transfer.
pub fn build_native_transfer(
    from_b58: &str,
    to_b58: &str,
    lamports: u64,
) -> Result<InstructionResponse, ServiceError> {
    let from = address_to_bytes(from_b58)?;
    let to = address_to_bytes(to_b58)?;

    let instruction = InstructionRequest::NativeTransfer { from, to, lamports }.build()?;
    Ok(encode_instruction(&instruction))
}

/// Build an unsigned `InitializeMint` instruction.
///
/// The mint authority is also installed as the freeze authority, matching
/// the service's token-creation semantics.
pub fn build_create_mint(
    mint_authority_b58: &str,
    mint_b58: &str,
    decimals: u8,
) -> Result<InstructionResponse, ServiceError> {
    let mint_authority = address_to_bytes(mint_authority_b58)?;
    let mint = address_to_bytes(mint_b58)?;

    let instruction = InstructionRequest::InitializeMint {
        mint,
        mint_authority,
        freeze_authority: Some(mint_authority),
        decimals,
    }
    .build()?;
    Ok(encode_instruction(&instruction))
}

/// Build an unsigned `MintTo` instruction.
pub fn build_mint_to(
    mint_b58: &str,
    destination_b58: &str,
    authority_b58: &str,
    amount: u64,
) -> Result<InstructionResponse, ServiceError> {
    let mint = address_to_bytes(mint_b58)?;
    let destination = address_to_bytes(destination_b58)?;
    let authority = address_to_bytes(authority_b58)?;

    let instruction = InstructionRequest::MintTo {
        mint,
        destination,
        authority,
        amount,
    }
    .build()?;
    Ok(encode_instruction(&instruction))
}

/// Build an unsigned SPL token transfer.
///
/// The source account is the owner's associated token account for the
/// mint, derived internally; the caller supplies only destination, mint,
/// and owner.
pub fn build_token_transfer(
    destination_b58: &str,
    mint_b58: &str,
    owner_b58: &str,
    amount: u64,
) -> Result<InstructionResponse, ServiceError> {
    let destination = address_to_bytes(destination_b58)?;
    let mint = address_to_bytes(mint_b58)?;
    let owner = address_to_bytes(owner_b58)?;

    let instruction = InstructionRequest::TokenTransfer {
        destination,
        mint,
        owner,
        amount,
    }
    .build()?;
    Ok(encode_instruction(&instruction))
}

/// Encode an instruction for the response: Base58 keys, Base64 data.
fn encode_instruction(instruction: &Instruction) -> InstructionResponse {
    InstructionResponse {
        program_id: bytes_to_address(&instruction.program_id),
        accounts: instruction
            .accounts
            .iter()
            .map(|meta| AccountMetaResponse {
                pubkey: bytes_to_address(&meta.pubkey),
                is_signer: meta.is_signer,
                is_writable: meta.is_writable,
            })
            .collect(),
        instruction_data: encode_base64(&instruction.data),
    }
}
