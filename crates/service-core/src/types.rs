//! Response value objects returned to the transport layer.
//!
//! Field names follow the external API contract (camelCase on the wire),
//! so the transport layer can serialize these directly.

use serde::{Deserialize, Serialize};

/// A freshly generated keypair.
///
/// `secret` is the Base58 encoding of the 64-byte seed || public-key blob.
/// It exists only in this value on its way out of the service; nothing is
/// retained after the response is produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeypairResponse {
    pub pubkey: String,
    pub secret: String,
}

/// A signature over a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignResponse {
    pub signature: String,
    pub pubkey: String,
    pub message: String,
}

/// The outcome of a signature verification.
///
/// `valid: false` means the inputs were well-formed but did not match;
/// malformed inputs never reach this type, they error out earlier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

/// One account reference in a serialized instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMetaResponse {
    pub pubkey: String,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// A serialized unsigned instruction: Base58 program id and account keys,
/// Base64 data payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionResponse {
    pub program_id: String,
    pub accounts: Vec<AccountMetaResponse>,
    pub instruction_data: String,
}
