//! # sol-instructions
//!
//! Unsigned Solana instruction construction: address validation, the
//! account-metadata and instruction value objects, and pure builders for
//! the System and SPL Token program operations the service supports.
//!
//! The builders implement the programs' binary interfaces by hand rather
//! than through `solana-sdk`. Opcode tags, field order, and account order
//! are a wire format fixed by the deployed programs, so the layouts here
//! are normative and covered by byte-level tests.

pub mod address;
pub mod error;
pub mod instruction;
pub mod request;
pub mod system;
pub mod token;

pub use address::{address_to_bytes, bytes_to_address, validate_address};
pub use error::{AddressError, InstructionError, ValidationError};
pub use instruction::{AccountMeta, Instruction};
pub use request::InstructionRequest;
pub use system::{build_system_transfer, SYSTEM_PROGRAM_ID};
pub use token::{
    build_initialize_mint, build_mint_to, build_token_transfer,
    derive_associated_token_address, ASSOCIATED_TOKEN_PROGRAM_ID, RENT_SYSVAR_ID,
    TOKEN_PROGRAM_ID,
};
