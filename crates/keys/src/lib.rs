//! # sol-keys
//!
//! Ed25519 key generation, message signing, and signature verification for
//! the instruction service, built directly on `ed25519-dalek`.
//!
//! Secret material only ever lives on the stack of the call that created
//! or received it: nothing here caches, logs, or persists a key, and
//! temporary seed buffers are zeroized before the functions return.

pub mod error;
pub mod keypair;
pub mod signing;

pub use error::CryptoError;
pub use keypair::Keypair;
pub use signing::{sign, verify, SIGNATURE_LEN};
