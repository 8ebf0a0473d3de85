//!
//! Common cryptographic operations
//!

mod verify;

pub mod parse;

pub use self::parse::{KeyAlgorithm, PublicKey};
pub use self::verify::{decode_signature, verify, VerifyError};
