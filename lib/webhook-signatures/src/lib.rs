//!
//! Authenticity verification for webhook notifications sent by the licensing service
//!
//! Two schemes are supported, one per deployment:
//!
//! - Ed25519 over a canonical signing string (`Keygen-Signature` header)
//! - RSA PKCS#1 v1.5 SHA-256 over the raw body (legacy `X-Signature` header)
//!
//! The crate performs no I/O. Build a [`Verifier`] once at startup and share it.
//!

use http::HeaderName;

pub mod cavage;
pub mod crypto;
pub mod digest;
pub mod outcome;
pub mod verifier;

mod request;

pub use self::outcome::{RejectReason, VerificationOutcome};
pub use self::request::RawRequest;
pub use self::verifier::Verifier;

/// Parameterised signature header used by the canonical-string scheme
pub static SIGNATURE_HEADER: HeaderName = HeaderName::from_static("keygen-signature");

/// Signature header used by the raw-body scheme
pub static LEGACY_SIGNATURE_HEADER: HeaderName = HeaderName::from_static("x-signature");

/// Header carrying the content digest of the body
pub static DIGEST_HEADER: HeaderName = HeaderName::from_static("digest");
