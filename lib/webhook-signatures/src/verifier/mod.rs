//!
//! Verification orchestrators
//!
//! Each deployment picks exactly one scheme at configuration time:
//!
//! - [`CanonicalVerifier`]: Ed25519 over the canonical signing string. Binds method, path, host and date.
//! - [`RawBodyVerifier`]: legacy RSA over the raw body. Doesn't bind any request metadata.
//!

use crate::{
    crypto::{self, KeyAlgorithm},
    RawRequest, VerificationOutcome,
};
use miette::Diagnostic;
use std::{sync::Arc, time::Duration};
use strum::{AsRefStr, Display, EnumString};
use thiserror::Error;

mod canonical;
mod raw_body;

pub use self::canonical::{CanonicalVerifier, ALGORITHM};
pub use self::raw_body::RawBodyVerifier;

/// Verifier construction error
///
/// Only ever happens at configuration time. Treat it as fatal.
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    /// Configured public key failed to decode
    #[error("Invalid public key material")]
    KeyMaterialInvalid(#[from] crypto::parse::Error),

    /// Configured public key belongs to a different algorithm family than the scheme needs
    #[error("Expected a {expected} key, got a {actual} key")]
    KeyTypeMismatch {
        /// Algorithm the scheme needs
        expected: KeyAlgorithm,

        /// Algorithm of the configured key
        actual: KeyAlgorithm,
    },
}

/// Verification scheme
#[derive(AsRefStr, Clone, Copy, Debug, Default, Display, EnumString, Eq, PartialEq)]
pub enum Mode {
    /// Ed25519 over the canonical signing string
    #[default]
    #[strum(serialize = "ed25519")]
    Ed25519,

    /// RSA PKCS#1 v1.5 SHA-256 over the raw body
    #[strum(serialize = "rsa-sha256")]
    RsaSha256,
}

/// Verifier configuration
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    /// Verification scheme
    pub mode: Mode,

    /// Public key of the licensing service
    ///
    /// Hex-encoded raw key for [`Mode::Ed25519`], PEM `SubjectPublicKeyInfo` for [`Mode::RsaSha256`]
    pub public_key: String,

    /// Only accept signatures declaring this key ID (canonical scheme only)
    pub key_id: Option<String>,

    /// Reject signatures whose signed date is further away than this (canonical scheme only)
    pub max_signature_age: Option<Duration>,
}

/// Decides whether an inbound webhook request is authentic
///
/// Implementations are pure and synchronous. They never panic on request input.
pub trait Verifier: Send + Sync {
    /// Verify the request
    fn verify(&self, request: &RawRequest) -> VerificationOutcome;
}

impl<T> Verifier for Arc<T>
where
    T: Verifier + ?Sized,
{
    fn verify(&self, request: &RawRequest) -> VerificationOutcome {
        (**self).verify(request)
    }
}

fn ensure_algorithm(key: &crypto::PublicKey, expected: KeyAlgorithm) -> Result<(), Error> {
    if key.algorithm() == expected {
        Ok(())
    } else {
        Err(Error::KeyTypeMismatch {
            expected,
            actual: key.algorithm(),
        })
    }
}

/// Build the verifier selected by the configuration
///
/// Decodes the public key exactly once
pub fn build(config: &Configuration) -> Result<Arc<dyn Verifier>, Error> {
    let verifier: Arc<dyn Verifier> = match config.mode {
        Mode::Ed25519 => {
            let public_key = crypto::parse::ed25519_public_key_from_hex(&config.public_key)?;
            let mut verifier = CanonicalVerifier::new(public_key)?;

            if let Some(ref key_id) = config.key_id {
                verifier = verifier.with_key_id(key_id.clone());
            }
            if let Some(max_signature_age) = config.max_signature_age {
                verifier = verifier.with_max_signature_age(max_signature_age);
            }

            Arc::new(verifier)
        }
        Mode::RsaSha256 => {
            let public_key = crypto::parse::public_key_from_pem(&config.public_key)?;
            Arc::new(RawBodyVerifier::new(public_key)?)
        }
    };

    Ok(verifier)
}
