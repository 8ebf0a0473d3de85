//!
//! Decode the licensing service's public key material into a verification key
//!
//! Verification keys are always funnelled through a DER `SubjectPublicKeyInfo` envelope.
//! Raw Ed25519 keys (as distributed in hex) get wrapped into a minimal envelope first.
//!

use const_oid::db::{rfc5912::RSA_ENCRYPTION, rfc8410::ID_ED_25519};
use miette::Diagnostic;
use pkcs8::{
    der::{Decode, EncodePem},
    Document, LineEnding, SubjectPublicKeyInfoRef,
};
use ring::signature::{
    UnparsedPublicKey, VerificationAlgorithm, ED25519, RSA_PKCS1_2048_8192_SHA256,
};
use std::fmt;
use strum::{AsRefStr, Display};
use thiserror::Error;

/// Length of a raw Ed25519 public key
pub const ED25519_PUBLIC_KEY_LEN: usize = 32;

const TAG_BIT_STRING: u8 = 0x03;
const TAG_OBJECT_IDENTIFIER: u8 = 0x06;
const TAG_SEQUENCE: u8 = 0x30;

/// Largest length expressible in the single-byte (short) form
const MAX_SHORT_FORM_LEN: usize = 0x7f;

/// Key parsing error
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    /// Malformed DER structure
    #[error(transparent)]
    Der(#[from] pkcs8::der::Error),

    /// Key material isn't valid hex
    #[error("Key material is not valid hex")]
    Hex(#[from] hex_simd::Error),

    /// Raw key has the wrong size
    #[error("Invalid key length (expected {expected} bytes, got {actual} bytes)")]
    InvalidKeyLength {
        /// Expected length in bytes
        expected: usize,

        /// Supplied length in bytes
        actual: usize,
    },

    /// Block would need long-form length framing
    #[error("Block of {0} bytes doesn't fit a single-byte length")]
    LengthOverflow(usize),

    /// Malformed key
    #[error("Malformed key")]
    MalformedKey,

    /// Unknown key type
    #[error("Unknown key type")]
    UnknownKeyType,
}

/// Algorithm family of a public key
#[derive(AsRefStr, Clone, Copy, Debug, Display, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum KeyAlgorithm {
    /// Ed25519
    Ed25519,

    /// RSA (PKCS#1 v1.5, SHA-256)
    Rsa,
}

/// Decoded public key, ready for verification
///
/// Immutable after construction. Decode it once and share it.
#[derive(Clone)]
pub struct PublicKey {
    algorithm: KeyAlgorithm,
    der: Vec<u8>,
    inner: UnparsedPublicKey<Vec<u8>>,
}

impl PublicKey {
    #[must_use]
    pub fn algorithm(&self) -> KeyAlgorithm {
        self.algorithm
    }

    /// DER-encoded `SubjectPublicKeyInfo` envelope the key was decoded from
    #[must_use]
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }

    /// PEM-encoded `SubjectPublicKeyInfo`
    pub fn to_pem(&self) -> Result<String, Error> {
        let spki = SubjectPublicKeyInfoRef::from_der(&self.der)?;
        Ok(spki.to_pem(LineEnding::LF)?)
    }

    /// Verify the signature over the message
    pub fn verify(&self, msg: &[u8], signature: &[u8]) -> Result<(), ring::error::Unspecified> {
        self.inner.verify(msg, signature)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

fn write_block(buf: &mut Vec<u8>, tag: u8, contents: &[u8]) -> Result<(), Error> {
    let length = u8::try_from(contents.len())
        .ok()
        .filter(|length| usize::from(*length) <= MAX_SHORT_FORM_LEN)
        .ok_or(Error::LengthOverflow(contents.len()))?;

    buf.reserve(2 + contents.len());
    buf.push(tag);
    buf.push(length);
    buf.extend_from_slice(contents);

    Ok(())
}

/// Wrap a raw 32-byte Ed25519 public key into a DER `SubjectPublicKeyInfo` envelope
///
/// ```text
/// SEQUENCE {
///     SEQUENCE { OBJECT IDENTIFIER 1.3.101.112 }
///     BIT STRING { 0x00 (unused bits), <raw key> }
/// }
/// ```
///
/// Every block uses single-byte length framing.
/// Keys of any other size are rejected, never truncated.
pub fn ed25519_envelope(raw_key: &[u8]) -> Result<Vec<u8>, Error> {
    if raw_key.len() != ED25519_PUBLIC_KEY_LEN {
        return Err(Error::InvalidKeyLength {
            expected: ED25519_PUBLIC_KEY_LEN,
            actual: raw_key.len(),
        });
    }

    let mut algorithm_identifier = Vec::new();
    write_block(
        &mut algorithm_identifier,
        TAG_OBJECT_IDENTIFIER,
        ID_ED_25519.as_bytes(),
    )?;

    let mut subject_public_key = Vec::with_capacity(1 + raw_key.len());
    subject_public_key.push(0);
    subject_public_key.extend_from_slice(raw_key);

    let mut contents = Vec::new();
    write_block(&mut contents, TAG_SEQUENCE, &algorithm_identifier)?;
    write_block(&mut contents, TAG_BIT_STRING, &subject_public_key)?;

    let mut envelope = Vec::new();
    write_block(&mut envelope, TAG_SEQUENCE, &contents)?;

    Ok(envelope)
}

/// Decode a hex-encoded raw Ed25519 public key
#[inline]
pub fn ed25519_public_key_from_hex(hex: &str) -> Result<PublicKey, Error> {
    let raw_key = hex_simd::decode_to_vec(hex.trim())?;
    public_key_from_der(ed25519_envelope(&raw_key)?)
}

/// Parse a public key from its PEM `SubjectPublicKeyInfo` form
///
/// Currently supported algorithms:
///
/// - RSA
/// - Ed25519
#[inline]
pub fn public_key_from_pem(pem: &str) -> Result<PublicKey, Error> {
    let (_pem_tag, document) = Document::from_pem(pem.trim())?;
    public_key_from_der(document.as_bytes().to_vec())
}

/// Parse a public key from its DER `SubjectPublicKeyInfo` form
pub fn public_key_from_der(der: Vec<u8>) -> Result<PublicKey, Error> {
    let spki = SubjectPublicKeyInfoRef::from_der(&der)?;

    let (algorithm, verify_algo): (KeyAlgorithm, &'static dyn VerificationAlgorithm) =
        if spki.algorithm.oid == RSA_ENCRYPTION {
            (KeyAlgorithm::Rsa, &RSA_PKCS1_2048_8192_SHA256)
        } else if spki.algorithm.oid == ID_ED_25519 {
            (KeyAlgorithm::Ed25519, &ED25519)
        } else {
            return Err(Error::UnknownKeyType);
        };

    let raw_bytes = spki
        .subject_public_key
        .as_bytes()
        .ok_or(Error::MalformedKey)?
        .to_vec();

    if algorithm == KeyAlgorithm::Ed25519 && raw_bytes.len() != ED25519_PUBLIC_KEY_LEN {
        return Err(Error::InvalidKeyLength {
            expected: ED25519_PUBLIC_KEY_LEN,
            actual: raw_bytes.len(),
        });
    }

    Ok(PublicKey {
        algorithm,
        der,
        inner: UnparsedPublicKey::new(verify_algo, raw_bytes),
    })
}
