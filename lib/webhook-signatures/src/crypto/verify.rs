use super::PublicKey;
use miette::Diagnostic;
use thiserror::Error;

/// Verification error
#[derive(Debug, Diagnostic, Error)]
pub enum VerifyError {
    /// Failed to decode the Base64 payload
    #[error(transparent)]
    Base64(#[from] base64_simd::Error),

    /// Verification failed
    #[error("Verification failed")]
    Verification,
}

/// Decode a Base64-encoded signature
#[inline]
pub fn decode_signature(encoded_signature: &str) -> Result<Vec<u8>, VerifyError> {
    Ok(base64_simd::STANDARD.decode_to_vec(encoded_signature)?)
}

/// Verify that the message corresponds with the signature using the provided verifying key
#[inline]
pub fn verify(msg: &[u8], signature: &[u8], key: &PublicKey) -> Result<(), VerifyError> {
    key.verify(msg, signature)
        .map_err(|_| VerifyError::Verification)
}
