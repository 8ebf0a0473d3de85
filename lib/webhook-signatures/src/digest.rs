//!
//! Content digests as carried by the `Digest` header
//!

use sha2::{Digest, Sha256};
use strum::AsRefStr;
use subtle::ConstantTimeEq;

/// Digest algorithm
#[derive(AsRefStr, Clone, Copy, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum Algorithm {
    #[default]
    #[strum(serialize = "sha-256")]
    Sha256,
}

impl Algorithm {
    /// Hash the data
    #[must_use]
    pub fn digest(&self, data: impl AsRef<[u8]>) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(data).to_vec(),
        }
    }

    /// Hash the data and format it as a `Digest` header value (`sha-256=<base64>`)
    #[must_use]
    pub fn header_value(&self, data: impl AsRef<[u8]>) -> String {
        let encoded_digest = base64_simd::STANDARD.encode_to_string(self.digest(data));
        format!("{}={encoded_digest}", self.as_ref())
    }

    /// Recompute the digest over the raw body and compare it to the declared header value
    ///
    /// The comparison runs in constant time
    #[must_use]
    pub fn verify(&self, body: impl AsRef<[u8]>, declared: &str) -> bool {
        let computed = self.header_value(body);
        computed.as_bytes().ct_eq(declared.as_bytes()).into()
    }
}
