use super::{ensure_algorithm, Error, Verifier};
use crate::{
    cavage::{self, signature_string},
    crypto::{self, KeyAlgorithm, PublicKey},
    digest, RawRequest, RejectReason, VerificationOutcome, DIGEST_HEADER, SIGNATURE_HEADER,
};
use http::header::DATE;
use std::time::{Duration, SystemTime};
use tracing::{debug, instrument, trace};

/// The only algorithm name accepted in the signature header
pub const ALGORITHM: &str = "ed25519";

/// Ed25519 verification over the canonical signing string
#[derive(Clone, Debug)]
pub struct CanonicalVerifier {
    public_key: PublicKey,
    key_id: Option<String>,
    max_signature_age: Option<Duration>,
}

impl CanonicalVerifier {
    /// Construct a new verifier with the licensing service's public key
    pub fn new(public_key: PublicKey) -> Result<Self, Error> {
        ensure_algorithm(&public_key, KeyAlgorithm::Ed25519)?;

        Ok(Self {
            public_key,
            key_id: None,
            max_signature_age: None,
        })
    }

    /// Only accept signatures that declare this key ID
    #[must_use]
    pub fn with_key_id(self, key_id: impl Into<String>) -> Self {
        Self {
            key_id: Some(key_id.into()),
            ..self
        }
    }

    /// Reject signatures whose signed `Date` is further away from now than this
    #[must_use]
    pub fn with_max_signature_age(self, max_signature_age: Duration) -> Self {
        Self {
            max_signature_age: Some(max_signature_age),
            ..self
        }
    }

    /// Verify the request against the provided point in time
    #[instrument(skip_all, fields(scheme = ALGORITHM))]
    pub fn verify_at(&self, request: &RawRequest, now: SystemTime) -> VerificationOutcome {
        let outcome = VerificationOutcome::from(self.check(request, now));
        if let VerificationOutcome::Rejected(reason) = outcome {
            debug!(%reason, "rejected webhook request");
        }

        outcome
    }

    fn check(&self, request: &RawRequest, now: SystemTime) -> Result<(), RejectReason> {
        let header = request
            .header(&SIGNATURE_HEADER)
            .ok_or(RejectReason::SignatureMissing)?
            .to_str()
            .map_err(|_| RejectReason::SignatureMalformed)?;

        let signature_header = cavage::parse(header).map_err(|error| {
            debug!(?error, "failed to parse signature header");
            RejectReason::SignatureMalformed
        })?;

        let encoded_signature = signature_header
            .signature()
            .ok_or(RejectReason::SignatureMalformed)?;
        trace!(signature = encoded_signature);

        if signature_header.algorithm() != Some(ALGORITHM) {
            return Err(RejectReason::AlgorithmUnsupported);
        }

        let signature = crypto::decode_signature(encoded_signature).map_err(|error| {
            debug!(?error, "failed to decode signature");
            RejectReason::SignatureMalformed
        })?;

        if let Some(ref expected_key_id) = self.key_id {
            if signature_header.key_id() != Some(expected_key_id.as_str()) {
                return Err(RejectReason::KeyIdMismatch);
            }
        }

        let digest = request
            .header(&DIGEST_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(RejectReason::DigestMismatch)?;

        if !digest::Algorithm::Sha256.verify(request.body(), digest) {
            return Err(RejectReason::DigestMismatch);
        }

        // Without host and date we can't reconstruct what was signed
        let signature_string =
            signature_string::construct_for_request(request, digest).map_err(|error| {
                debug!(?error, "failed to construct signature string");
                RejectReason::SignatureInvalid
            })?;

        crypto::verify(signature_string.as_bytes(), &signature, &self.public_key)
            .map_err(|_| RejectReason::SignatureInvalid)?;

        if let Some(max_signature_age) = self.max_signature_age {
            let date = request
                .header(DATE)
                .and_then(|value| value.to_str().ok())
                .ok_or(RejectReason::SignatureExpired)?;

            match cavage::is_fresh(date, max_signature_age, now) {
                Ok(true) => {}
                Ok(false) => return Err(RejectReason::SignatureExpired),
                Err(error) => {
                    debug!(?error, "failed to parse signed date");
                    return Err(RejectReason::SignatureExpired);
                }
            }
        }

        Ok(())
    }
}

impl Verifier for CanonicalVerifier {
    fn verify(&self, request: &RawRequest) -> VerificationOutcome {
        self.verify_at(request, SystemTime::now())
    }
}
