use super::{ensure_algorithm, Error, Verifier};
use crate::{
    crypto::{self, KeyAlgorithm, PublicKey},
    RawRequest, RejectReason, VerificationOutcome, LEGACY_SIGNATURE_HEADER,
};
use tracing::{debug, instrument};

/// Legacy RSA verification over the raw request body
///
/// Neither the method, the path, the host nor the date are covered by the signature.
/// A captured notification stays valid forever. Prefer [`super::CanonicalVerifier`].
#[derive(Clone, Debug)]
pub struct RawBodyVerifier {
    public_key: PublicKey,
}

impl RawBodyVerifier {
    /// Construct a new verifier with the licensing service's RSA public key
    pub fn new(public_key: PublicKey) -> Result<Self, Error> {
        ensure_algorithm(&public_key, KeyAlgorithm::Rsa)?;
        Ok(Self { public_key })
    }

    fn check(&self, request: &RawRequest) -> Result<(), RejectReason> {
        let encoded_signature = request
            .header(&LEGACY_SIGNATURE_HEADER)
            .ok_or(RejectReason::SignatureMissing)?
            .to_str()
            .map_err(|_| RejectReason::SignatureMalformed)?;

        let signature = crypto::decode_signature(encoded_signature.trim()).map_err(|error| {
            debug!(?error, "failed to decode signature");
            RejectReason::SignatureMalformed
        })?;

        crypto::verify(request.body(), &signature, &self.public_key)
            .map_err(|_| RejectReason::SignatureInvalid)
    }
}

impl Verifier for RawBodyVerifier {
    #[instrument(skip_all, fields(scheme = "rsa-sha256"))]
    fn verify(&self, request: &RawRequest) -> VerificationOutcome {
        let outcome = VerificationOutcome::from(self.check(request));
        if let VerificationOutcome::Rejected(reason) = outcome {
            debug!(%reason, "rejected webhook request");
        }

        outcome
    }
}
