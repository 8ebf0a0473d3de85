//!
//! Result of a verification run
//!

use strum::{AsRefStr, Display, IntoStaticStr};

/// Reason a webhook notification got rejected
///
/// The string representation is meant for internal logs only.
/// Never return it to the caller, it tells an attacker which check failed.
#[derive(AsRefStr, Clone, Copy, Debug, Display, Eq, Hash, IntoStaticStr, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum RejectReason {
    /// Signature header is absent
    SignatureMissing,

    /// Signature header is present but couldn't be parsed or decoded
    SignatureMalformed,

    /// Declared algorithm isn't the accepted one
    AlgorithmUnsupported,

    /// Declared key ID doesn't belong to the configured account
    KeyIdMismatch,

    /// Recomputed content digest differs from the declared one
    DigestMismatch,

    /// Cryptographic verification failed
    SignatureInvalid,

    /// Signature is valid but the signed date is outside the accepted window
    SignatureExpired,
}

/// Accept/reject decision
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
pub enum VerificationOutcome {
    /// Request is authentic
    Accepted,

    /// Request must not be processed
    Rejected(RejectReason),
}

impl VerificationOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Reason of the rejection, if the request was rejected
    #[must_use]
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

impl From<RejectReason> for VerificationOutcome {
    fn from(value: RejectReason) -> Self {
        Self::Rejected(value)
    }
}

impl From<Result<(), RejectReason>> for VerificationOutcome {
    fn from(value: Result<(), RejectReason>) -> Self {
        match value {
            Ok(()) => Self::Accepted,
            Err(reason) => Self::Rejected(reason),
        }
    }
}
