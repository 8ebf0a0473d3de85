use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::time::Duration;
use webhook_signatures::verifier;

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Ed25519 over the canonical signing string
    #[default]
    Ed25519,

    /// Legacy RSA PKCS#1 v1.5 SHA-256 over the raw body
    RsaSha256,
}

impl From<Mode> for verifier::Mode {
    fn from(value: Mode) -> Self {
        match value {
            Mode::Ed25519 => Self::Ed25519,
            Mode::RsaSha256 => Self::RsaSha256,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    #[serde(default)]
    pub mode: Mode,
    /// Hex-encoded key for `ed25519`, PEM for `rsa-sha256`
    pub public_key: SmolStr,
    pub account_id: Option<SmolStr>,
    pub max_signature_age_secs: Option<u64>,
}

impl From<&Configuration> for verifier::Configuration {
    fn from(value: &Configuration) -> Self {
        Self {
            mode: value.mode.into(),
            public_key: value.public_key.to_string(),
            key_id: value.account_id.as_ref().map(ToString::to_string),
            max_signature_age: value.max_signature_age_secs.map(Duration::from_secs),
        }
    }
}
