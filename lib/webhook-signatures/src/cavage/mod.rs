//!
//! Parameterised (cavage-style) signature headers
//!

use std::collections::BTreeMap;

mod parse;
mod safety_check;
mod serialise;

pub mod signature_string;

pub use self::parse::{parse, ParseError};
pub use self::safety_check::{is_fresh, SafetyCheckError};
pub use self::serialise::serialise;

/// Parsed signature header
///
/// Open mapping of every `key="value"` pair found in the header.
/// Keys are unique, lookups are case-sensitive (as they are on the wire).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SignatureHeader<'a> {
    fields: BTreeMap<&'a str, &'a str>,
}

impl<'a> SignatureHeader<'a> {
    /// Look up an arbitrary parameter
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.fields.get(key).copied()
    }

    #[must_use]
    pub fn algorithm(&self) -> Option<&'a str> {
        self.get("algorithm")
    }

    /// Base64-encoded signature
    #[must_use]
    pub fn signature(&self) -> Option<&'a str> {
        self.get("signature")
    }

    /// Identifier of the signing key
    ///
    /// The licensing service sends `keyid`, the cavage draft spells it `keyId`. We accept both.
    #[must_use]
    pub fn key_id(&self) -> Option<&'a str> {
        self.get("keyid").or_else(|| self.get("keyId"))
    }

    /// Names of the components covered by the signature, if declared
    pub fn headers(&self) -> Option<impl Iterator<Item = &'a str>> {
        self.get("headers").map(str::split_whitespace)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.fields.iter().map(|(key, value)| (*key, *value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Later duplicates overwrite earlier ones. Use [`parse`] for untrusted input.
impl<'a> FromIterator<(&'a str, &'a str)> for SignatureHeader<'a> {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
