//!
//! Utilities for handling signature strings
//!

use crate::RawRequest;
use http::{
    header::{DATE, HOST},
    HeaderName, Method,
};
use miette::Diagnostic;
use thiserror::Error;

/// Components covered by the signature, in signing order
pub const COMPONENTS: [&str; 4] = ["(request-target)", "host", "date", "digest"];

/// Signature string error
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    /// Header had an invalid value (non-UTF8 value)
    #[error(transparent)]
    InvalidHeaderValue(#[from] http::header::ToStrError),

    /// Header is missing from the request
    #[error("Missing header value: {0}")]
    MissingHeaderValue(HeaderName),
}

/// Construct the canonical signing string
///
/// Exactly four lines, in this order, without a trailing new-line:
///
/// ```text
/// (request-target): <method> <path>
/// host: <host>
/// date: <date>
/// digest: <digest>
/// ```
///
/// The method gets lower-cased. Nothing else is normalised.
#[inline]
#[must_use]
pub fn construct(
    method: &Method,
    request_target: &str,
    host: &str,
    date: &str,
    digest: &str,
) -> String {
    let method = method.as_str().to_lowercase();
    format!("(request-target): {method} {request_target}\nhost: {host}\ndate: {date}\ndigest: {digest}")
}

/// Construct the canonical signing string from an inbound request
///
/// `digest` is the already verified digest header value
#[inline]
pub fn construct_for_request(request: &RawRequest, digest: &str) -> Result<String, Error> {
    Ok(construct(
        request.method(),
        request.request_target(),
        header_value(request, HOST)?,
        header_value(request, DATE)?,
        digest,
    ))
}

fn header_value(request: &RawRequest, name: HeaderName) -> Result<&str, Error> {
    let value = request
        .header(&name)
        .ok_or(Error::MissingHeaderValue(name))?;

    Ok(value.to_str()?)
}
