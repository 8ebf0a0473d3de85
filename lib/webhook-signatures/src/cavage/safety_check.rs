use miette::Diagnostic;
use std::time::{Duration, SystemTime};
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
pub enum SafetyCheckError {
    #[error(transparent)]
    InvalidDateHeader(#[from] httpdate::Error),
}

/// Check whether the signed `Date` header lies within `max_skew` of `now`
///
/// Dates in the future count the same as dates in the past
pub fn is_fresh(
    date_header: &str,
    max_skew: Duration,
    now: SystemTime,
) -> Result<bool, SafetyCheckError> {
    let signed_at = httpdate::parse_http_date(date_header)?;
    let skew = match now.duration_since(signed_at) {
        Ok(age) => age,
        Err(err) => err.duration(),
    };

    Ok(skew <= max_skew)
}
