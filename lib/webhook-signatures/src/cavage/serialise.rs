use super::SignatureHeader;
use std::fmt::Write;

/// Serialise a signature header back into its `key="value", ...` form
#[inline]
#[must_use]
pub fn serialise(header: &SignatureHeader<'_>) -> String {
    let mut buffer = String::new();

    for (idx, (key, value)) in header.iter().enumerate() {
        if idx != 0 {
            buffer.push_str(", ");
        }

        let _ = write!(buffer, "{key}=\"{value}\"");
    }

    buffer
}
