//! Email Shape Check
//!
//! A deliberately loose check: the address must parse and its domain must
//! look like a hostname with at least one dot. Deliverability is the
//! backend's problem.

use std::str::FromStr;

use email_address::EmailAddress;

/// Parse a trimmed address, rejecting bare hosts such as `user@localhost`.
fn parse(value: &str) -> Option<EmailAddress> {
    let address = EmailAddress::from_str(value.trim()).ok()?;
    let domain = address.domain();

    // Domain literals like `[127.0.0.1]` are valid RFC 5322 but not for a waitlist
    if domain.starts_with('[') {
        return None;
    }

    let mut labels = domain.split('.');
    let has_dot = domain.contains('.');
    (has_dot && labels.all(|label| !label.is_empty())).then_some(address)
}

/// Whether `value` looks like an email address worth submitting
pub fn looks_like_email(value: &str) -> bool {
    parse(value).is_some()
}

/// Trim surrounding whitespace and lowercase the domain part.
///
/// Returns `None` when the value does not look like an email.
pub fn normalize(value: &str) -> Option<String> {
    let address = parse(value)?;
    Some(format!(
        "{}@{}",
        address.local_part(),
        address.domain().to_ascii_lowercase()
    ))
}
