//! Honeypot Filter
//!
//! The waitlist forms carry a `company` input that is hidden from people
//! but gets filled in by form-stuffing scripts.

/// Name of the hidden form field
pub const HONEYPOT_FIELD: &str = "company";

/// True when the hidden field carries anything at all.
///
/// Whitespace counts: a human never focuses the field, so even a single
/// space means something typed into it.
pub const fn is_likely_automated(honeypot_value: &str) -> bool {
    !honeypot_value.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_human() {
        assert!(!is_likely_automated(""));
    }

    #[test]
    fn test_any_content_is_automated() {
        assert!(is_likely_automated("spam"));
        assert!(is_likely_automated("Acme Inc."));
        assert!(is_likely_automated(" "));
        assert!(is_likely_automated("\n"));
    }
}
