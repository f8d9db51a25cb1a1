//! Email address validation
//!
//! Accepts dot-atom and quoted local parts, host names with an alphabetic or
//! punycode top-level label, and bracketed IPv4 / `IPv6:` address literals.

use std::net::{Ipv4Addr, Ipv6Addr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ValidationError;

const MAX_ADDRESS_LENGTH: usize = 254;
const MAX_LOCAL_LENGTH: usize = 64;
const MAX_LABEL_LENGTH: usize = 63;

// local@host or local@[literal], case-insensitive
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)^(?P<local>(?:[\x21\x23-\x27\x2A\x2B\x2D\x2F-\x39\x3D\x3F\x5E-\x7E]+|"(?:[\x01-\x08\x0B\x0C\x0E-\x1F\x21\x23-\x5B\x5D-\x7F]|\\[\x00-\x7F])*")(?:\.(?:[\x21\x23-\x27\x2A\x2B\x2D\x2F-\x39\x3D\x3F\x5E-\x7E]+|"(?:[\x01-\x08\x0B\x0C\x0E-\x1F\x21\x23-\x5B\x5D-\x7F]|\\[\x00-\x7F])*"))*)@(?:(?P<host>(?:(?:xn--)?[a-z0-9]+(?:-[a-z0-9]+)*\.)+(?:[a-z][a-z0-9]*|xn--[a-z0-9]+)(?:-[a-z0-9]+)*)|\[(?P<literal>[^\[\]]+)\])$"#,
    )
    .unwrap()
});

/// Validates an email address
///
/// # Examples
///
/// ```
/// use plumbline_validation::is_valid_email;
///
/// assert!(is_valid_email("me@example.com"));
/// assert!(!is_valid_email("me@example"));
/// ```
pub fn is_valid_email(value: &str) -> bool {
    if !value.is_ascii() || value.len() > MAX_ADDRESS_LENGTH {
        return false;
    }

    let Some(captures) = EMAIL_REGEX.captures(value) else {
        return false;
    };

    if captures["local"].len() > MAX_LOCAL_LENGTH {
        return false;
    }

    if let Some(host) = captures.name("host") {
        return host
            .as_str()
            .split('.')
            .all(|label| label.len() <= MAX_LABEL_LENGTH);
    }

    captures
        .name("literal")
        .map(|literal| is_valid_address_literal(literal.as_str()))
        .unwrap_or(false)
}

/// Validates an email address, failing with `Invalid email address`
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(ValidationError::new("Invalid email address"))
    }
}

fn is_valid_address_literal(literal: &str) -> bool {
    match literal.get(..5) {
        Some(prefix) if prefix.eq_ignore_ascii_case("IPv6:") => {
            literal[5..].parse::<Ipv6Addr>().is_ok()
        }
        _ => literal.parse::<Ipv4Addr>().is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user_name@example-domain.com"));
        assert!(is_valid_email("USER@EXAMPLE.COM"));
        assert!(is_valid_email("\"john.doe\"@example.com"));
        assert!(is_valid_email("user@xn--bcher-kva.example"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user..name@example.com"));
        assert!(!is_valid_email(".user@example.com"));
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email("user@example.123"));
        assert!(!is_valid_email("üser@example.com"));
    }

    #[test]
    fn test_address_literals() {
        assert!(is_valid_email("user@[192.168.0.1]"));
        assert!(is_valid_email("user@[IPv6:2001:db8::1]"));
        assert!(!is_valid_email("user@[300.1.1.1]"));
        assert!(!is_valid_email("user@[2001:db8::1]"));
    }

    #[test]
    fn test_length_limits() {
        let local = "a".repeat(65);
        assert!(!is_valid_email(&format!("{}@example.com", local)));
        assert!(is_valid_email(&format!("{}@example.com", &local[1..])));

        let label = "b".repeat(64);
        assert!(!is_valid_email(&format!("user@{}.com", label)));
        assert!(is_valid_email(&format!("user@{}.com", &label[1..])));

        let long_host = vec!["c".repeat(60); 5].join(".");
        assert!(!is_valid_email(&format!("user@{}.com", long_host)));
    }

    #[test]
    fn test_validate_email_message() {
        let err = validate_email("me@example").unwrap_err();
        assert_eq!(err.message(), "Invalid email address");
        assert!(validate_email("me@example.com").is_ok());
    }
}
