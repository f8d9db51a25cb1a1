//! Phone number validation

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ValidationError;

/// International format: optional `+`, country code, area code, subscriber number
pub const PHONE_PATTERN_E164: &str = r"^(\+)?[1-9]{1,3}[0-9]{1,3}[0-9]{7,8}$";

/// Local format: area code followed by subscriber number
pub const PHONE_PATTERN_LOCAL: &str = r"^[0-9]{2,3}[0-9]{7,8}$";

static E164_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE_PATTERN_E164).unwrap());
static LOCAL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE_PATTERN_LOCAL).unwrap());

/// Validates a phone number against a regex pattern
///
/// With `sanitize`, every character that is not an ASCII digit is stripped
/// before matching, so `+1-202-555-0198` is checked as `12025550198`.
/// `pattern` is a bare regex source; the two bundled patterns are compiled once.
///
/// # Examples
///
/// ```
/// use plumbline_validation::{validate_phone_number, PHONE_PATTERN_E164, PHONE_PATTERN_LOCAL};
///
/// assert!(validate_phone_number("+1-202-555-0198", PHONE_PATTERN_E164, true).is_ok());
/// assert!(validate_phone_number("(541) 754-3010", PHONE_PATTERN_LOCAL, true).is_ok());
/// assert!(validate_phone_number("+01-202-555-0198", PHONE_PATTERN_E164, true).is_err());
/// ```
pub fn validate_phone_number(
    phone: &str,
    pattern: &str,
    sanitize: bool,
) -> Result<(), ValidationError> {
    let regex = pattern_regex(pattern)?;

    let phone: Cow<'_, str> = if sanitize {
        Cow::Owned(phone.chars().filter(char::is_ascii_digit).collect())
    } else {
        Cow::Borrowed(phone)
    };

    if regex.is_match(&phone) {
        Ok(())
    } else {
        Err(ValidationError::new("Invalid phone number."))
    }
}

/// Boolean form of [`validate_phone_number`]
pub fn is_valid_phone_number(phone: &str, pattern: &str, sanitize: bool) -> bool {
    validate_phone_number(phone, pattern, sanitize).is_ok()
}

fn pattern_regex(pattern: &str) -> Result<Cow<'static, Regex>, ValidationError> {
    match pattern {
        PHONE_PATTERN_E164 => Ok(Cow::Borrowed(&*E164_REGEX)),
        PHONE_PATTERN_LOCAL => Ok(Cow::Borrowed(&*LOCAL_REGEX)),
        custom => Regex::new(custom)
            .map(Cow::Owned)
            .map_err(|e| ValidationError::new(format!("Invalid phone pattern: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_e164() {
        assert!(is_valid_phone_number("+1-202-555-0198", PHONE_PATTERN_E164, true));
        assert!(is_valid_phone_number("+972 54 123 4567", PHONE_PATTERN_E164, true));
        assert!(!is_valid_phone_number("+01-202-555-0198", PHONE_PATTERN_E164, true));
    }

    #[test]
    fn test_unsanitized_input_keeps_separators() {
        assert!(is_valid_phone_number("+12025550198", PHONE_PATTERN_E164, false));
        assert!(!is_valid_phone_number("+1-202-555-0198", PHONE_PATTERN_E164, false));
    }

    #[test]
    fn test_local() {
        assert!(is_valid_phone_number("(541) 754-3010", PHONE_PATTERN_LOCAL, true));
        assert!(!is_valid_phone_number("754-3010", PHONE_PATTERN_LOCAL, true));
    }

    #[test]
    fn test_custom_pattern() {
        assert!(is_valid_phone_number("555 0100", r"^555\d{4}$", true));
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let err = validate_phone_number("123", "^[0-9", true).unwrap_err();
        assert!(err.message().starts_with("Invalid phone pattern"));
    }

    #[test]
    fn test_error_message() {
        let err = validate_phone_number("abc", PHONE_PATTERN_LOCAL, true).unwrap_err();
        assert_eq!(err.to_string(), "Invalid phone number.");
    }
}
