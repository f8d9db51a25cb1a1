//! Integration tests for plumbline-validation

use plumbline_validation::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("+1-202-555-0198", PHONE_PATTERN_E164, true)]
#[case("+01-202-555-0198", PHONE_PATTERN_E164, false)]
#[case("(541) 754-3010", PHONE_PATTERN_LOCAL, true)]
#[case("054-1234567", PHONE_PATTERN_LOCAL, true)]
#[case("12", PHONE_PATTERN_LOCAL, false)]
fn test_phone_numbers(#[case] phone: &str, #[case] pattern: &str, #[case] valid: bool) {
    assert_eq!(is_valid_phone_number(phone, pattern, true), valid);
}

#[rstest]
#[case("123456782", true)]
#[case("133456782", false)]
#[case("039337423", true)]
#[case("not-an-id", false)]
fn test_israeli_id_numbers(#[case] value: &str, #[case] valid: bool) {
    assert_eq!(validate_israeli_id_number(value).is_ok(), valid);
}

#[rstest]
#[case("me@example.com", true)]
#[case("first.last+tag@mail.example.org", true)]
#[case("me@example", false)]
#[case("me.example.com", false)]
fn test_emails(#[case] value: &str, #[case] valid: bool) {
    assert_eq!(validate_email(value).is_ok(), valid);
}

#[test]
fn test_errors_display_their_message() {
    let messages: Vec<String> = vec![
        validate_email("me@example").unwrap_err().to_string(),
        validate_phone_number("0", PHONE_PATTERN_E164, true)
            .unwrap_err()
            .to_string(),
        validate_israeli_id_number("1").unwrap_err().to_string(),
    ];

    assert_eq!(
        messages,
        vec![
            "Invalid email address",
            "Invalid phone number.",
            "Invalid ID number",
        ]
    );
}
