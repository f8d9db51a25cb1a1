//! Israeli ID number (Teudat Zehut) validation

use crate::ValidationError;

const ID_LENGTH: usize = 9;

/// Validates an Israeli ID number
///
/// Up to nine ASCII digits; shorter numbers are left-padded with zeros. Digits
/// are weighted 1, 2, 1, 2, … from the left, two-digit products have 9
/// subtracted, and the sum must be divisible by 10.
///
/// # Examples
///
/// ```
/// use plumbline_validation::validate_israeli_id_number;
///
/// assert!(validate_israeli_id_number("123456782").is_ok());
/// assert!(validate_israeli_id_number("133456782").is_err());
/// ```
pub fn validate_israeli_id_number(value: &str) -> Result<(), ValidationError> {
    if is_valid_israeli_id_number(value) {
        Ok(())
    } else {
        Err(ValidationError::new("Invalid ID number"))
    }
}

/// Boolean form of [`validate_israeli_id_number`]
pub fn is_valid_israeli_id_number(value: &str) -> bool {
    if value.is_empty() || value.len() > ID_LENGTH || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let padded = format!("{:0>width$}", value, width = ID_LENGTH);
    let sum: u32 = padded
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let step = u32::from(b - b'0') * (i as u32 % 2 + 1);
            if step > 9 {
                step - 9
            } else {
                step
            }
        })
        .sum();

    sum % 10 == 0
}
