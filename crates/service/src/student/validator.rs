//! Field rules for a student candidate.
//!
//! Rules run in a fixed order and the first failure is reported, so a
//! candidate that breaks several rules always yields the same error. The
//! email and phone checks are deliberately loose and must stay that way.

use once_cell::sync::Lazy;
use regex::Regex;

use super::domain::StudentInput;
use super::errors::StudentError;

/// Minimum name length in characters.
pub const NAME_MIN_CHARS: usize = 2;

/// `local@domain.tld`, anchored at the start only; anything may follow.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("valid email regex"));

/// Optional `+`, optional leading 1-9, then 9 to 15 digits. One trailing
/// newline is accepted.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]?\d{9,15}\n?\z").expect("valid phone regex"));

/// Check a candidate; `Ok(())` means it may be handed to the store.
///
/// ```
/// use service::student::{domain::StudentInput, validator::validate, StudentError};
/// let ok = StudentInput::new("Ann Lee", "ann@x.com", "+12345678901", "CS", "1 Main St");
/// assert!(validate(&ok).is_ok());
/// let bad = StudentInput { email: "not-an-email".into(), ..ok };
/// assert_eq!(validate(&bad), Err(StudentError::InvalidEmailFormat));
/// ```
pub fn validate(input: &StudentInput) -> Result<(), StudentError> {
    let fields = [&input.name, &input.email, &input.phone, &input.course, &input.address];
    if fields.iter().any(|f| f.is_empty()) {
        return Err(StudentError::MissingField);
    }
    if !is_valid_email(&input.email) {
        return Err(StudentError::InvalidEmailFormat);
    }
    if !is_valid_phone(&input.phone) {
        return Err(StudentError::InvalidPhoneFormat);
    }
    if input.name.chars().count() < NAME_MIN_CHARS {
        return Err(StudentError::NameTooShort);
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}
