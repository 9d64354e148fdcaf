use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

pub const NAME_MIN_LEN: usize = 2;
pub const REASON_MIN_LEN: usize = 20;
pub const REASON_MAX_LEN: usize = 1000;
pub const PREFERRED_TIME_MIN_LEN: usize = 5;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").unwrap());

// Optional +1 country code, optional parenthesized area code, space/dash/dot separators.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+?1\s?)?(\([0-9]{3}\)|[0-9]{3})[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}$").unwrap()
});

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Why a single field failed validation. `Display` is the message shown
/// next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Name can only contain letters, spaces, hyphens, and apostrophes")]
    NameInvalidChars,

    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Phone number must be at least 10 digits")]
    PhoneTooFewDigits,
    #[error("Phone number cannot exceed 11 digits")]
    PhoneTooManyDigits,
    #[error("Please enter a valid phone number (e.g., (123) 456-7890 or 123-456-7890)")]
    PhoneInvalidFormat,

    #[error("Email address is required")]
    EmailRequired,
    #[error("Please enter a valid email address (e.g., name@example.com)")]
    EmailInvalid,

    #[error("Please tell us what brings you here")]
    ReasonRequired,
    #[error("Please provide more details (minimum 20 characters, currently {0})")]
    ReasonTooShort(usize),
    #[error("Please keep your message under 1000 characters")]
    ReasonTooLong,

    #[error("Preferred contact time is required")]
    PreferredTimeRequired,
    #[error("Please provide more specific time preferences (e.g., 'Weekday mornings' or 'After 6 PM')")]
    PreferredTimeTooVague,

    #[error("You must agree to be contacted to submit this form")]
    ConsentRequired,
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FieldError::NameRequired);
    }
    if char_len(name) < NAME_MIN_LEN {
        return Err(FieldError::NameTooShort);
    }
    if !NAME_RE.is_match(name) {
        return Err(FieldError::NameInvalidChars);
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), FieldError> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(FieldError::PhoneRequired);
    }
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < 10 {
        return Err(FieldError::PhoneTooFewDigits);
    }
    if digits > 11 {
        return Err(FieldError::PhoneTooManyDigits);
    }
    if !PHONE_RE.is_match(phone) {
        return Err(FieldError::PhoneInvalidFormat);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), FieldError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(FieldError::EmailRequired);
    }
    if !EMAIL_RE.is_match(email) {
        return Err(FieldError::EmailInvalid);
    }
    Ok(())
}

pub fn validate_reason(reason: &str) -> Result<(), FieldError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(FieldError::ReasonRequired);
    }
    let len = char_len(reason);
    if len < REASON_MIN_LEN {
        return Err(FieldError::ReasonTooShort(len));
    }
    if len > REASON_MAX_LEN {
        return Err(FieldError::ReasonTooLong);
    }
    Ok(())
}

pub fn validate_preferred_time(time: &str) -> Result<(), FieldError> {
    let time = time.trim();
    if time.is_empty() {
        return Err(FieldError::PreferredTimeRequired);
    }
    if char_len(time) < PREFERRED_TIME_MIN_LEN {
        return Err(FieldError::PreferredTimeTooVague);
    }
    Ok(())
}

pub fn validate_agree_to_contact(checked: bool) -> Result<(), FieldError> {
    if checked {
        Ok(())
    } else {
        Err(FieldError::ConsentRequired)
    }
}
