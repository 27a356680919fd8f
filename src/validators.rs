use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, UserError};
use crate::models::{NewUser, UserUpdate};

/// Input validation for user records

// Compile regex patterns once at startup
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // This regex is hardcoded and validated - it is a compile-time constant in practice
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("hardcoded email regex is invalid - fix source code")
});

/// Validate email format (RFC 5322 simplified)
pub fn validate_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

/// Validate a candidate record for creation.
///
/// Fails when firstname, lastname, or email is empty, when the email does
/// not match the conventional pattern, or when age is negative.
pub fn validate_new_user(user: &NewUser) -> Result<()> {
    if user.firstname.is_empty() {
        return Err(UserError::MissingField("firstname"));
    }
    if user.lastname.is_empty() {
        return Err(UserError::MissingField("lastname"));
    }
    if user.email.is_empty() {
        return Err(UserError::MissingField("email"));
    }
    if !validate_email(&user.email) {
        return Err(UserError::InvalidEmail(user.email.clone()));
    }
    if user.age < 0 {
        return Err(UserError::Validation("age must be non-negative".into()));
    }
    Ok(())
}

/// Validate a partial update: only the fields present are checked.
pub fn validate_update(changes: &UserUpdate) -> Result<()> {
    if matches!(changes.firstname.as_deref(), Some("")) {
        return Err(UserError::MissingField("firstname"));
    }
    if matches!(changes.lastname.as_deref(), Some("")) {
        return Err(UserError::MissingField("lastname"));
    }
    if let Some(email) = changes.email.as_deref() {
        if email.is_empty() {
            return Err(UserError::MissingField("email"));
        }
        if !validate_email(email) {
            return Err(UserError::InvalidEmail(email.to_string()));
        }
    }
    if matches!(changes.age, Some(age) if age < 0) {
        return Err(UserError::Validation("age must be non-negative".into()));
    }
    Ok(())
}
