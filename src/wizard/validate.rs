//! Field validators
//!
//! Pure functions from one step's data to its field errors. Invalid input
//! is reported through the returned record, never as a failure.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{AccountCredentials, Field, FieldErrors, PersonalInfo};

/// Minimum username length, in characters
pub const MIN_USERNAME_LEN: usize = 3;

/// Minimum password length, in characters
pub const MIN_PASSWORD_LEN: usize = 8;

// local@domain.tld with no whitespace and a single '@'
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Whether a string looks like an email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate the personal info step
pub fn validate_personal_info(info: &PersonalInfo) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if info.full_name.trim().is_empty() {
        errors.insert(Field::FullName, "Full name is required");
    }

    if info.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !is_valid_email(&info.email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }

    errors
}

/// Validate the account setup step
pub fn validate_account_setup(account: &AccountCredentials) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if account.username.trim().is_empty() {
        errors.insert(Field::Username, "Username is required");
    } else if account.username.chars().count() < MIN_USERNAME_LEN {
        errors.insert(
            Field::Username,
            format!(
                "Username must be at least {} characters long",
                MIN_USERNAME_LEN
            ),
        );
    }

    if account.password.is_empty() {
        errors.insert(Field::Password, "Password is required");
    } else if account.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            Field::Password,
            format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LEN
            ),
        );
    }

    errors
}
