//! Field validation for the auth form.
//!
//! Rules:
//! - `email`: always required; must look like `local@label.tld`
//! - `fullName`: sign-up only; 2 to 50 characters, whitespace included
//!
//! Input is checked as typed; nothing is trimmed or rewritten.
//!
//! Validation is pure: the same input always yields the same result.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::mode::FormMode;

pub const FULL_NAME_MIN_LEN: usize = 2;
pub const FULL_NAME_MAX_LEN: usize = 50;

/// Local part may not start with `.` or contain `..`; both are checked
/// separately since the regex engine has no lookahead.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$").expect("email regex compiles")
});

/// Raw form input as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub email: String,
    pub full_name: Option<String>,
}

impl FormValues {
    #[must_use]
    pub fn new(email: impl Into<String>, full_name: Option<String>) -> Self {
        Self { email: email.into(), full_name }
    }

    /// Full name for dispatch; absent becomes empty.
    #[must_use]
    pub fn full_name_or_empty(&self) -> &str {
        self.full_name.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Email,
    FullName,
}

impl FormField {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::FullName => "fullName",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    InvalidEmail,
    Required,
    TooShort { min: usize },
    TooLong { max: usize },
}

/// A single field failure. Display is the inline message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: FormField,
    pub kind: ValidationKind,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ValidationKind::InvalidEmail => f.write_str("Invalid email address"),
            ValidationKind::Required => f.write_str("Required"),
            ValidationKind::TooShort { min } => write!(f, "Must contain at least {min} characters"),
            ValidationKind::TooLong { max } => write!(f, "Must contain at most {max} characters"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

fn check_email(email: &str) -> Result<String, ValidationError> {
    if is_valid_email(email) {
        Ok(email.to_owned())
    } else {
        Err(ValidationError { field: FormField::Email, kind: ValidationKind::InvalidEmail })
    }
}

fn check_full_name(full_name: Option<&str>) -> Result<String, ValidationError> {
    let err = |kind| ValidationError { field: FormField::FullName, kind };
    let Some(raw) = full_name else {
        return Err(err(ValidationKind::Required));
    };
    let len = raw.chars().count();
    if len < FULL_NAME_MIN_LEN {
        return Err(err(ValidationKind::TooShort { min: FULL_NAME_MIN_LEN }));
    }
    if len > FULL_NAME_MAX_LEN {
        return Err(err(ValidationKind::TooLong { max: FULL_NAME_MAX_LEN }));
    }
    Ok(raw.to_owned())
}

/// Validate `values` for `mode`, returning the first failing field.
///
/// # Errors
///
/// Returns a [`ValidationError`] tagged with the offending field.
pub fn validate(values: &FormValues, mode: FormMode) -> Result<FormValues, ValidationError> {
    let email = check_email(&values.email)?;
    let full_name = if mode.requires_full_name() {
        Some(check_full_name(values.full_name.as_deref())?)
    } else {
        values.full_name.clone()
    };
    Ok(FormValues { email, full_name })
}

/// Every failing field, in form order. Empty when `values` are valid.
#[must_use]
pub fn validate_all(values: &FormValues, mode: FormMode) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if let Err(e) = check_email(&values.email) {
        errors.push(e);
    }
    if mode.requires_full_name() {
        if let Err(e) = check_full_name(values.full_name.as_deref()) {
            errors.push(e);
        }
    }
    errors
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
