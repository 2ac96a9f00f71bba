//! Input rules for signup and login. Every violated field is reported, not
//! just the first.

use email_address::{EmailAddress, Options};
use serde::Deserialize;

use crate::errors::{AppError, FieldError};

pub const NAME_MIN_CHARS: usize = 2;
pub const NAME_MAX_CHARS: usize = 50;
pub const PASSWORD_MIN_CHARS: usize = 6;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Signup input after validation. `email` is normalised.
#[derive(Debug, Clone)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Parses a bare `local@domain.tld` address and returns it lower-cased.
///
/// Display names (`Ada <ada@example.com>`), domain literals and TLD-less
/// domains are rejected so one mailbox has exactly one stored spelling.
pub fn normalize_email(raw: &str) -> Option<String> {
    let options = Options::default()
        .without_display_text()
        .without_domain_literal()
        .with_required_tld();
    EmailAddress::parse_with_options(raw.trim(), options)
        .ok()
        .map(|parsed| parsed.email().to_lowercase())
}

/// Returns `None` when the name is acceptable.
pub fn check_name(name: &str) -> Option<String> {
    let len = name.trim().chars().count();
    if (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        None
    } else {
        Some(format!(
            "Name must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters"
        ))
    }
}

fn check_password_strength(password: &str) -> Vec<String> {
    let mut problems = Vec::new();
    if password.chars().count() < PASSWORD_MIN_CHARS {
        problems.push(format!(
            "Password must be at least {PASSWORD_MIN_CHARS} characters long"
        ));
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_lower && has_upper && has_digit) {
        problems.push(
            "Password must contain at least one lowercase letter, one uppercase letter, and one number"
                .to_string(),
        );
    }
    problems
}

pub fn validate_signup(req: SignupRequest) -> Result<SignupInput, AppError> {
    let mut errors = Vec::new();

    let name = req.name.unwrap_or_default();
    if let Some(msg) = check_name(&name) {
        errors.push(FieldError::new("name", msg));
    }

    let email = normalize_email(&req.email.unwrap_or_default());
    if email.is_none() {
        errors.push(FieldError::new("email", "Please provide a valid email"));
    }

    let password = req.password.unwrap_or_default();
    for msg in check_password_strength(&password) {
        errors.push(FieldError::new("password", msg));
    }

    if req.confirm_password.as_deref() != Some(password.as_str()) {
        errors.push(FieldError::new("confirmPassword", "Passwords do not match"));
    }

    match email {
        Some(email) if errors.is_empty() => Ok(SignupInput {
            name: name.trim().to_string(),
            email,
            password,
        }),
        _ => Err(AppError::Validation(errors)),
    }
}

pub fn validate_login(req: LoginRequest) -> Result<LoginInput, AppError> {
    let mut errors = Vec::new();

    let email = normalize_email(&req.email.unwrap_or_default());
    if email.is_none() {
        errors.push(FieldError::new("email", "Please provide a valid email"));
    }

    let password = req.password.unwrap_or_default();
    if password.is_empty() {
        errors.push(FieldError::new("password", "Password is required"));
    }

    match email {
        Some(email) if errors.is_empty() => Ok(LoginInput { email, password }),
        _ => Err(AppError::Validation(errors)),
    }
}
