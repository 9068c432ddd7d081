//! Input validation for the user-management API.
//!
//! Every check returns human-readable messages so they can be reported back
//! to the client verbatim in the `errors` array.

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidateEmail;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 50;

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s\-']+$").expect("valid name regex"));

static SPECIAL_CHAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("valid special char regex"));

/// Raw user fields as received from a request body.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserFields<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub password: Option<&'a str>,
}

/// Trims surrounding whitespace.
pub fn sanitize_input(value: &str) -> String {
    value.trim().to_string()
}

/// Validates a display name (trimmed before checking).
pub fn validate_name(name: &str) -> Result<(), String> {
    let name = name.trim();

    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    let len = name.chars().count();
    if len < MIN_NAME_LENGTH {
        return Err(format!(
            "Name must be at least {MIN_NAME_LENGTH} characters long"
        ));
    }
    if len > MAX_NAME_LENGTH {
        return Err(format!("Name cannot exceed {MAX_NAME_LENGTH} characters"));
    }

    if !NAME_REGEX.is_match(name) {
        return Err(
            "Name can only contain letters, spaces, hyphens, and apostrophes".to_string(),
        );
    }

    Ok(())
}

/// Validates e-mail syntax.
pub fn validate_email_format(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("The email address is empty".to_string());
    }

    if !email.validate_email() {
        return Err("The email address is not valid".to_string());
    }

    Ok(())
}

/// Returns every password-strength rule `password` violates.
pub fn validate_password_strength(password: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        ));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one number".to_string());
    }
    if !SPECIAL_CHAR_REGEX.is_match(password) {
        errors.push("Password must contain at least one special character".to_string());
    }

    errors
}

/// Validates a user payload.
///
/// Missing (or empty) required fields short-circuit the remaining checks,
/// all of them being reported at once. Password strength is only checked
/// when `require_password` is set.
pub fn validate_user_data(fields: &UserFields<'_>, require_password: bool) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let mut required = vec![("Name", fields.name), ("Email", fields.email)];
    if require_password {
        required.push(("Password", fields.password));
    }

    for (label, value) in required {
        if value.is_none_or(str::is_empty) {
            errors.push(format!("{label} is required"));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    if let Err(e) = validate_name(fields.name.unwrap_or_default()) {
        errors.push(e);
    }

    if let Err(e) = validate_email_format(fields.email.unwrap_or_default().trim()) {
        errors.push(format!("Email: {e}"));
    }

    if require_password {
        errors.extend(validate_password_strength(
            fields.password.unwrap_or_default(),
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
