//! Field validation shared by the service and HTTP layers.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum length of names and titles.
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of a comment body.
pub const MAX_COMMENT_LENGTH: usize = 2000;

/// Trim `value` and require it to be non-empty and at most `max_len` characters.
///
/// Returns the trimmed value so callers store exactly what was validated.
pub fn required_text(field: &str, value: &str, max_len: usize) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Task points must be strictly positive.
pub fn validate_points(points: u32) -> Result<(), CoreError> {
    if points == 0 {
        return Err(CoreError::Validation(
            "Task points must be greater than zero".into(),
        ));
    }
    Ok(())
}

/// Trim and lowercase an email address, rejecting malformed ones.
pub fn normalize_email(email: &str) -> Result<String, CoreError> {
    let normalized = email.trim().to_lowercase();
    if !normalized.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{normalized}' is not a valid email address"
        )));
    }
    Ok(normalized)
}

pub fn validate_password_strength(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}

/// Trim tags, drop empty ones, and remove case-insensitive duplicates
/// while keeping first-seen order.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || out.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}
