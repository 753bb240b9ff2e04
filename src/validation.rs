/**
 * Input Validation Helpers
 *
 * Shared validation for the registration and contact endpoints.
 *
 * # Validation
 *
 * - Required fields must be non-empty after trimming
 * - Emails must look like `local@domain.tld` with an alphabetic TLD of at
 *   least two characters
 */

use crate::error::ApiError;

/// Validate a required field
///
/// Returns the trimmed value, or a `Validation` error naming the field
/// when the value is empty after trimming.
pub fn required(field: &str, value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!(
            "El campo {field} es requerido"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate email format
///
/// Accepts `local@domain.tld` where:
/// - the local part is non-empty and contains only alphanumerics and
///   `.`, `_`, `%`, `+`, `-`
/// - the domain is non-empty, contains only alphanumerics, `.` and `-`,
///   and has at least one dot
/// - the final label is alphabetic and at least two characters long
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'))
    {
        return false;
    }

    if domain.is_empty()
        || !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
    {
        return false;
    }

    // TLD: last dot-separated label, alphabetic, >= 2 chars
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

/// Validate an email, returning a `Validation` error on failure
pub fn check_email(email: &str) -> Result<(), ApiError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ApiError::validation("El formato del email no es válido"))
    }
}
