//! Credential policy shared by password change and admin bootstrap.

use crate::error::CoreError;

/// Minimum accepted length (in characters) for an admin password.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Reject passwords shorter than [`MIN_PASSWORD_LENGTH`].
pub fn validate_password_strength(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters long"
        )));
    }
    Ok(())
}
